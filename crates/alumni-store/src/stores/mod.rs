//! The two data-layer stores.
//!
//! `AccountStore` owns the email -> account mapping; `ProfileStore` owns the
//! account id -> profile mapping. Profile operations take an account or
//! account id but never call back into `AccountStore`.

pub mod accounts;
pub mod profiles;
