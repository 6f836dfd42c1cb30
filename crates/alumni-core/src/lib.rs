//! # alumni-core
//!
//! Core types shared across the alumni directory crates.
//!
//! This crate provides:
//! - Entity structs for the two persisted records (`Account`, `Profile`) and
//!   the editable profile form (`ProfileFields`)
//! - Credential presence checks
//! - The derived-avatar algorithm (initials + placeholder image URL)
//! - Account ID generation
//! - Navigation targets for the directory views
//!
//! Nothing here performs I/O; persistence lives in `alumni-store`.

pub mod avatar;
pub mod credentials;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
