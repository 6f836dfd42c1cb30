//! # alumni-store
//!
//! The alumni directory's data layer.
//!
//! Two stores, each owning one persisted mapping:
//! - [`AccountStore`]: email -> account (register, authenticate)
//! - [`ProfileStore`]: account id -> profile (default on registration,
//!   lookup by owner, full-record update, list)
//!
//! Both mappings live in a [`StorageBackend`] under fixed keys and are
//! written in full, synchronously, at the end of every successful mutation
//! (see [`PersistedMap::mutate`]).

pub mod backend;
pub mod error;
pub mod persisted;
pub mod stores;

#[cfg(test)]
mod test_support;

use std::rc::Rc;

use alumni_core::avatar::AvatarStyle;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::StoreError;
pub use persisted::PersistedMap;
pub use stores::accounts::{ACCOUNTS_KEY, AccountStore};
pub use stores::profiles::{PROFILES_KEY, ProfileStore};

/// Open both stores on the same backend.
///
/// # Errors
///
/// Returns `StoreError` if either persisted mapping cannot be read.
pub fn open_stores(
    backend: &Rc<dyn StorageBackend>,
    avatar: AvatarStyle,
) -> Result<(AccountStore, ProfileStore), StoreError> {
    let accounts = AccountStore::open(Rc::clone(backend))?;
    let profiles = ProfileStore::open(Rc::clone(backend), avatar)?;
    Ok((accounts, profiles))
}
