//! Shared test utilities for alumni-store unit tests.

use std::rc::Rc;

use alumni_core::avatar::AvatarStyle;

use crate::backend::{MemoryBackend, StorageBackend};
use crate::{AccountStore, ProfileStore, open_stores};

/// Fresh stores over `backend` with a fixed clock.
pub fn stores_on(backend: &MemoryBackend) -> (AccountStore, ProfileStore) {
    let shared: Rc<dyn StorageBackend> = Rc::new(backend.clone());
    let (accounts, profiles) = open_stores(&shared, AvatarStyle::default()).expect("open stores");
    (accounts.with_clock(|| 1_712_345_678_901), profiles)
}
