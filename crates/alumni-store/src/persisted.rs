//! Whole-mapping persistence shared by both stores.

use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::StorageBackend;
use crate::error::StoreError;

/// A string-keyed mapping mirrored to one storage key.
///
/// Reads are served from memory. Every mutation goes through
/// [`PersistedMap::mutate`], which re-reads the persisted mapping, applies the
/// change, writes the whole mapping back, and only then updates memory.
pub struct PersistedMap<V> {
    key: &'static str,
    backend: Rc<dyn StorageBackend>,
    entries: BTreeMap<String, V>,
}

impl<V> PersistedMap<V>
where
    V: Serialize + DeserializeOwned,
{
    /// Load the mapping under `key`. A missing, blank, or `null` value is an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored value does not parse.
    pub fn open(backend: Rc<dyn StorageBackend>, key: &'static str) -> Result<Self, StoreError> {
        let entries = read(backend.as_ref(), key)?;
        tracing::debug!(key, entries = entries.len(), "loaded mapping");
        Ok(Self {
            key,
            backend,
            entries,
        })
    }

    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    #[must_use]
    pub const fn entries(&self) -> &BTreeMap<String, V> {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Replace memory with whatever is currently persisted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend read fails or the value is corrupt.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        self.entries = read(self.backend.as_ref(), self.key)?;
        Ok(())
    }

    /// Apply `change` to the latest persisted mapping and save it.
    ///
    /// If `change` returns an error, or the write fails, nothing is persisted
    /// and the in-memory mapping is left as it was.
    ///
    /// # Errors
    ///
    /// Propagates the error from `change`, the backend, or serialization.
    pub fn mutate<T, F>(&mut self, change: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut BTreeMap<String, V>) -> Result<T, StoreError>,
    {
        let mut latest = read(self.backend.as_ref(), self.key)?;
        let output = change(&mut latest)?;
        let raw = serde_json::to_string(&latest)?;
        self.backend.set(self.key, &raw)?;
        tracing::debug!(key = self.key, entries = latest.len(), "persisted mapping");
        self.entries = latest;
        Ok(output)
    }
}

fn read<V: DeserializeOwned>(
    backend: &dyn StorageBackend,
    key: &str,
) -> Result<BTreeMap<String, V>, StoreError> {
    let Some(raw) = backend.get(key)? else {
        return Ok(BTreeMap::new());
    };
    if raw.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    let parsed: Option<BTreeMap<String, V>> =
        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })?;
    Ok(parsed.unwrap_or_default())
}
