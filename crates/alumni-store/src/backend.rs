//! Key-value backends holding the persisted mappings.
//!
//! Each storage key holds one whole mapping serialized as a JSON object.
//! Backends know nothing about the records inside; `PersistedMap` does the
//! (de)serialization.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use alumni_config::{BackendKind, StorageConfig};

use crate::error::StoreError;

/// String-keyed, string-valued durable storage.
pub trait StorageBackend {
    /// Read the value under `key`. A key that was never written is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the value exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Stores each key as `{dir}/{key}.json`.
///
/// Writes go to a temp file in the same directory and are renamed over the
/// target, so a reader sees either the old or the new mapping.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open (creating if needed) a backend rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| StoreError::Storage(format!("mkdir {}: {e}", dir.display())))?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Storage(format!("read {}: {e}", path.display()))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)
            .map_err(|e| StoreError::Storage(format!("temp file in {}: {e}", self.dir.display())))?;
        tmp.write_all(value.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| StoreError::Storage(format!("write {}: {e}", path.display())))?;
        tmp.persist(&path)
            .map_err(|e| StoreError::Storage(format!("rename into {}: {e}", path.display())))?;
        Ok(())
    }
}

/// In-process backend. Clones share the same underlying map, so two store
/// instances opened on clones see each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value under `key`, for inspecting what was persisted.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Build the backend selected by configuration.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the data directory cannot be resolved or created.
pub fn from_config(config: &StorageConfig) -> Result<Rc<dyn StorageBackend>, StoreError> {
    match config.backend {
        BackendKind::Memory => Ok(Rc::new(MemoryBackend::new())),
        BackendKind::File => {
            let dir = config
                .resolved_data_dir()
                .map_err(|e| StoreError::Storage(e.to_string()))?;
            tracing::debug!(dir = %dir.display(), "using file backend");
            Ok(Rc::new(FileBackend::new(dir)?))
        }
    }
}
