//! Local persistence configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

/// Which key-value backend holds the persisted mappings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// One JSON file per storage key under `data_dir`.
    #[default]
    File,
    /// Process-local map; nothing survives a restart.
    Memory,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the persisted mappings. Empty means the platform
    /// data directory (`~/.local/share/alumni` on Linux).
    #[serde(default)]
    pub data_dir: String,

    #[serde(default)]
    pub backend: BackendKind,
}

impl StorageConfig {
    /// The directory the file backend writes to.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoDataDir` if `data_dir` is unset and the
    /// platform has no data directory.
    pub fn resolved_data_dir(&self) -> Result<PathBuf, ConfigError> {
        if !self.data_dir.trim().is_empty() {
            return Ok(PathBuf::from(self.data_dir.trim()));
        }
        dirs::data_dir()
            .map(|dir| dir.join("alumni"))
            .ok_or(ConfigError::NoDataDir)
    }
}
