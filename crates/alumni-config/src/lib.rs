//! # alumni-config
//!
//! Layered configuration loading for the alumni directory using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ALUMNI_*` prefix, `__` as separator)
//! 2. Project-level `.alumni/config.toml`
//! 3. User-level `~/.config/alumni/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ALUMNI_STORAGE__DATA_DIR` -> `storage.data_dir`,
//! `ALUMNI_AVATAR__BASE_URL` -> `avatar.base_url`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use alumni_config::AlumniConfig;
//!
//! let config = AlumniConfig::load_with_dotenv().expect("config");
//! let dir = config.storage.resolved_data_dir().expect("data dir");
//! println!("profiles live in {}", dir.display());
//! ```

mod avatar;
mod error;
mod general;
mod storage;

pub use avatar::AvatarConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::{BackendKind, StorageConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AlumniConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub avatar: AvatarConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl AlumniConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".alumni/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("ALUMNI_").split("__"))
    }

    /// Reject values that would make the stores misbehave.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.avatar.validate()?;
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("alumni").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AlumniConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage.backend, BackendKind::File);
        assert!(config.storage.data_dir.is_empty());
        assert_eq!(config.general.default_limit, 50);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: AlumniConfig = AlumniConfig::figment().extract()?;
            assert_eq!(config.avatar.registration_initials, 2);
            assert_eq!(config.avatar.update_initials, 3);
            Ok(())
        });
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut config = AlumniConfig::default();
        config.general.default_limit = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
