use alumni_config::{AlumniConfig, BackendKind};
use anyhow::Context;

use crate::cli::GlobalFlags;

/// Load layered configuration (dotenv, TOML files, `ALUMNI_*`) and apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<AlumniConfig> {
    let config = AlumniConfig::load_with_dotenv().context("failed to load alumni configuration")?;
    let config = apply_overrides(config, flags);
    if config.storage.backend == BackendKind::Memory {
        tracing::warn!("storage.backend is 'memory'; nothing will persist after this run");
    }
    Ok(config)
}

fn apply_overrides(mut config: AlumniConfig, flags: &GlobalFlags) -> AlumniConfig {
    if let Some(dir) = &flags.data_dir {
        tracing::debug!(data_dir = %dir, "data directory overridden on the command line");
        config.storage.data_dir.clone_from(dir);
    }
    config
}
