//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;

use std::path::Path;

use kpr_core::{KprConfig, KprError};

/// Load configuration from an explicit path, or defaults when absent.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<KprConfig> {
    match config_path {
        Some(path) => {
            let config = KprConfig::from_file(Path::new(path))
                .map_err(|e| KprError::Config(format!("{path}: {e}")))?;
            Ok(config)
        }
        None => Ok(KprConfig::default()),
    }
}
