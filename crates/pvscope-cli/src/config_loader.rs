//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use pvscope_core::config::{CliConfigOverrides, LayeredConfig};
use std::path::Path;

/// Configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "pvscope.toml";

/// Load layered configuration with CLI overrides.
///
/// An explicit path must exist. Without one, `pvscope.toml` is read only
/// when it is present.
pub fn load_config(path: Option<&Path>, overrides: CliConfigOverrides) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    match path {
        Some(path) => {
            config = config
                .load_from_file(path)
                .with_context(|| format!("Failed to load configuration file {}", path.display()))?;
        }
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                tracing::debug!("Using {}", DEFAULT_CONFIG_FILE);
                config = config
                    .load_from_file(default_path)
                    .context("Failed to load configuration file")?;
            }
        }
    }

    let mut config = config.load_from_env();
    config.update_from_cli(overrides);
    Ok(config)
}
