//! # Configuration Loader
//!
//! Reads a TOML file and maps it onto the [`AppConfig`] DTO. Pure data
//! loading: no validation, no defaults. Accept whatever is in the file.

use std::path::Path;

use anyhow::Context;
use fc_core::config::AppConfig;

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}
