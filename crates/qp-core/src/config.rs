//! Render configuration discovery.
//!
//! Resolution order: CLI argument → environment variable → built-in defaults.

use std::path::{Path, PathBuf};

use qp_report::ReportConfig;
use tracing::debug;

use crate::error::{CliError, Result};

/// Environment variable naming a config file.
pub const ENV_CONFIG_PATH: &str = "QP_CONFIG";

/// Where the active configuration came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided via CLI argument.
    CliArgument(PathBuf),
    /// Named by the `QP_CONFIG` environment variable.
    Environment(PathBuf),
    /// Using built-in defaults.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::CliArgument(p) => write!(f, "CLI argument ({})", p.display()),
            ConfigSource::Environment(p) => write!(f, "environment variable ({})", p.display()),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Pick the config file to use, if any.
///
/// An explicit path always wins, even if it does not exist, so that a typo
/// is reported instead of silently falling back.
pub fn resolve_config_path(cli_path: Option<&Path>) -> ConfigSource {
    if let Some(path) = cli_path {
        return ConfigSource::CliArgument(path.to_path_buf());
    }
    match std::env::var_os(ENV_CONFIG_PATH) {
        Some(value) if !value.is_empty() => ConfigSource::Environment(PathBuf::from(value)),
        _ => ConfigSource::BuiltinDefault,
    }
}

/// Load the render configuration following the resolution order.
pub fn load_config(cli_path: Option<&Path>) -> Result<(ReportConfig, ConfigSource)> {
    let source = resolve_config_path(cli_path);
    let config = match &source {
        ConfigSource::CliArgument(path) | ConfigSource::Environment(path) => load_file(path)?,
        ConfigSource::BuiltinDefault => ReportConfig::default(),
    };
    debug!(source = %source, "Render configuration resolved");
    Ok((config, source))
}

fn load_file(path: &Path) -> Result<ReportConfig> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let config = ReportConfig::from_json(&text).map_err(|e| CliError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    config.validate().map_err(|e| CliError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(config)
}
