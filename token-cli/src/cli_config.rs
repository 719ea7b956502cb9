//! CLI configuration loader and runtime defaults.

use crate::error::{CliError, CliResult};
use crate::logic::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI config filename under ~/.token-cli/
pub const DEFAULT_CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    pub defaults: Option<CliDefaults>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct CliDefaults {
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
    pub fail_on_reject: Option<bool>,
}

/// Settings after merging file defaults with command-line overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeDefaults {
    pub format: OutputFormat,
    pub log_level: String,
    pub fail_on_reject: bool,
}

impl Default for RuntimeDefaults {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            log_level: "warn".to_string(),
            fail_on_reject: true,
        }
    }
}

pub fn default_config_path() -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        home.join(".token-cli").join(DEFAULT_CONFIG_FILENAME)
    } else {
        PathBuf::from("./token-cli.toml")
    }
}

/// Load the config file
///
/// An explicit path must exist. The default path is optional and falls back
/// to built-in defaults.
pub fn load_config(path: Option<&str>) -> CliResult<CliConfig> {
    let config_path = path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    if !config_path.exists() {
        if path.is_some() {
            return Err(CliError::ConfigError(format!(
                "Configuration file not found: {}",
                config_path.display()
            )));
        }
        return Ok(CliConfig::default());
    }

    load_config_strict(&config_path)
}

pub fn load_config_strict(path: &Path) -> CliResult<CliConfig> {
    let raw = fs::read_to_string(path).map_err(|e| CliError::ConfigLoadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    parse_config(&raw)
}

pub fn parse_config(raw: &str) -> CliResult<CliConfig> {
    let config: CliConfig = toml::from_str(raw)?;
    if let Some(level) = config.defaults.as_ref().and_then(|d| d.log_level.as_deref()) {
        crate::logic::validate_log_level(level)?;
    }
    Ok(config)
}

pub fn merge_defaults(base: RuntimeDefaults, overrides: &CliDefaults) -> RuntimeDefaults {
    RuntimeDefaults {
        format: overrides.format.unwrap_or(base.format),
        log_level: overrides.log_level.clone().unwrap_or(base.log_level),
        fail_on_reject: overrides.fail_on_reject.unwrap_or(base.fail_on_reject),
    }
}

pub fn resolve_runtime_defaults(config: &CliConfig) -> RuntimeDefaults {
    match &config.defaults {
        Some(defaults) => merge_defaults(RuntimeDefaults::default(), defaults),
        None => RuntimeDefaults::default(),
    }
}
