//! Pure configuration logic

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// How verdicts are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

/// Validate log level
pub fn validate_log_level(level: &str) -> CliResult<()> {
    parse_log_level(level).map(|_| ())
}

/// Parse a log level name into a tracing level
pub fn parse_log_level(level: &str) -> CliResult<tracing::Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(tracing::Level::TRACE),
        "debug" => Ok(tracing::Level::DEBUG),
        "info" => Ok(tracing::Level::INFO),
        "warn" => Ok(tracing::Level::WARN),
        "error" => Ok(tracing::Level::ERROR),
        other => Err(CliError::ConfigError(format!(
            "Unknown log level: '{}'. Supported: trace, debug, info, warn, error",
            other
        ))),
    }
}
