//! Structured error types for the token CLI

use thiserror::Error;

/// Token CLI error types with proper context
#[derive(Error, Debug)]
pub enum CliError {
    // Configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to load config from {path}: {reason}")]
    ConfigLoadFailed { path: String, reason: String },

    // Proposal input
    #[error("Failed to read proposal file '{path}': {reason}")]
    ProposalLoadFailed { path: String, reason: String },

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    // Verdicts
    #[error("{rejected} of {total} proposal(s) rejected")]
    Rejected { rejected: usize, total: usize },

    // Serialization
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
