//! Primitive parsing errors

use thiserror::Error;

/// Error while parsing an identity handle from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityParseError {
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
