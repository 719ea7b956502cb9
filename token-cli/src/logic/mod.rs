//! Pure functional logic
//!
//! Everything here takes inputs and returns outputs: no I/O, no printing.
//! The `commands` module wraps these with file reads and output.

pub mod config;
pub mod verdict;

pub use config::{parse_log_level, validate_log_level, OutputFormat};
pub use verdict::{format_summary, format_verdict_line, parse_public_key_hex, report_json};
