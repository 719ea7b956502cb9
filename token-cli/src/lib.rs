//! Token CLI Library
//!
//! Command-line front end for the owned-token transaction verifier:
//! verify proposal files and derive party handles.
//!
//! ## Architecture
//!
//! - **Functional Core** (`logic/` module): Pure formatting and parsing
//! - **Imperative Shell** (`commands/` module): File reads and printing
//! - **Error Handling** (`error` module): Structured error types
//! - **Output Abstraction** (`output` module): Testable printing interface

pub mod argument_parsing;
pub mod cli_config;
pub mod commands;
pub mod error;
pub mod logic;
pub mod output;

pub use argument_parsing::{execute, run_cli, TokenCli, TokenCommand};
pub use error::{CliError, CliResult};
pub use output::Output;
