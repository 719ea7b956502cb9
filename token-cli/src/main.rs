//! Token Command-Line Interface
//!
//! Entry point for the token-cli binary. Parses command-line arguments
//! and delegates to the appropriate command handler.

use std::process::ExitCode;

use token_cli::run_cli;

fn main() -> anyhow::Result<ExitCode> {
    run_cli()
}
