//! Token CLI argument parsing
//!
//! Parses the command line, loads configuration, initialises logging and
//! dispatches to the command handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::cli_config::{load_config, resolve_runtime_defaults, RuntimeDefaults};
use crate::commands;
use crate::error::CliResult;
use crate::logic::{parse_log_level, OutputFormat};
use crate::output::{ConsoleOutput, Output};

/// Owned-token transaction verifier
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "token-cli")]
pub struct TokenCli {
    /// Enable verbose output
    #[arg(short, long, env = "TOKEN_CLI_VERBOSE")]
    pub verbose: bool,

    /// Output format (overrides config)
    #[arg(short, long, value_enum, env = "TOKEN_CLI_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Configuration file path
    #[arg(short, long, env = "TOKEN_CLI_CONFIG")]
    pub config: Option<String>,

    /// Exit successfully even when proposals are rejected
    #[arg(long)]
    pub allow_reject: bool,

    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum TokenCommand {
    /// Verify one proposed transaction (JSON file)
    Verify {
        /// Proposal file
        file: PathBuf,
    },
    /// Verify a JSON array of proposed transactions
    Batch {
        /// Proposals file
        file: PathBuf,
    },
    /// Derive a party handle from a hex-encoded public key
    Party {
        /// Public key bytes, hex
        public_key: String,
    },
}

/// Apply command-line overrides on top of config defaults
pub fn apply_overrides(mut defaults: RuntimeDefaults, cli: &TokenCli) -> RuntimeDefaults {
    if let Some(format) = cli.format {
        defaults.format = format;
    }
    if cli.verbose {
        defaults.log_level = "debug".to_string();
    }
    if cli.allow_reject {
        defaults.fail_on_reject = false;
    }
    defaults
}

/// Run a parsed command against the given output
pub fn execute(cli: &TokenCli, defaults: &RuntimeDefaults, output: &dyn Output) -> CliResult<()> {
    match &cli.command {
        TokenCommand::Verify { file } => commands::handle_verify_command(file, defaults, output),
        TokenCommand::Batch { file } => commands::handle_batch_command(file, defaults, output),
        TokenCommand::Party { public_key } => {
            commands::handle_party_command(public_key, defaults, output)
        }
    }
}

/// Report a command failure once, through `output`
///
/// Returns whether the command succeeded.
pub fn finish(result: CliResult<()>, output: &dyn Output) -> CliResult<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(err) => {
            output.error(&err.to_string())?;
            Ok(false)
        }
    }
}

/// Main CLI runner
///
/// Startup failures (config, logging) surface as `Err`; command failures are
/// printed by [`finish`] and only set the exit code.
pub fn run_cli() -> Result<ExitCode> {
    let cli = TokenCli::parse();

    let config = load_config(cli.config.as_deref())?;
    let defaults = apply_overrides(resolve_runtime_defaults(&config), &cli);

    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&defaults.log_level)?)
        .with_writer(std::io::stderr)
        .init();
    debug!(?defaults, "configuration loaded");

    let output = ConsoleOutput;
    let succeeded = finish(execute(&cli, &defaults, &output), &output)?;
    Ok(if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
