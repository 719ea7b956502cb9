//! Verify commands for the token CLI
//!
//! - **Pure Logic**: verdict formatting lives in `crate::logic`
//! - **Imperative Shell**: proposal file reads, output printing

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use lib_tokens::{verify_batch, BatchSummary, ProposedTransaction, Verdict};

use crate::cli_config::RuntimeDefaults;
use crate::error::{CliError, CliResult};
use crate::logic::{format_summary, format_verdict_line, report_json, OutputFormat};
use crate::output::Output;

// ============================================================================
// IMPERATIVE SHELL
// ============================================================================

fn read_file(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|e| CliError::ProposalLoadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Read a single proposal from a JSON file
pub fn load_proposal(path: &Path) -> CliResult<ProposedTransaction> {
    let raw = read_file(path)?;
    serde_json::from_str(&raw).map_err(|e| CliError::ProposalLoadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Read a JSON array of proposals
pub fn load_proposals(path: &Path) -> CliResult<Vec<ProposedTransaction>> {
    let raw = read_file(path)?;
    serde_json::from_str(&raw).map_err(|e| CliError::ProposalLoadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Handle `verify <file>`
pub fn handle_verify_command(
    path: &Path,
    defaults: &RuntimeDefaults,
    output: &dyn Output,
) -> CliResult<()> {
    let proposal = load_proposal(path)?;
    let verdicts = vec![proposal.verdict()];
    report(std::slice::from_ref(&proposal), &verdicts, defaults, output)
}

/// Handle `batch <file>`
pub fn handle_batch_command(
    path: &Path,
    defaults: &RuntimeDefaults,
    output: &dyn Output,
) -> CliResult<()> {
    let proposals = load_proposals(path)?;
    let verdicts = verify_batch(&proposals);
    report(&proposals, &verdicts, defaults, output)
}

fn report(
    proposals: &[ProposedTransaction],
    verdicts: &[Verdict],
    defaults: &RuntimeDefaults,
    output: &dyn Output,
) -> CliResult<()> {
    for (index, verdict) in verdicts.iter().enumerate() {
        match verdict.reason() {
            None => info!(index, "proposal accepted"),
            Some(reason) => warn!(index, ?reason, "proposal rejected"),
        }
    }

    let summary = BatchSummary::from_verdicts(verdicts);
    match defaults.format {
        OutputFormat::Json => output.print_json(&report_json(verdicts, &summary))?,
        OutputFormat::Table => {
            for (index, (proposal, verdict)) in proposals.iter().zip(verdicts).enumerate() {
                output.print(&format_verdict_line(index, proposal, verdict))?;
            }
            if summary.total > 1 {
                output.header("Summary")?;
                output.print(&format_summary(&summary))?;
            }
        }
    }

    if defaults.fail_on_reject && !summary.all_accepted() {
        return Err(CliError::Rejected {
            rejected: summary.rejected_count(),
            total: summary.total,
        });
    }
    Ok(())
}
