//! Pure verdict formatting

use serde_json::{json, Value};

use lib_tokens::{BatchSummary, ProposedTransaction, Verdict};
use lib_types::PartyId;

use crate::error::{CliError, CliResult};

/// One table line for a proposal's verdict
pub fn format_verdict_line(index: usize, proposal: &ProposedTransaction, verdict: &Verdict) -> String {
    let status = match verdict {
        Verdict::Accepted => "ACCEPTED".to_string(),
        Verdict::Rejected { reason } => format!("REJECTED ({:?}: {})", reason, reason),
    };
    format!(
        "#{:<3} {:<7} in={} out={} signers={}  {}",
        index,
        proposal.intent,
        proposal.inputs.len(),
        proposal.outputs.len(),
        proposal.signers.len(),
        status
    )
}

/// Summary block for a batch
pub fn format_summary(summary: &BatchSummary) -> String {
    let mut text = format!(
        "total: {}  accepted: {}  rejected: {}",
        summary.total,
        summary.accepted,
        summary.rejected_count()
    );
    for (reason, count) in &summary.rejected {
        text.push_str(&format!("\n  {:?}: {}", reason, count));
    }
    text
}

/// Machine-readable report of a batch
pub fn report_json(verdicts: &[Verdict], summary: &BatchSummary) -> Value {
    json!({
        "verdicts": verdicts,
        "summary": summary,
    })
}

/// Derive a party handle from hex-encoded public key material
pub fn parse_public_key_hex(public_key: &str) -> CliResult<PartyId> {
    let bytes = hex::decode(public_key.trim())
        .map_err(|e| CliError::InvalidPublicKey(e.to_string()))?;
    if bytes.is_empty() {
        return Err(CliError::InvalidPublicKey("public key is empty".to_string()));
    }
    Ok(PartyId::from_public_key(&bytes))
}
