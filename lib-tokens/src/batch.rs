//! Batch Verification
//!
//! Verdicts for many proposals at once. Each proposal is judged on its own:
//! no state is carried between them, so two proposals consuming the same
//! input can both be accepted here. Double-spend detection belongs to the host.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use tracing::info;

use crate::errors::RejectionReason;
use crate::proposal::{ProposedTransaction, Verdict};

/// Verify every proposal, preserving order
pub fn verify_batch(proposals: &[ProposedTransaction]) -> Vec<Verdict> {
    let verdicts: Vec<Verdict> = proposals.iter().map(ProposedTransaction::verdict).collect();
    let summary = BatchSummary::from_verdicts(&verdicts);
    info!(
        total = summary.total,
        accepted = summary.accepted,
        rejected = summary.rejected_count(),
        "batch verified"
    );
    verdicts
}

/// Counts of a batch's verdicts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub accepted: usize,
    pub rejected: BTreeMap<RejectionReason, usize>,
}

impl BatchSummary {
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        let mut summary = Self::default();
        for verdict in verdicts {
            summary.record(verdict);
        }
        summary
    }

    pub fn record(&mut self, verdict: &Verdict) {
        self.total += 1;
        match verdict.reason() {
            None => self.accepted += 1,
            Some(reason) => *self.rejected.entry(reason).or_default() += 1,
        }
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.values().sum()
    }

    pub fn all_accepted(&self) -> bool {
        self.accepted == self.total
    }
}
