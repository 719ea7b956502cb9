//! Proposed Transactions
//!
//! The interchange form a host hands to the verifier, plus helpers that build
//! well-formed issue, move and redeem proposals.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use lib_types::{PartyId, Quantity};

use crate::errors::{ProposalError, ProposalResult, RejectionReason, VerifyResult};
use crate::intent::TransactionIntent;
use crate::state::StateRecord;
use crate::verifier::verify_tagged;

/// A transaction as proposed by a host, before verification
///
/// `intent` stays a raw tag so that an unknown value surfaces as a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedTransaction {
    #[serde(default)]
    pub inputs: Vec<StateRecord>,
    #[serde(default)]
    pub outputs: Vec<StateRecord>,
    pub intent: String,
    #[serde(default)]
    pub signers: HashSet<PartyId>,
}

impl ProposedTransaction {
    /// Assemble a proposal from parts
    pub fn new(
        inputs: Vec<StateRecord>,
        outputs: Vec<StateRecord>,
        intent: TransactionIntent,
        signers: impl IntoIterator<Item = PartyId>,
    ) -> Self {
        Self {
            inputs,
            outputs,
            intent: intent.tag().to_string(),
            signers: signers.into_iter().collect(),
        }
    }

    /// Issue `quantity` to `holder`, signed by `issuer`
    pub fn issue(issuer: PartyId, holder: PartyId, quantity: Quantity) -> ProposalResult<Self> {
        if quantity <= 0 {
            return Err(ProposalError::NonPositiveQuantity(quantity));
        }
        let output = StateRecord::new(issuer, holder, quantity)?;
        Ok(Self::new(vec![], vec![output], TransactionIntent::Issue, [issuer]))
    }

    /// One issue proposal per `(holder, quantity)` pair
    ///
    /// The whole batch is validated before anything is built.
    pub fn issue_many(issuer: PartyId, held: &[(PartyId, Quantity)]) -> ProposalResult<Vec<Self>> {
        if held.is_empty() {
            return Err(ProposalError::EmptyBatch);
        }
        if let Some((_, quantity)) = held.iter().find(|(_, quantity)| *quantity <= 0) {
            return Err(ProposalError::NonPositiveQuantity(*quantity));
        }
        held.iter()
            .map(|(holder, quantity)| Self::issue(issuer, *holder, *quantity))
            .collect()
    }

    /// Move `input` to `new_holder`, signed by the current holder
    pub fn transfer(input: &StateRecord, new_holder: PartyId) -> ProposalResult<Self> {
        if input.quantity() <= 0 {
            return Err(ProposalError::NonPositiveQuantity(input.quantity()));
        }
        if input.holder() == new_holder {
            return Err(ProposalError::SameHolder);
        }
        let output = input.supersede(new_holder)?;
        Ok(Self::new(
            vec![input.clone()],
            vec![output],
            TransactionIntent::Move,
            [input.holder()],
        ))
    }

    /// Redeem `input`, signed by both issuer and holder
    pub fn redeem(input: &StateRecord) -> Self {
        Self::new(
            vec![input.clone()],
            vec![],
            TransactionIntent::Redeem,
            [input.issuer(), input.holder()],
        )
    }

    /// Parsed intent, or the rejection an unknown tag earns
    pub fn parsed_intent(&self) -> Result<TransactionIntent, RejectionReason> {
        self.intent.parse()
    }

    pub fn verify(&self) -> VerifyResult {
        verify_tagged(&self.inputs, &self.outputs, &self.intent, &self.signers)
    }

    pub fn verdict(&self) -> Verdict {
        self.verify().into()
    }
}

/// Reportable outcome of a verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    Rejected { reason: RejectionReason },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn reason(&self) -> Option<RejectionReason> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected { reason } => Some(*reason),
        }
    }
}

impl From<VerifyResult> for Verdict {
    fn from(result: VerifyResult) -> Self {
        match result {
            Ok(()) => Verdict::Accepted,
            Err(reason) => Verdict::Rejected { reason },
        }
    }
}
