//! Token Ledger Errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use lib_types::Quantity;

/// Error while constructing a [`StateRecord`](crate::state::StateRecord)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Invalid record: {field} identity is absent")]
    InvalidRecord { field: &'static str },
}

/// Reason a proposed transaction was rejected by the verifier
///
/// Rejections are ordinary outcomes reported back to the proposer, never
/// process-level failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RejectionReason {
    #[error("Malformed issue transaction")]
    IssueMalformed,

    #[error("Malformed move transaction")]
    MoveMalformed,

    #[error("Malformed redeem transaction")]
    RedeemMalformed,

    #[error("Unknown intent or invalid output quantity")]
    UnknownIntentOrInvalidQuantity,
}

/// Error while building a proposal with the helper constructors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProposalError {
    #[error("Quantity must be above 0, got {0}")]
    NonPositiveQuantity(Quantity),

    #[error("Held quantities cannot be empty")]
    EmptyBatch,

    #[error("New holder must differ from current holder")]
    SameHolder,

    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Result type for record construction
pub type RecordResult<T> = Result<T, RecordError>;

/// Verdict of a single verification
pub type VerifyResult = Result<(), RejectionReason>;

/// Result type for proposal construction
pub type ProposalResult<T> = Result<T, ProposalError>;
