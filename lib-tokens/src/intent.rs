//! Transaction Intent
//!
//! The declared purpose of a proposed transition. Selects which rule set the
//! verifier applies; it carries no payload.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::RejectionReason;

/// What a transaction claims to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionIntent {
    /// 0 inputs -> 1 output: create a new unit
    Issue,
    /// 1 input -> 1 output: change holder
    Move,
    /// 1 input -> 0 outputs: extinguish a unit
    Redeem,
}

impl TransactionIntent {
    pub const ALL: [TransactionIntent; 3] = [Self::Issue, Self::Move, Self::Redeem];

    /// Wire tag
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Issue => "Issue",
            Self::Move => "Move",
            Self::Redeem => "Redeem",
        }
    }

    /// Expected (inputs, outputs) cardinality
    pub const fn cardinality(&self) -> (usize, usize) {
        match self {
            Self::Issue => (0, 1),
            Self::Move => (1, 1),
            Self::Redeem => (1, 0),
        }
    }

    /// Rejection reported when this intent's rules are violated
    pub const fn malformed(&self) -> RejectionReason {
        match self {
            Self::Issue => RejectionReason::IssueMalformed,
            Self::Move => RejectionReason::MoveMalformed,
            Self::Redeem => RejectionReason::RedeemMalformed,
        }
    }
}

impl fmt::Display for TransactionIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Any tag outside {Issue, Move, Redeem} is an unknown intent
impl FromStr for TransactionIntent {
    type Err = RejectionReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|intent| intent.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or(RejectionReason::UnknownIntentOrInvalidQuantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("Issue".parse(), Ok(TransactionIntent::Issue));
        assert_eq!("move".parse(), Ok(TransactionIntent::Move));
        assert_eq!(" REDEEM ".parse(), Ok(TransactionIntent::Redeem));
    }

    #[test]
    fn test_parse_unknown_tag() {
        assert_eq!(
            "Split".parse::<TransactionIntent>(),
            Err(RejectionReason::UnknownIntentOrInvalidQuantity)
        );
        assert_eq!(
            "".parse::<TransactionIntent>(),
            Err(RejectionReason::UnknownIntentOrInvalidQuantity)
        );
    }

    #[test]
    fn test_cardinality_conserves_units() {
        assert_eq!(TransactionIntent::Issue.cardinality(), (0, 1));
        assert_eq!(TransactionIntent::Move.cardinality(), (1, 1));
        assert_eq!(TransactionIntent::Redeem.cardinality(), (1, 0));
    }

    #[test]
    fn test_display_matches_tag() {
        for intent in TransactionIntent::ALL {
            assert_eq!(intent.to_string(), intent.tag());
            assert_eq!(intent.tag().parse(), Ok(intent));
        }
    }
}
