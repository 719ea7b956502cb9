//! Owned Token State
//!
//! A [`StateRecord`] is one unit of ownership on the ledger. It is never
//! edited: a transaction consumes it and, for a move, produces a successor.

use serde::{Deserialize, Serialize};
use std::fmt;

use lib_types::{PartyId, Quantity};

use crate::errors::{RecordError, RecordResult};

/// Immutable ledger state: `quantity` tokens issued by `issuer`, held by `holder`
///
/// Identities are checked at construction. Quantity is not: a record may be
/// inspected before its transaction is verified, and the verifier owns the
/// sign rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStateRecord")]
pub struct StateRecord {
    issuer: PartyId,
    holder: PartyId,
    quantity: Quantity,
}

/// Wire shape, routed through [`StateRecord::new`] on deserialization
#[derive(Deserialize)]
struct RawStateRecord {
    issuer: PartyId,
    holder: PartyId,
    quantity: Quantity,
}

impl TryFrom<RawStateRecord> for StateRecord {
    type Error = RecordError;

    fn try_from(raw: RawStateRecord) -> RecordResult<Self> {
        StateRecord::new(raw.issuer, raw.holder, raw.quantity)
    }
}

impl StateRecord {
    /// Create a new record
    ///
    /// Fails with [`RecordError::InvalidRecord`] if either identity is the
    /// zero (absent) handle.
    pub fn new(issuer: PartyId, holder: PartyId, quantity: Quantity) -> RecordResult<Self> {
        if issuer.is_zero() {
            return Err(RecordError::InvalidRecord { field: "issuer" });
        }
        if holder.is_zero() {
            return Err(RecordError::InvalidRecord { field: "holder" });
        }
        Ok(Self {
            issuer,
            holder,
            quantity,
        })
    }

    pub fn issuer(&self) -> PartyId {
        self.issuer
    }

    pub fn holder(&self) -> PartyId {
        self.holder
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Parties that must record this state. Only the holder; the issuer keeps
    /// its own trace of what it issued.
    pub fn participants(&self) -> Vec<PartyId> {
        vec![self.holder]
    }

    /// Successor record for a move to `new_holder`; issuer and quantity carry over
    pub fn supersede(&self, new_holder: PartyId) -> RecordResult<Self> {
        Self::new(self.issuer, new_holder, self.quantity)
    }
}

impl fmt::Display for StateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StateRecord{{issuer={}, holder={}, quantity={}}}",
            self.issuer, self.holder, self.quantity
        )
    }
}
