//! Token ledger primitives.
//! Stable, protocol-neutral, behavior-free.
//!
//! Rule: No String identifiers in ledger state. Ever.

pub mod errors;
pub mod primitives;

pub use errors::IdentityParseError;
pub use primitives::{PartyId, Quantity, PARTY_ID_LEN};
