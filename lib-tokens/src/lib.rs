//! Owned Token Ledger States
//!
//! This crate defines the owned-token state record and the verifier that
//! decides whether a proposed transition between states is legal.
//!
//! Ordering, notarization and double-spend prevention are enforced by the
//! host ledger, not here.
//!
//! # Key Types
//!
//! - [`StateRecord`]: Immutable unit of ownership (issuer, holder, quantity)
//! - [`TransactionIntent`]: Issue, Move or Redeem
//! - [`RejectionReason`]: Why a transition was refused
//! - [`ProposedTransaction`]: Host interchange form of a transition
//!
//! # Verification
//!
//! Use [`verify`] to check a transition. It is pure and deterministic.
//!
//! ```ignore
//! use lib_tokens::{verify, TransactionIntent};
//!
//! verify(&inputs, &outputs, TransactionIntent::Move, &signers)?;
//! ```

pub mod batch;
pub mod errors;
pub mod intent;
pub mod proposal;
pub mod state;
pub mod verifier;

pub use batch::{verify_batch, BatchSummary};
pub use errors::*;
pub use intent::TransactionIntent;
pub use proposal::{ProposedTransaction, Verdict};
pub use state::StateRecord;
pub use verifier::{verify, verify_tagged};
