//! Command handlers (imperative shell)

pub mod party;
pub mod verify;

pub use party::handle_party_command;
pub use verify::{handle_batch_command, handle_verify_command};
