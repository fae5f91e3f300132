//! State Module
//!
//! This module contains the account layouts persisted by the program.

pub mod ledger_state;
pub mod recipient_record;

// Re-export all state types for easy access
pub use ledger_state::*;
pub use recipient_record::*;
