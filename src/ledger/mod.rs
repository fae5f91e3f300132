//! Ledger Core
//!
//! The treasury state machine, independent of the Solana runtime.
//! [`operations`] holds the transitions; [`TreasuryLedger`] composes them into
//! a self-contained ledger object.

pub mod operations;
pub mod treasury_ledger;

pub use treasury_ledger::{RecipientBook, TreasuryLedger};
