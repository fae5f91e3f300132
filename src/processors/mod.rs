//! Processors Module
//!
//! This module contains all processor functions organized by functionality.

pub mod allowance;
pub mod ownership;
pub mod process_initialize;
pub mod queries;
pub mod treasury;

// Re-export ledger initialization
pub use process_initialize::*;

// Re-export pool top-up and withdrawal
pub use treasury::*;

// Re-export allowance management (approve, revoke, reset)
pub use allowance::*;

// Re-export ownership transfer
pub use ownership::*;

// Re-export read-only queries
pub use queries::*;
