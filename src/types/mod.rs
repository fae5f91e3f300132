//! Types Module
//!
//! This module contains the wire types of the Treasure Ledger Program: instructions and events.

pub mod events;
pub mod instructions;

// Re-export all types for easy access
pub use events::*;
pub use instructions::*;
