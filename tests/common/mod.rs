/*
MIT License

Copyright (c) 2024 Davinci

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! # Common Test Utilities
//!
//! This module provides shared utilities and helpers for integration tests
//! across all test modules. It includes:
//!
//! - Test environment configuration
//! - Ledger setup and instruction submission helpers
//! - Account and log readers for assertions

pub mod setup;
pub mod ledger_helpers;

// Re-export commonly used types and functions
#[allow(unused_imports)]
pub use setup::*;
#[allow(unused_imports)]
pub use ledger_helpers::*;

// Re-export external dependencies commonly used in tests
#[allow(unused_imports)]
pub use solana_program::{
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
};
#[allow(unused_imports)]
pub use solana_sdk::{
    signature::{Keypair, Signer},
    transaction::{Transaction, TransactionError},
};
#[allow(unused_imports)]
pub use solana_program_test::*;

// Re-export program-specific imports
#[allow(unused_imports)]
pub use treasure_ledger::{
    client_sdk::LedgerClient,
    process_instruction,
    LedgerError, LedgerInstruction, LedgerState, RecipientRecord,
    ID as PROGRAM_ID,
};

/// Test result type alias for convenience
pub type TestResult = Result<(), BanksClientError>;

/// Common test constants
pub mod constants {
    /// Initial pool funding used by most scenarios
    #[allow(dead_code)]
    pub const INITIAL_TREASURE: u64 = 100;

    /// Allowance granted in the lifecycle scenario
    #[allow(dead_code)]
    pub const DEFAULT_ALLOWANCE: u64 = 40;
}
