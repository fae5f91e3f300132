//! Ledger Instructions
//!
//! This module contains all the instruction definitions for the Treasure Ledger Program.
//! The expected account list of every instruction is documented on its variant and
//! built for clients by [`crate::client_sdk::LedgerClient`].

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum LedgerInstruction {
    /// Creates the ledger. The signer must be the program's upgrade authority
    /// and becomes the administrator.
    ///
    /// Accounts:
    /// 0. `[signer, writable]` Administrator, pays for the ledger state account
    /// 1. `[writable]` Ledger state PDA
    /// 2. `[]` System program
    /// 3. `[]` Program data account of this program (upgradeable loader)
    InitializeLedger,

    /// Adds `amount` to the pool (administrator only).
    ///
    /// Accounts:
    /// 0. `[signer]` Administrator
    /// 1. `[writable]` Ledger state PDA
    AddTreasureAmount {
        amount: u64,
    },

    /// Grants `recipient` an additional `amount` of allowance (administrator only).
    /// Approvals accumulate.
    ///
    /// Accounts:
    /// 0. `[signer, writable]` Administrator, pays for the record account on first approval
    /// 1. `[]` Ledger state PDA
    /// 2. `[writable]` Recipient record PDA
    /// 3. `[]` System program
    ApproveTreasureWithdrawal {
        recipient: Pubkey,
        amount: u64,
    },

    /// Zeroes the allowance of `recipient` (administrator only).
    ///
    /// Accounts:
    /// 0. `[signer]` Administrator
    /// 1. `[]` Ledger state PDA
    /// 2. `[writable]` Recipient record PDA
    RevokeTreasureWithdrawal {
        recipient: Pubkey,
    },

    /// Claims `amount` out of the signer's own allowance. Any unclaimed
    /// remainder of the allowance is forfeited.
    ///
    /// Accounts:
    /// 0. `[signer]` Recipient
    /// 1. `[writable]` Ledger state PDA
    /// 2. `[writable]` Recipient record PDA of the signer
    WithdrawTreasure {
        amount: u64,
    },

    /// Clears the claimed flag of `recipient` (administrator only). Does not
    /// restore any allowance.
    ///
    /// Accounts:
    /// 0. `[signer]` Administrator
    /// 1. `[]` Ledger state PDA
    /// 2. `[writable]` Recipient record PDA
    ResetWithdrawalStatus {
        recipient: Pubkey,
    },

    /// Hands the administrator role to `new_administrator` (administrator only).
    ///
    /// Accounts:
    /// 0. `[signer]` Administrator
    /// 1. `[writable]` Ledger state PDA
    TransferOwnership {
        new_administrator: Pubkey,
    },

    /// Returns the pool total as little-endian `u64` return data.
    ///
    /// Accounts:
    /// 0. `[]` Ledger state PDA
    GetTreasureAmount,

    /// Returns the allowance of `recipient` as little-endian `u64` return data.
    ///
    /// Accounts:
    /// 0. `[]` Ledger state PDA
    /// 1. `[]` Recipient record PDA
    GetWithdrawalAllowance {
        recipient: Pubkey,
    },

    /// Returns the claimed flag of `recipient` as a single return-data byte.
    ///
    /// Accounts:
    /// 0. `[]` Ledger state PDA
    /// 1. `[]` Recipient record PDA
    HasWithdrawnTreasure {
        recipient: Pubkey,
    },

    /// Logs the program name and version. No accounts.
    GetVersion,
}
