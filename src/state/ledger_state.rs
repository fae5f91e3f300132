//! Ledger state: the administrator and the treasure pool.
//!
//! Stored in the singleton PDA derived from `[LEDGER_STATE_SEED_PREFIX]`.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::AccountInfo,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::error::LedgerError;

/// The single shared state record of the ledger.
///
/// `administrator` is mutated only by ownership transfer and is never the
/// null identity once initialized. `treasure_amount` grows only through
/// `AddTreasureAmount` and shrinks only through `WithdrawTreasure`.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct LedgerState {
    /// The only identity allowed to perform privileged operations
    pub administrator: Pubkey,

    /// Unallocated-but-owned pool balance
    pub treasure_amount: u64,

    pub is_initialized: bool,

    /// PDA bump for the ledger state derivation
    pub bump: u8,
}

impl LedgerState {
    pub const LEN: usize =
        32 +  // administrator
        8 +   // treasure_amount
        1 +   // is_initialized
        1;    // bump

    pub fn new(administrator: Pubkey, bump: u8) -> Self {
        Self {
            administrator,
            treasure_amount: 0,
            is_initialized: true,
            bump,
        }
    }

    pub fn is_administrator(&self, caller: &Pubkey) -> bool {
        self.administrator == *caller
    }

    /// Authorization guard for privileged operations.
    pub fn require_administrator(&self, caller: &Pubkey) -> Result<(), LedgerError> {
        if !self.is_administrator(caller) {
            return Err(LedgerError::Unauthorized);
        }
        Ok(())
    }

    /// Loads an initialized ledger from a program-owned account.
    ///
    /// The caller is responsible for checking that `account` is the derived
    /// ledger state PDA.
    pub fn from_account(account: &AccountInfo, program_id: &Pubkey) -> Result<Self, ProgramError> {
        if account.owner != program_id || account.data_is_empty() {
            msg!("Ledger state {} is not initialized", account.key);
            return Err(LedgerError::NotInitialized.into());
        }

        let state = Self::deserialize(&mut &account.data.borrow()[..])?;
        if !state.is_initialized {
            msg!("Ledger state {} is not initialized", account.key);
            return Err(LedgerError::NotInitialized.into());
        }
        Ok(state)
    }
}
