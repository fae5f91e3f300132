//! Per-recipient allowance record.
//!
//! Stored in a PDA derived from `[RECIPIENT_RECORD_SEED_PREFIX, ledger_state, recipient]`.
//! A recipient whose record account does not exist yet reads as the default
//! record: no allowance, not withdrawn. Records are never closed.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::AccountInfo,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecipientRecord {
    pub recipient: Pubkey,

    /// Amount the administrator has approved for this recipient
    pub allowed_withdrawal: u64,

    /// Claim already taken in the current epoch
    pub has_withdrawn: bool,

    pub bump: u8,
}

impl RecipientRecord {
    pub const LEN: usize =
        32 +  // recipient
        8 +   // allowed_withdrawal
        1 +   // has_withdrawn
        1;    // bump

    /// The default record every recipient starts from.
    pub fn new(recipient: Pubkey, bump: u8) -> Self {
        Self {
            recipient,
            allowed_withdrawal: 0,
            has_withdrawn: false,
            bump,
        }
    }

    /// Reads the record stored in `account`, or the default record when the
    /// account has not been created yet.
    ///
    /// The caller is responsible for checking that `account` is the derived
    /// record PDA for `recipient` and that `bump` is its bump.
    pub fn load_or_default(
        account: &AccountInfo,
        program_id: &Pubkey,
        recipient: &Pubkey,
        bump: u8,
    ) -> Result<Self, ProgramError> {
        if account.data_is_empty() {
            return Ok(Self::new(*recipient, bump));
        }

        if account.owner != program_id {
            msg!("Recipient record {} is not owned by this program", account.key);
            return Err(ProgramError::IncorrectProgramId);
        }

        let record = Self::deserialize(&mut &account.data.borrow()[..])?;
        if record.recipient != *recipient {
            msg!(
                "Recipient record {} belongs to {}, expected {}",
                account.key,
                record.recipient,
                recipient
            );
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(record)
    }
}
