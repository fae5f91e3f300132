//! PDA derivation and validation.
//!
//! The processors and the client SDK derive addresses through these helpers only.

use solana_program::{
    account_info::AccountInfo,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::{
    constants::{LEDGER_STATE_SEED_PREFIX, RECIPIENT_RECORD_SEED_PREFIX},
    error::LedgerError,
};

pub fn find_ledger_state_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LEDGER_STATE_SEED_PREFIX], program_id)
}

pub fn find_recipient_record_pda(
    program_id: &Pubkey,
    ledger_state: &Pubkey,
    recipient: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[RECIPIENT_RECORD_SEED_PREFIX, ledger_state.as_ref(), recipient.as_ref()],
        program_id,
    )
}

/// Checks `account` against the derived ledger state PDA and returns its bump.
pub fn validate_ledger_state_pda(
    account: &AccountInfo,
    program_id: &Pubkey,
) -> Result<u8, ProgramError> {
    let (expected, bump) = find_ledger_state_pda(program_id);
    if *account.key != expected {
        msg!("❌ Invalid ledger state PDA. Expected: {}, Got: {}", expected, account.key);
        return Err(LedgerError::InvalidLedgerStatePda.into());
    }
    Ok(bump)
}

/// Checks `account` against the derived record PDA of `recipient` and returns its bump.
pub fn validate_recipient_record_pda(
    account: &AccountInfo,
    program_id: &Pubkey,
    ledger_state: &Pubkey,
    recipient: &Pubkey,
) -> Result<u8, ProgramError> {
    let (expected, bump) = find_recipient_record_pda(program_id, ledger_state, recipient);
    if *account.key != expected {
        msg!(
            "❌ Invalid recipient record PDA for {}. Expected: {}, Got: {}",
            recipient,
            expected,
            account.key
        );
        return Err(LedgerError::InvalidRecipientRecordPda.into());
    }
    Ok(bump)
}
