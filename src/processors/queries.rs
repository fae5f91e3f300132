//! Read-Only Query Processors
//!
//! Queries never write accounts. Results are logged for humans and returned
//! through program return data for callers and simulations:
//! - amounts as little-endian `u64`
//! - flags as a single byte (0 or 1)
//! - the version as UTF-8 text

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::set_return_data,
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::{
    state::{LedgerState, RecipientRecord},
    utils::{validate_ledger_state_pda, validate_recipient_record_pda},
};

/// Loads the record of `recipient`, falling back to the default for
/// recipients the administrator has never touched.
fn load_recipient_record(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    recipient: &Pubkey,
) -> Result<RecipientRecord, ProgramError> {
    let account_info_iter = &mut accounts.iter();
    let ledger_state_pda = next_account_info(account_info_iter)?;
    let recipient_record_pda = next_account_info(account_info_iter)?;

    validate_ledger_state_pda(ledger_state_pda, program_id)?;
    LedgerState::from_account(ledger_state_pda, program_id)?;
    let bump = validate_recipient_record_pda(
        recipient_record_pda,
        program_id,
        ledger_state_pda.key,
        recipient,
    )?;
    RecipientRecord::load_or_default(recipient_record_pda, program_id, recipient, bump)
}

/// # Account Info
/// 0. **Ledger State PDA** (readable)
pub fn process_get_treasure_amount(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let ledger_state_pda = next_account_info(account_info_iter)?;

    validate_ledger_state_pda(ledger_state_pda, program_id)?;
    let ledger_state = LedgerState::from_account(ledger_state_pda, program_id)?;

    msg!("Treasure amount: {}", ledger_state.treasure_amount);
    set_return_data(&ledger_state.treasure_amount.to_le_bytes());
    Ok(())
}

/// # Account Info
/// 0. **Ledger State PDA** (readable)
/// 1. **Recipient Record PDA** (readable)
pub fn process_get_withdrawal_allowance(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    recipient: Pubkey,
) -> ProgramResult {
    let record = load_recipient_record(program_id, accounts, &recipient)?;

    msg!("Withdrawal allowance of {}: {}", recipient, record.allowed_withdrawal);
    set_return_data(&record.allowed_withdrawal.to_le_bytes());
    Ok(())
}

/// # Account Info
/// 0. **Ledger State PDA** (readable)
/// 1. **Recipient Record PDA** (readable)
pub fn process_has_withdrawn_treasure(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    recipient: Pubkey,
) -> ProgramResult {
    let record = load_recipient_record(program_id, accounts, &recipient)?;

    msg!("Has withdrawn {}: {}", recipient, record.has_withdrawn);
    set_return_data(&[record.has_withdrawn as u8]);
    Ok(())
}

/// Logs the program name and version and returns the version string.
pub fn process_get_version(_accounts: &[AccountInfo]) -> ProgramResult {
    msg!("=== TREASURE LEDGER VERSION ===");
    msg!("Contract Name: {}", env!("CARGO_PKG_NAME"));
    msg!("Contract Version: {}", env!("CARGO_PKG_VERSION"));
    msg!("Contract Description: {}", env!("CARGO_PKG_DESCRIPTION"));
    msg!("License: {}", env!("CARGO_PKG_LICENSE"));
    msg!("Program ID: {}", crate::id());
    msg!("===============================");

    set_return_data(env!("CARGO_PKG_VERSION").as_bytes());
    Ok(())
}
