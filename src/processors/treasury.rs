//! Treasury Pool Processors
//!
//! This module handles the two instructions that move the pool total:
//! - Administrator top-ups (`AddTreasureAmount`)
//! - Recipient claims (`WithdrawTreasure`)

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

use crate::{
    ledger::operations,
    state::{LedgerState, RecipientRecord},
    utils::{
        log_rejection, serialize_to_account, validate_admin_authority, validate_ledger_state_pda,
        validate_recipient_record_pda, validate_signer, validate_writable,
    },
};

/// Adds `amount` to the pool.
///
/// # Account Info
/// 0. **Administrator** (signer)
/// 1. **Ledger State PDA** (writable)
pub fn process_add_treasure_amount(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
) -> ProgramResult {
    msg!("🏦 Processing AddTreasureAmount: {}", amount);
    let account_info_iter = &mut accounts.iter();
    let administrator = next_account_info(account_info_iter)?;
    let ledger_state_pda = next_account_info(account_info_iter)?;

    validate_ledger_state_pda(ledger_state_pda, program_id)?;
    let mut ledger_state = LedgerState::from_account(ledger_state_pda, program_id)?;
    validate_admin_authority(administrator, &ledger_state)?;
    validate_writable(ledger_state_pda, "Ledger state PDA")?;

    let event = operations::add_treasure_amount(&mut ledger_state, administrator.key, amount)
        .map_err(|e| log_rejection("AddTreasureAmount", e))?;

    serialize_to_account(&ledger_state, ledger_state_pda)?;
    event.emit()?;
    msg!("✅ Pool total: {}", ledger_state.treasure_amount);
    Ok(())
}

/// Claims `amount` from the signer's own allowance.
///
/// Both the pool and the record are written back before the event is
/// emitted, so anything observing the claim already sees it as taken.
///
/// # Account Info
/// 0. **Recipient** (signer)
/// 1. **Ledger State PDA** (writable)
/// 2. **Recipient Record PDA** (writable) - derived from the signer
pub fn process_withdraw_treasure(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
) -> ProgramResult {
    msg!("💰 Processing WithdrawTreasure: {}", amount);
    let account_info_iter = &mut accounts.iter();
    let recipient = next_account_info(account_info_iter)?;
    let ledger_state_pda = next_account_info(account_info_iter)?;
    let recipient_record_pda = next_account_info(account_info_iter)?;

    validate_signer(recipient, "Recipient")?;
    validate_ledger_state_pda(ledger_state_pda, program_id)?;
    let mut ledger_state = LedgerState::from_account(ledger_state_pda, program_id)?;
    validate_writable(ledger_state_pda, "Ledger state PDA")?;
    validate_writable(recipient_record_pda, "Recipient record PDA")?;
    let bump = validate_recipient_record_pda(
        recipient_record_pda,
        program_id,
        ledger_state_pda.key,
        recipient.key,
    )?;
    let mut record = RecipientRecord::load_or_default(
        recipient_record_pda,
        program_id,
        recipient.key,
        bump,
    )?;

    let event = operations::withdraw_treasure(&mut ledger_state, &mut record, amount)
        .map_err(|e| log_rejection("WithdrawTreasure", e))?;

    serialize_to_account(&ledger_state, ledger_state_pda)?;
    serialize_to_account(&record, recipient_record_pda)?;
    event.emit()?;
    msg!("✅ {} claimed {}. Pool total: {}", recipient.key, amount, ledger_state.treasure_amount);
    Ok(())
}
