//! Allowance Management Processors
//!
//! Administrator-only instructions that shape per-recipient allowances:
//! approve, revoke and reset of the claimed flag.

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

use crate::{
    constants::RECIPIENT_RECORD_SEED_PREFIX,
    ledger::operations,
    state::{LedgerState, RecipientRecord},
    utils::{
        create_pda_account, log_rejection, serialize_to_account, validate_admin_authority,
        validate_ledger_state_pda, validate_recipient_record_pda, validate_system_program,
        validate_writable,
    },
};

/// Grants `recipient` an additional `amount` of allowance.
///
/// The recipient record PDA is created here on the first approval, paid for
/// by the administrator.
///
/// # Account Info
/// 0. **Administrator** (signer, writable) - Pays rent for a new record
/// 1. **Ledger State PDA** (readable)
/// 2. **Recipient Record PDA** (writable)
/// 3. **System Program Account** (readable)
pub fn process_approve_treasure_withdrawal(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    recipient: Pubkey,
    amount: u64,
) -> ProgramResult {
    msg!("📝 Processing ApproveTreasureWithdrawal: {} for {}", amount, recipient);
    let account_info_iter = &mut accounts.iter();
    let administrator = next_account_info(account_info_iter)?;
    let ledger_state_pda = next_account_info(account_info_iter)?;
    let recipient_record_pda = next_account_info(account_info_iter)?;
    let system_program_account = next_account_info(account_info_iter)?;

    validate_ledger_state_pda(ledger_state_pda, program_id)?;
    let ledger_state = LedgerState::from_account(ledger_state_pda, program_id)?;
    validate_admin_authority(administrator, &ledger_state)?;
    validate_writable(recipient_record_pda, "Recipient record PDA")?;
    validate_system_program(system_program_account)?;
    let bump = validate_recipient_record_pda(
        recipient_record_pda,
        program_id,
        ledger_state_pda.key,
        &recipient,
    )?;
    let mut record = RecipientRecord::load_or_default(
        recipient_record_pda,
        program_id,
        &recipient,
        bump,
    )?;

    let event = operations::approve_treasure_withdrawal(
        &ledger_state,
        &mut record,
        administrator.key,
        amount,
    )
    .map_err(|e| log_rejection("ApproveTreasureWithdrawal", e))?;

    if recipient_record_pda.data_is_empty() {
        let bump_seed = [bump];
        create_pda_account(
            administrator,
            recipient_record_pda,
            system_program_account,
            program_id,
            RecipientRecord::LEN,
            &[
                RECIPIENT_RECORD_SEED_PREFIX,
                ledger_state_pda.key.as_ref(),
                recipient.as_ref(),
                &bump_seed,
            ],
        )?;
    }
    serialize_to_account(&record, recipient_record_pda)?;

    event.emit()?;
    msg!("✅ Allowance of {} is now {}", recipient, record.allowed_withdrawal);
    Ok(())
}

/// Zeroes the allowance of `recipient`.
///
/// # Account Info
/// 0. **Administrator** (signer)
/// 1. **Ledger State PDA** (readable)
/// 2. **Recipient Record PDA** (writable)
pub fn process_revoke_treasure_withdrawal(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    recipient: Pubkey,
) -> ProgramResult {
    msg!("🚫 Processing RevokeTreasureWithdrawal for {}", recipient);
    let account_info_iter = &mut accounts.iter();
    let administrator = next_account_info(account_info_iter)?;
    let ledger_state_pda = next_account_info(account_info_iter)?;
    let recipient_record_pda = next_account_info(account_info_iter)?;

    validate_ledger_state_pda(ledger_state_pda, program_id)?;
    let ledger_state = LedgerState::from_account(ledger_state_pda, program_id)?;
    validate_admin_authority(administrator, &ledger_state)?;
    validate_writable(recipient_record_pda, "Recipient record PDA")?;
    let bump = validate_recipient_record_pda(
        recipient_record_pda,
        program_id,
        ledger_state_pda.key,
        &recipient,
    )?;
    let mut record = RecipientRecord::load_or_default(
        recipient_record_pda,
        program_id,
        &recipient,
        bump,
    )?;

    // A missing record has no allowance, so success implies the account exists
    let event = operations::revoke_treasure_withdrawal(
        &ledger_state,
        &mut record,
        administrator.key,
    )
    .map_err(|e| log_rejection("RevokeTreasureWithdrawal", e))?;

    serialize_to_account(&record, recipient_record_pda)?;
    event.emit()?;
    msg!("✅ Allowance of {} revoked", recipient);
    Ok(())
}

/// Clears the claimed flag of `recipient`, opening a new claim epoch.
///
/// A recipient without a record is already unclaimed; the event is still
/// emitted but no account is created.
///
/// # Account Info
/// 0. **Administrator** (signer)
/// 1. **Ledger State PDA** (readable)
/// 2. **Recipient Record PDA** (writable)
pub fn process_reset_withdrawal_status(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    recipient: Pubkey,
) -> ProgramResult {
    msg!("🔄 Processing ResetWithdrawalStatus for {}", recipient);
    let account_info_iter = &mut accounts.iter();
    let administrator = next_account_info(account_info_iter)?;
    let ledger_state_pda = next_account_info(account_info_iter)?;
    let recipient_record_pda = next_account_info(account_info_iter)?;

    validate_ledger_state_pda(ledger_state_pda, program_id)?;
    let ledger_state = LedgerState::from_account(ledger_state_pda, program_id)?;
    validate_admin_authority(administrator, &ledger_state)?;
    validate_writable(recipient_record_pda, "Recipient record PDA")?;
    let bump = validate_recipient_record_pda(
        recipient_record_pda,
        program_id,
        ledger_state_pda.key,
        &recipient,
    )?;
    let mut record = RecipientRecord::load_or_default(
        recipient_record_pda,
        program_id,
        &recipient,
        bump,
    )?;

    let event = operations::reset_withdrawal_status(&ledger_state, &mut record, administrator.key)
        .map_err(|e| log_rejection("ResetWithdrawalStatus", e))?;

    if !recipient_record_pda.data_is_empty() {
        serialize_to_account(&record, recipient_record_pda)?;
    }
    event.emit()?;
    msg!("✅ Withdrawal status of {} reset", recipient);
    Ok(())
}
