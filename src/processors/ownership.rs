//! Ownership Processor
//!
//! Immediate hand-over of the administrator role. There is no pending or
//! acceptance step: the new administrator is in charge as soon as the
//! transaction lands.

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

use crate::{
    ledger::operations,
    state::LedgerState,
    utils::{
        log_rejection, serialize_to_account, validate_admin_authority, validate_ledger_state_pda,
        validate_writable,
    },
};

/// Makes `new_administrator` the ledger administrator.
///
/// # Account Info
/// 0. **Current Administrator** (signer)
/// 1. **Ledger State PDA** (writable)
pub fn process_transfer_ownership(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    new_administrator: Pubkey,
) -> ProgramResult {
    msg!("🔑 Processing TransferOwnership to {}", new_administrator);
    let account_info_iter = &mut accounts.iter();
    let administrator = next_account_info(account_info_iter)?;
    let ledger_state_pda = next_account_info(account_info_iter)?;

    validate_ledger_state_pda(ledger_state_pda, program_id)?;
    let mut ledger_state = LedgerState::from_account(ledger_state_pda, program_id)?;
    validate_admin_authority(administrator, &ledger_state)?;
    validate_writable(ledger_state_pda, "Ledger state PDA")?;

    let event = operations::transfer_ownership(
        &mut ledger_state,
        administrator.key,
        &new_administrator,
    )
    .map_err(|e| log_rejection("TransferOwnership", e))?;

    serialize_to_account(&ledger_state, ledger_state_pda)?;
    event.emit()?;
    msg!("✅ Administrator changed: {} -> {}", administrator.key, new_administrator);
    Ok(())
}
