//! Ledger Initialization Processor
//!
//! Creates the singleton ledger state PDA and makes the program's upgrade
//! authority its administrator.

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

use crate::{
    constants::LEDGER_STATE_SEED_PREFIX,
    error::LedgerError,
    ledger::operations,
    state::LedgerState,
    utils::{
        create_pda_account, log_rejection, serialize_to_account, validate_ledger_state_pda,
        validate_program_upgrade_authority, validate_signer, validate_system_program,
        validate_writable,
    },
};

/// Processes the InitializeLedger instruction.
///
/// # Account Info
/// The accounts must be provided in the following order:
/// 0. **Administrator** (signer, writable) - Upgrade authority; becomes administrator, pays rent
/// 1. **Ledger State PDA** (writable) - MUST match the derived PDA
/// 2. **System Program Account** (readable) - Solana system program
/// 3. **Program Data Account** (readable) - Upgradeable loader data of this program
///
/// # Returns
/// * `ProgramResult` - Success or error
pub fn process_initialize_ledger(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    msg!("🚀 INITIALIZING LEDGER");
    let account_info_iter = &mut accounts.iter();
    let administrator = next_account_info(account_info_iter)?;
    let ledger_state_pda = next_account_info(account_info_iter)?;
    let system_program_account = next_account_info(account_info_iter)?;
    let program_data_account = next_account_info(account_info_iter)?;

    validate_signer(administrator, "Administrator")?;
    validate_writable(ledger_state_pda, "Ledger state PDA")?;
    validate_system_program(system_program_account)?;
    let bump = validate_ledger_state_pda(ledger_state_pda, program_id)?;

    if !ledger_state_pda.data_is_empty() {
        msg!("❌ Ledger already initialized at {}", ledger_state_pda.key);
        return Err(LedgerError::AlreadyInitialized.into());
    }

    validate_program_upgrade_authority(program_id, program_data_account, administrator)?;

    let (ledger_state, event) = operations::initialize_ledger(administrator.key, bump)
        .map_err(|e| log_rejection("InitializeLedger", e))?;

    let bump_seed = [bump];
    create_pda_account(
        administrator,
        ledger_state_pda,
        system_program_account,
        program_id,
        LedgerState::LEN,
        &[LEDGER_STATE_SEED_PREFIX, &bump_seed],
    )?;
    serialize_to_account(&ledger_state, ledger_state_pda)?;

    event.emit()?;
    msg!("✅ LEDGER INITIALIZED: {} administered by {}", ledger_state_pda.key, administrator.key);
    Ok(())
}
