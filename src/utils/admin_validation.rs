//! Admin Authority Validation Utilities
//!
//! Centralized administrator validation for every privileged instruction.

use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
};

use crate::{error::LedgerError, state::LedgerState};

/// Validates that `admin_signer` signed the transaction and is the current
/// ledger administrator.
///
/// Processors run this right after loading the ledger state, ahead of any
/// other account or argument validation, so an outsider always receives
/// `Unauthorized`.
///
/// # Arguments
/// * `admin_signer` - The account claiming to be the administrator
/// * `ledger_state` - Already loaded ledger state
pub fn validate_admin_authority(
    admin_signer: &AccountInfo,
    ledger_state: &LedgerState,
) -> ProgramResult {
    if !admin_signer.is_signer {
        msg!("❌ Administrator must sign the transaction");
        return Err(ProgramError::MissingRequiredSignature);
    }

    if let Err(e) = ledger_state.require_administrator(admin_signer.key) {
        msg!("❌ UNAUTHORIZED: Caller is not the ledger administrator");
        msg!("   Current administrator: {}", ledger_state.administrator);
        msg!("   Provided signer: {}", admin_signer.key);
        return Err(e.into());
    }

    msg!("✅ Administrator validation passed: {}", admin_signer.key);
    Ok(())
}

/// Logs a ledger rejection and converts it for the runtime.
pub fn log_rejection(operation: &str, error: LedgerError) -> ProgramError {
    msg!("❌ {} rejected: {}", operation, error);
    error.into()
}
