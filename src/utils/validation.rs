//! Input Validation Utilities
//!
//! Account-shape checks used by the processors, and the argument checks the
//! ledger core applies before any state mutation.

use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

use crate::error::LedgerError;

/// Validates that an account is a signer.
///
/// # Arguments
/// * `account` - The account to validate
/// * `context` - Context string for error messages
pub fn validate_signer(account: &AccountInfo, context: &str) -> ProgramResult {
    if !account.is_signer {
        msg!("{} must be a signer", context);
        return Err(ProgramError::MissingRequiredSignature);
    }
    Ok(())
}

/// Validates that an account is writable.
///
/// # Arguments
/// * `account` - The account to validate
/// * `context` - Context string for error messages
pub fn validate_writable(account: &AccountInfo, context: &str) -> ProgramResult {
    if !account.is_writable {
        msg!("{} must be writable", context);
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(())
}

pub fn validate_system_program(account: &AccountInfo) -> ProgramResult {
    if !system_program::check_id(account.key) {
        msg!("Expected system program, got {}", account.key);
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

/// Rejects the null (all-zero) identity.
pub fn validate_recipient(recipient: &Pubkey) -> Result<(), LedgerError> {
    if *recipient == Pubkey::default() {
        return Err(LedgerError::InvalidRecipient);
    }
    Ok(())
}

/// Rejects zero amounts.
pub fn validate_non_zero_amount(amount: u64) -> Result<(), LedgerError> {
    if amount == 0 {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(())
}
