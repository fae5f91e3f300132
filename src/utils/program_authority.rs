//! Program Upgrade Authority Validation
//!
//! Only the upgrade authority of the deployed program may initialize the
//! ledger, which makes the deploying caller its first administrator.

use solana_program::{
    account_info::AccountInfo,
    bpf_loader_upgradeable::{self, UpgradeableLoaderState},
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::error::LedgerError;

/// Address of the loader account holding the program's data and upgrade authority.
pub fn get_program_data_address(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[program_id.as_ref()], &bpf_loader_upgradeable::id()).0
}

/// Validates that `authority_account` signed and is the upgrade authority
/// recorded in `program_data_account`.
///
/// # Arguments
/// * `program_id` - The ledger program
/// * `program_data_account` - Program data account of `program_id`
/// * `authority_account` - The account claiming to be the upgrade authority
///
/// # Returns
/// * `InvalidAccountData` for a wrong or malformed program data account
/// * `IncorrectProgramId` when the account is not owned by the upgradeable loader
/// * `LedgerError::Unauthorized` when the signer is not the upgrade authority,
///   or the authority was revoked
pub fn validate_program_upgrade_authority(
    program_id: &Pubkey,
    program_data_account: &AccountInfo,
    authority_account: &AccountInfo,
) -> Result<(), ProgramError> {
    let expected_program_data_address = get_program_data_address(program_id);
    if *program_data_account.key != expected_program_data_address {
        msg!("❌ Invalid program data account");
        msg!("   Expected: {}", expected_program_data_address);
        msg!("   Provided: {}", program_data_account.key);
        return Err(ProgramError::InvalidAccountData);
    }

    if *program_data_account.owner != bpf_loader_upgradeable::id() {
        msg!("❌ Program data account is not owned by the upgradeable loader");
        return Err(ProgramError::IncorrectProgramId);
    }

    if !authority_account.is_signer {
        msg!("❌ Program upgrade authority must be a signer");
        return Err(ProgramError::MissingRequiredSignature);
    }

    let program_data = program_data_account.try_borrow_data()?;
    let upgrade_authority = match bincode::deserialize::<UpgradeableLoaderState>(&program_data) {
        Ok(UpgradeableLoaderState::ProgramData { upgrade_authority_address, .. }) => {
            upgrade_authority_address
        }
        _ => {
            msg!("❌ Invalid program data state");
            return Err(ProgramError::InvalidAccountData);
        }
    };

    match upgrade_authority {
        Some(authority) if authority == *authority_account.key => {
            msg!("✅ Program upgrade authority validated: {}", authority);
            Ok(())
        }
        Some(authority) => {
            msg!("❌ UNAUTHORIZED: Signer is not the program upgrade authority");
            msg!("   Expected: {}", authority);
            msg!("   Provided: {}", authority_account.key);
            Err(LedgerError::Unauthorized.into())
        }
        None => {
            msg!("❌ Program has no upgrade authority (authority was revoked)");
            Err(LedgerError::Unauthorized.into())
        }
    }
}
