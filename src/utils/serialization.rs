//! Serialization Utilities
//!
//! Writes borsh-encoded state back into program-owned accounts.

use borsh::BorshSerialize;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
};

/// Safe buffer serialization into account data.
///
/// The value is serialized into a temporary buffer first, so a serialization
/// failure or an undersized account leaves the account data untouched.
///
/// # Arguments
/// * `data` - The data to serialize (must implement BorshSerialize)
/// * `account` - The account to write the data to
pub fn serialize_to_account<T: BorshSerialize>(data: &T, account: &AccountInfo) -> ProgramResult {
    let serialized_data = data.try_to_vec()?;

    let account_data_len = account.data_len();
    if serialized_data.len() > account_data_len {
        msg!(
            "Serialized data too large for account {}. Need: {}, Have: {}",
            account.key,
            serialized_data.len(),
            account_data_len
        );
        return Err(ProgramError::AccountDataTooSmall);
    }

    let mut account_data = account.data.borrow_mut();
    account_data[..serialized_data.len()].copy_from_slice(&serialized_data);
    Ok(())
}
