//! Treasure Ledger Program
//!
//! A single-administrator ledger for a pool of treasure. The administrator
//! tops up the pool and grants per-recipient allowances; each recipient may
//! claim once per epoch, and the administrator opens new epochs by resetting
//! the claimed flag.

use borsh::BorshDeserialize;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

pub mod client_sdk;
pub mod constants;
pub mod error;
pub mod ledger;
pub mod processors;
pub mod state;
pub mod types;
pub mod utils;

pub use error::{LedgerError, LedgerErrorKind};
pub use ledger::TreasuryLedger;
pub use state::{LedgerState, RecipientRecord};
pub use types::{LedgerEvent, LedgerInstruction};

use processors::*;

#[cfg(all(feature = "devnet", feature = "mainnet"))]
compile_error!("features `devnet` and `mainnet` are mutually exclusive");

#[cfg(feature = "mainnet")]
solana_program::declare_id!("J2RKJM81WYEDHbpDcT2JczQ85vKpmNmjYt1nRV7ewDi");

#[cfg(all(feature = "devnet", not(feature = "mainnet")))]
solana_program::declare_id!("Ci389BSdZGqqmZeQACXHGS45mdU3vvvmCrJv5We9qFFj");

#[cfg(not(any(feature = "devnet", feature = "mainnet")))]
solana_program::declare_id!("AbEMcAn7nyNYti9EVEciitkdyZ9XPHS2XMjSyUXFAWsd");

#[cfg(not(feature = "no-entrypoint"))]
solana_program::entrypoint!(process_instruction);

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = LedgerInstruction::try_from_slice(instruction_data).map_err(|_| {
        msg!("❌ Failed to decode instruction data ({} bytes)", instruction_data.len());
        ProgramError::InvalidInstructionData
    })?;

    match instruction {
        LedgerInstruction::InitializeLedger => {
            process_initialize_ledger(program_id, accounts)
        }
        LedgerInstruction::AddTreasureAmount { amount } => {
            process_add_treasure_amount(program_id, accounts, amount)
        }
        LedgerInstruction::ApproveTreasureWithdrawal { recipient, amount } => {
            process_approve_treasure_withdrawal(program_id, accounts, recipient, amount)
        }
        LedgerInstruction::RevokeTreasureWithdrawal { recipient } => {
            process_revoke_treasure_withdrawal(program_id, accounts, recipient)
        }
        LedgerInstruction::WithdrawTreasure { amount } => {
            process_withdraw_treasure(program_id, accounts, amount)
        }
        LedgerInstruction::ResetWithdrawalStatus { recipient } => {
            process_reset_withdrawal_status(program_id, accounts, recipient)
        }
        LedgerInstruction::TransferOwnership { new_administrator } => {
            process_transfer_ownership(program_id, accounts, new_administrator)
        }
        LedgerInstruction::GetTreasureAmount => {
            process_get_treasure_amount(program_id, accounts)
        }
        LedgerInstruction::GetWithdrawalAllowance { recipient } => {
            process_get_withdrawal_allowance(program_id, accounts, recipient)
        }
        LedgerInstruction::HasWithdrawnTreasure { recipient } => {
            process_has_withdrawn_treasure(program_id, accounts, recipient)
        }
        LedgerInstruction::GetVersion => {
            process_get_version(accounts)
        }
    }
}
