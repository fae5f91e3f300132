/*
MIT License

Copyright (c) 2024 Davinci

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! # Treasure Ledger - Client SDK
//!
//! This module provides a high-level client SDK for interacting with the Treasure Ledger program.
//! Callers never build account lists by hand: every instruction has a builder that
//! derives the PDAs and orders the accounts the way the processors expect them.
//!
//! ## Features
//! - Address derivation for the ledger state and recipient record PDAs
//! - Instruction building for all ledger operations
//! - Decoding of query return data and custom error codes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use treasure_ledger::client_sdk::LedgerClient;
//! use solana_program::pubkey::Pubkey;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let administrator = Pubkey::new_unique();
//! let recipient = Pubkey::new_unique();
//!
//! // Create a ledger client for the deployed program
//! let client = LedgerClient::new(treasure_ledger::id());
//!
//! // Fund the pool and grant an allowance
//! let initialize = client.initialize_ledger(&administrator)?;
//! let add = client.add_treasure_amount(&administrator, 100)?;
//! let approve = client.approve_treasure_withdrawal(&administrator, &recipient, 40)?;
//!
//! // The recipient claims with their own signature
//! let withdraw = client.withdraw_treasure(&recipient, 40)?;
//! # Ok(())
//! # }
//! ```

use borsh::BorshSerialize;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use crate::{
    error::LedgerErrorKind,
    types::LedgerInstruction,
    utils::{find_ledger_state_pda, find_recipient_record_pda, get_program_data_address},
};

/// Errors that can occur when using the ledger client
#[derive(Debug, PartialEq, Eq)]
pub enum LedgerClientError {
    /// Error during instruction serialization
    SerializationError,
    /// Query return data had an unexpected length
    InvalidReturnData { expected: usize, actual: usize },
}

impl From<std::io::Error> for LedgerClientError {
    fn from(_error: std::io::Error) -> Self {
        Self::SerializationError
    }
}

impl std::fmt::Display for LedgerClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerClientError::SerializationError => {
                write!(f, "Failed to serialize instruction data")
            }
            LedgerClientError::InvalidReturnData { expected, actual } => {
                write!(f, "Invalid return data: expected {} bytes, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for LedgerClientError {}

/// Derived addresses of one recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipientAddresses {
    pub ledger_state: Pubkey,
    pub recipient_record: Pubkey,
    pub recipient_record_bump: u8,
}

/// High-level client for the Treasure Ledger program
pub struct LedgerClient {
    /// The program ID of the deployed ledger program
    program_id: Pubkey,
}

impl LedgerClient {
    /// Creates a new ledger client.
    ///
    /// # Arguments
    /// * `program_id` - The program ID of the deployed Treasure Ledger program
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    /// Address of the upgradeable loader account recording this program's upgrade authority.
    pub fn program_data_address(&self) -> Pubkey {
        get_program_data_address(&self.program_id)
    }

    /// Address of the singleton ledger state account.
    pub fn ledger_state_address(&self) -> Pubkey {
        find_ledger_state_pda(&self.program_id).0
    }

    /// Derives the record address of `recipient`.
    pub fn derive_recipient_addresses(&self, recipient: &Pubkey) -> RecipientAddresses {
        let ledger_state = self.ledger_state_address();
        let (recipient_record, recipient_record_bump) =
            find_recipient_record_pda(&self.program_id, &ledger_state, recipient);
        RecipientAddresses {
            ledger_state,
            recipient_record,
            recipient_record_bump,
        }
    }

    fn build(
        &self,
        instruction: LedgerInstruction,
        accounts: Vec<AccountMeta>,
    ) -> Result<Instruction, LedgerClientError> {
        Ok(Instruction {
            program_id: self.program_id,
            accounts,
            data: instruction.try_to_vec()?,
        })
    }

    /// Builds `InitializeLedger`. `administrator` must be the program's upgrade
    /// authority; it signs and pays rent.
    pub fn initialize_ledger(
        &self,
        administrator: &Pubkey,
    ) -> Result<Instruction, LedgerClientError> {
        self.build(
            LedgerInstruction::InitializeLedger,
            vec![
                AccountMeta::new(*administrator, true),
                AccountMeta::new(self.ledger_state_address(), false),
                AccountMeta::new_readonly(system_program::id(), false),
                AccountMeta::new_readonly(self.program_data_address(), false),
            ],
        )
    }

    pub fn add_treasure_amount(
        &self,
        administrator: &Pubkey,
        amount: u64,
    ) -> Result<Instruction, LedgerClientError> {
        self.build(
            LedgerInstruction::AddTreasureAmount { amount },
            vec![
                AccountMeta::new_readonly(*administrator, true),
                AccountMeta::new(self.ledger_state_address(), false),
            ],
        )
    }

    /// Builds `ApproveTreasureWithdrawal`. `administrator` pays for the record
    /// account if this is the recipient's first approval.
    pub fn approve_treasure_withdrawal(
        &self,
        administrator: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
    ) -> Result<Instruction, LedgerClientError> {
        let addresses = self.derive_recipient_addresses(recipient);
        self.build(
            LedgerInstruction::ApproveTreasureWithdrawal {
                recipient: *recipient,
                amount,
            },
            vec![
                AccountMeta::new(*administrator, true),
                AccountMeta::new_readonly(addresses.ledger_state, false),
                AccountMeta::new(addresses.recipient_record, false),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
        )
    }

    pub fn revoke_treasure_withdrawal(
        &self,
        administrator: &Pubkey,
        recipient: &Pubkey,
    ) -> Result<Instruction, LedgerClientError> {
        let addresses = self.derive_recipient_addresses(recipient);
        self.build(
            LedgerInstruction::RevokeTreasureWithdrawal { recipient: *recipient },
            vec![
                AccountMeta::new_readonly(*administrator, true),
                AccountMeta::new_readonly(addresses.ledger_state, false),
                AccountMeta::new(addresses.recipient_record, false),
            ],
        )
    }

    /// Builds `WithdrawTreasure`. The record account is derived from `recipient`,
    /// who must sign.
    pub fn withdraw_treasure(
        &self,
        recipient: &Pubkey,
        amount: u64,
    ) -> Result<Instruction, LedgerClientError> {
        let addresses = self.derive_recipient_addresses(recipient);
        self.build(
            LedgerInstruction::WithdrawTreasure { amount },
            vec![
                AccountMeta::new_readonly(*recipient, true),
                AccountMeta::new(addresses.ledger_state, false),
                AccountMeta::new(addresses.recipient_record, false),
            ],
        )
    }

    pub fn reset_withdrawal_status(
        &self,
        administrator: &Pubkey,
        recipient: &Pubkey,
    ) -> Result<Instruction, LedgerClientError> {
        let addresses = self.derive_recipient_addresses(recipient);
        self.build(
            LedgerInstruction::ResetWithdrawalStatus { recipient: *recipient },
            vec![
                AccountMeta::new_readonly(*administrator, true),
                AccountMeta::new_readonly(addresses.ledger_state, false),
                AccountMeta::new(addresses.recipient_record, false),
            ],
        )
    }

    pub fn transfer_ownership(
        &self,
        administrator: &Pubkey,
        new_administrator: &Pubkey,
    ) -> Result<Instruction, LedgerClientError> {
        self.build(
            LedgerInstruction::TransferOwnership {
                new_administrator: *new_administrator,
            },
            vec![
                AccountMeta::new_readonly(*administrator, true),
                AccountMeta::new(self.ledger_state_address(), false),
            ],
        )
    }

    pub fn get_treasure_amount(&self) -> Result<Instruction, LedgerClientError> {
        self.build(
            LedgerInstruction::GetTreasureAmount,
            vec![AccountMeta::new_readonly(self.ledger_state_address(), false)],
        )
    }

    pub fn get_withdrawal_allowance(
        &self,
        recipient: &Pubkey,
    ) -> Result<Instruction, LedgerClientError> {
        let addresses = self.derive_recipient_addresses(recipient);
        self.build(
            LedgerInstruction::GetWithdrawalAllowance { recipient: *recipient },
            vec![
                AccountMeta::new_readonly(addresses.ledger_state, false),
                AccountMeta::new_readonly(addresses.recipient_record, false),
            ],
        )
    }

    pub fn has_withdrawn_treasure(
        &self,
        recipient: &Pubkey,
    ) -> Result<Instruction, LedgerClientError> {
        let addresses = self.derive_recipient_addresses(recipient);
        self.build(
            LedgerInstruction::HasWithdrawnTreasure { recipient: *recipient },
            vec![
                AccountMeta::new_readonly(addresses.ledger_state, false),
                AccountMeta::new_readonly(addresses.recipient_record, false),
            ],
        )
    }

    pub fn get_version(&self) -> Result<Instruction, LedgerClientError> {
        self.build(LedgerInstruction::GetVersion, vec![])
    }
}

/// Decodes the return data of `GetTreasureAmount` and `GetWithdrawalAllowance`.
///
/// The runtime strips trailing zero bytes from recorded return data, so a
/// shorter payload is zero-extended and a missing one reads as zero.
pub fn decode_amount_return_data(data: &[u8]) -> Result<u64, LedgerClientError> {
    if data.len() > 8 {
        return Err(LedgerClientError::InvalidReturnData {
            expected: 8,
            actual: data.len(),
        });
    }
    let mut bytes = [0u8; 8];
    bytes[..data.len()].copy_from_slice(data);
    Ok(u64::from_le_bytes(bytes))
}

/// Decodes the return data of `HasWithdrawnTreasure`. An empty payload is `false`.
pub fn decode_flag_return_data(data: &[u8]) -> Result<bool, LedgerClientError> {
    match data {
        [] => Ok(false),
        [flag] => Ok(*flag != 0),
        _ => Err(LedgerClientError::InvalidReturnData {
            expected: 1,
            actual: data.len(),
        }),
    }
}

/// Maps a `ProgramError::Custom` code reported by the runtime back to a ledger error kind.
pub fn decode_custom_error(code: u32) -> Option<LedgerErrorKind> {
    LedgerErrorKind::from_code(code)
}
