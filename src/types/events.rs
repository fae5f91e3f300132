//! Ledger Events
//!
//! Append-only notifications emitted after a successful state transition.
//! On chain each event is written twice: as a borsh record through
//! `sol_log_data` (tagged with [`LEDGER_EVENT_TAG`]) for indexers, and as a
//! readable `msg!` line.

use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    entrypoint::ProgramResult,
    log::sol_log_data,
    msg,
    pubkey::Pubkey,
};

use crate::constants::LEDGER_EVENT_TAG;

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    /// `previous` is `None` when the ledger is first established
    OwnershipTransferred {
        previous: Option<Pubkey>,
        new: Pubkey,
    },
    TreasureAdded {
        amount: u64,
    },
    WithdrawalApproved {
        recipient: Pubkey,
        amount: u64,
    },
    WithdrawalRevoked {
        recipient: Pubkey,
    },
    TreasureWithdrawn {
        recipient: Pubkey,
        amount: u64,
    },
    WithdrawalStatusReset {
        recipient: Pubkey,
    },
}

impl LedgerEvent {
    /// Event name, also the prefix of its log line.
    pub fn name(&self) -> &'static str {
        match self {
            LedgerEvent::OwnershipTransferred { .. } => "OwnershipTransferred",
            LedgerEvent::TreasureAdded { .. } => "TreasureAdded",
            LedgerEvent::WithdrawalApproved { .. } => "WithdrawalApproved",
            LedgerEvent::WithdrawalRevoked { .. } => "WithdrawalRevoked",
            LedgerEvent::TreasureWithdrawn { .. } => "TreasureWithdrawn",
            LedgerEvent::WithdrawalStatusReset { .. } => "WithdrawalStatusReset",
        }
    }

    /// Writes the event to the program log.
    ///
    /// Must only be called once every account touched by the operation has
    /// been written back.
    pub fn emit(&self) -> ProgramResult {
        let payload = self.try_to_vec()?;
        sol_log_data(&[LEDGER_EVENT_TAG, &payload]);
        msg!("📣 {}", self);
        Ok(())
    }

    /// Decodes the borsh payload of a `sol_log_data` record written by [`LedgerEvent::emit`].
    pub fn from_log_fields(fields: &[&[u8]]) -> Option<Self> {
        match fields {
            [tag, payload] if *tag == LEDGER_EVENT_TAG => Self::try_from_slice(payload).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: ", self.name())?;
        match self {
            LedgerEvent::OwnershipTransferred { previous: Some(previous), new } => {
                write!(f, "{} -> {}", previous, new)
            }
            LedgerEvent::OwnershipTransferred { previous: None, new } => {
                write!(f, "none -> {}", new)
            }
            LedgerEvent::TreasureAdded { amount } => write!(f, "{}", amount),
            LedgerEvent::WithdrawalApproved { recipient, amount } => {
                write!(f, "{} for {}", recipient, amount)
            }
            LedgerEvent::WithdrawalRevoked { recipient } => write!(f, "{}", recipient),
            LedgerEvent::TreasureWithdrawn { recipient, amount } => {
                write!(f, "{} took {}", recipient, amount)
            }
            LedgerEvent::WithdrawalStatusReset { recipient } => write!(f, "{}", recipient),
        }
    }
}
