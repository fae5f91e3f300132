//! Ledger state transitions.
//!
//! Every operation follows the same shape: run all checks, then mutate every
//! affected field, then hand back the event describing the change. A failed
//! operation returns before the first write, so the inputs are unchanged.
//!
//! These functions are host-independent. The program processors feed them
//! state loaded from accounts; [`super::TreasuryLedger`] feeds them in-memory
//! state.

use solana_program::pubkey::Pubkey;

use crate::{
    error::LedgerError,
    state::{LedgerState, RecipientRecord},
    types::LedgerEvent,
    utils::validation::{validate_non_zero_amount, validate_recipient},
};

/// Genesis: `administrator` becomes the owner of an empty pool.
pub fn initialize_ledger(
    administrator: &Pubkey,
    bump: u8,
) -> Result<(LedgerState, LedgerEvent), LedgerError> {
    validate_recipient(administrator)?;
    let state = LedgerState::new(*administrator, bump);
    let event = LedgerEvent::OwnershipTransferred {
        previous: None,
        new: *administrator,
    };
    Ok((state, event))
}

pub fn add_treasure_amount(
    state: &mut LedgerState,
    caller: &Pubkey,
    amount: u64,
) -> Result<LedgerEvent, LedgerError> {
    state.require_administrator(caller)?;
    validate_non_zero_amount(amount)?;
    let treasure_amount = state
        .treasure_amount
        .checked_add(amount)
        .ok_or(LedgerError::Overflow)?;

    state.treasure_amount = treasure_amount;
    Ok(LedgerEvent::TreasureAdded { amount })
}

/// Adds `amount` to the allowance held in `record`.
///
/// Only the current pool is checked, not the allowances already granted to
/// others, so the pool can end up oversubscribed.
pub fn approve_treasure_withdrawal(
    state: &LedgerState,
    record: &mut RecipientRecord,
    caller: &Pubkey,
    amount: u64,
) -> Result<LedgerEvent, LedgerError> {
    state.require_administrator(caller)?;
    validate_recipient(&record.recipient)?;
    validate_non_zero_amount(amount)?;
    if amount > state.treasure_amount {
        return Err(LedgerError::InsufficientPool {
            requested: amount,
            available: state.treasure_amount,
        });
    }
    let allowed_withdrawal = record
        .allowed_withdrawal
        .checked_add(amount)
        .ok_or(LedgerError::Overflow)?;

    record.allowed_withdrawal = allowed_withdrawal;
    Ok(LedgerEvent::WithdrawalApproved {
        recipient: record.recipient,
        amount,
    })
}

/// Zeroes the allowance held in `record`. The claimed flag is left alone.
pub fn revoke_treasure_withdrawal(
    state: &LedgerState,
    record: &mut RecipientRecord,
    caller: &Pubkey,
) -> Result<LedgerEvent, LedgerError> {
    state.require_administrator(caller)?;
    validate_recipient(&record.recipient)?;
    if record.allowed_withdrawal == 0 {
        return Err(LedgerError::NoAllowance);
    }

    record.allowed_withdrawal = 0;
    Ok(LedgerEvent::WithdrawalRevoked {
        recipient: record.recipient,
    })
}

/// Claims `amount` for the owner of `record`, who must be the authenticated caller.
///
/// The claimed flag is checked before the allowance: a repeat claim in the
/// same epoch reports `AlreadyWithdrawn` even though the first claim zeroed
/// the allowance. On success the flag is set, the pool shrinks by `amount`
/// and the whole allowance is consumed.
pub fn withdraw_treasure(
    state: &mut LedgerState,
    record: &mut RecipientRecord,
    amount: u64,
) -> Result<LedgerEvent, LedgerError> {
    validate_non_zero_amount(amount)?;
    if record.has_withdrawn {
        return Err(LedgerError::AlreadyWithdrawn);
    }
    if record.allowed_withdrawal == 0 {
        return Err(LedgerError::NoAllowance);
    }
    if amount > record.allowed_withdrawal {
        return Err(LedgerError::AmountExceedsAllowance {
            requested: amount,
            allowance: record.allowed_withdrawal,
        });
    }
    let treasure_amount = state
        .treasure_amount
        .checked_sub(amount)
        .ok_or(LedgerError::InsufficientPool {
            requested: amount,
            available: state.treasure_amount,
        })?;

    record.has_withdrawn = true;
    state.treasure_amount = treasure_amount;
    record.allowed_withdrawal = 0;
    Ok(LedgerEvent::TreasureWithdrawn {
        recipient: record.recipient,
        amount,
    })
}

/// Opens a new claim epoch for the owner of `record`. No allowance is restored.
pub fn reset_withdrawal_status(
    state: &LedgerState,
    record: &mut RecipientRecord,
    caller: &Pubkey,
) -> Result<LedgerEvent, LedgerError> {
    state.require_administrator(caller)?;
    validate_recipient(&record.recipient)?;

    record.has_withdrawn = false;
    Ok(LedgerEvent::WithdrawalStatusReset {
        recipient: record.recipient,
    })
}

pub fn transfer_ownership(
    state: &mut LedgerState,
    caller: &Pubkey,
    new_administrator: &Pubkey,
) -> Result<LedgerEvent, LedgerError> {
    state.require_administrator(caller)?;
    validate_recipient(new_administrator)?;

    let previous = state.administrator;
    state.administrator = *new_administrator;
    Ok(LedgerEvent::OwnershipTransferred {
        previous: Some(previous),
        new: *new_administrator,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn funded_state(admin: &Pubkey, pool: u64) -> LedgerState {
        let mut state = LedgerState::new(*admin, 255);
        state.treasure_amount = pool;
        state
    }

    fn record_with(allowance: u64, has_withdrawn: bool) -> RecipientRecord {
        let mut record = RecipientRecord::new(Pubkey::new_unique(), 255);
        record.allowed_withdrawal = allowance;
        record.has_withdrawn = has_withdrawn;
        record
    }

    #[test]
    fn genesis_rejects_the_null_identity() {
        assert_eq!(
            initialize_ledger(&Pubkey::default(), 0).unwrap_err(),
            LedgerError::InvalidRecipient
        );

        let admin = Pubkey::new_unique();
        let (state, event) = initialize_ledger(&admin, 3).unwrap();
        assert_eq!(state.administrator, admin);
        assert_eq!(state.treasure_amount, 0);
        assert_eq!(event, LedgerEvent::OwnershipTransferred { previous: None, new: admin });
    }

    #[test]
    fn authorization_is_checked_before_arguments() {
        let admin = Pubkey::new_unique();
        let intruder = Pubkey::new_unique();
        let mut state = funded_state(&admin, 0);
        let mut null_record = RecipientRecord::new(Pubkey::default(), 0);

        // Every argument is invalid as well; the guard must still win.
        assert_eq!(add_treasure_amount(&mut state, &intruder, 0), Err(LedgerError::Unauthorized));
        assert_eq!(
            approve_treasure_withdrawal(&state, &mut null_record, &intruder, 0),
            Err(LedgerError::Unauthorized)
        );
        assert_eq!(
            revoke_treasure_withdrawal(&state, &mut null_record, &intruder),
            Err(LedgerError::Unauthorized)
        );
        assert_eq!(
            reset_withdrawal_status(&state, &mut null_record, &intruder),
            Err(LedgerError::Unauthorized)
        );
        assert_eq!(
            transfer_ownership(&mut state, &intruder, &Pubkey::default()),
            Err(LedgerError::Unauthorized)
        );
    }

    #[test]
    fn add_rejects_overflow_without_mutation() {
        let admin = Pubkey::new_unique();
        let mut state = funded_state(&admin, u64::MAX - 5);

        assert_eq!(add_treasure_amount(&mut state, &admin, 6), Err(LedgerError::Overflow));
        assert_eq!(state.treasure_amount, u64::MAX - 5);

        assert_eq!(
            add_treasure_amount(&mut state, &admin, 5),
            Ok(LedgerEvent::TreasureAdded { amount: 5 })
        );
        assert_eq!(state.treasure_amount, u64::MAX);
    }

    #[test]
    fn approve_checks_in_order() {
        let admin = Pubkey::new_unique();
        let state = funded_state(&admin, 100);

        let mut null_record = RecipientRecord::new(Pubkey::default(), 0);
        assert_eq!(
            approve_treasure_withdrawal(&state, &mut null_record, &admin, 0),
            Err(LedgerError::InvalidRecipient)
        );

        let mut record = record_with(0, false);
        assert_eq!(
            approve_treasure_withdrawal(&state, &mut record, &admin, 0),
            Err(LedgerError::InvalidAmount)
        );
        assert_eq!(
            approve_treasure_withdrawal(&state, &mut record, &admin, 101),
            Err(LedgerError::InsufficientPool { requested: 101, available: 100 })
        );
        assert_eq!(record.allowed_withdrawal, 0);
    }

    #[test]
    fn approve_accumulates_and_detects_overflow() {
        let admin = Pubkey::new_unique();
        let state = funded_state(&admin, u64::MAX);
        let mut record = record_with(u64::MAX - 1, false);

        assert_eq!(
            approve_treasure_withdrawal(&state, &mut record, &admin, 2),
            Err(LedgerError::Overflow)
        );
        assert_eq!(record.allowed_withdrawal, u64::MAX - 1);

        approve_treasure_withdrawal(&state, &mut record, &admin, 1).unwrap();
        assert_eq!(record.allowed_withdrawal, u64::MAX);
    }

    #[test]
    fn revoke_leaves_the_claimed_flag_alone() {
        let admin = Pubkey::new_unique();
        let state = funded_state(&admin, 100);
        let mut record = record_with(30, true);

        let event = revoke_treasure_withdrawal(&state, &mut record, &admin).unwrap();
        assert_eq!(event, LedgerEvent::WithdrawalRevoked { recipient: record.recipient });
        assert_eq!(record.allowed_withdrawal, 0);
        assert!(record.has_withdrawn);

        assert_eq!(
            revoke_treasure_withdrawal(&state, &mut record, &admin),
            Err(LedgerError::NoAllowance)
        );
    }

    #[test]
    fn withdraw_checks_in_order() {
        let admin = Pubkey::new_unique();
        let mut state = funded_state(&admin, 10);

        let mut claimed = record_with(50, true);
        assert_eq!(withdraw_treasure(&mut state, &mut claimed, 0), Err(LedgerError::InvalidAmount));
        assert_eq!(
            withdraw_treasure(&mut state, &mut claimed, 5),
            Err(LedgerError::AlreadyWithdrawn)
        );

        let mut empty = record_with(0, false);
        assert_eq!(withdraw_treasure(&mut state, &mut empty, 5), Err(LedgerError::NoAllowance));

        let mut small = record_with(5, false);
        assert_eq!(
            withdraw_treasure(&mut state, &mut small, 6),
            Err(LedgerError::AmountExceedsAllowance { requested: 6, allowance: 5 })
        );

        let mut oversubscribed = record_with(50, false);
        let before = oversubscribed.clone();
        assert_eq!(
            withdraw_treasure(&mut state, &mut oversubscribed, 11),
            Err(LedgerError::InsufficientPool { requested: 11, available: 10 })
        );
        assert_eq!(oversubscribed, before);
        assert_eq!(state.treasure_amount, 10);
    }

    #[test]
    fn partial_withdrawal_forfeits_the_remainder() {
        let admin = Pubkey::new_unique();
        let mut state = funded_state(&admin, 100);
        let mut record = record_with(40, false);

        let event = withdraw_treasure(&mut state, &mut record, 15).unwrap();
        assert_eq!(
            event,
            LedgerEvent::TreasureWithdrawn { recipient: record.recipient, amount: 15 }
        );
        assert_eq!(state.treasure_amount, 85);
        assert_eq!(record.allowed_withdrawal, 0);
        assert!(record.has_withdrawn);
    }

    #[test]
    fn reset_does_not_restore_allowance() {
        let admin = Pubkey::new_unique();
        let state = funded_state(&admin, 100);
        let mut record = record_with(0, true);

        reset_withdrawal_status(&state, &mut record, &admin).unwrap();
        assert!(!record.has_withdrawn);
        assert_eq!(record.allowed_withdrawal, 0);
    }

    #[test]
    fn ownership_moves_and_old_admin_loses_access() {
        let admin = Pubkey::new_unique();
        let successor = Pubkey::new_unique();
        let mut state = funded_state(&admin, 0);

        assert_eq!(
            transfer_ownership(&mut state, &admin, &Pubkey::default()),
            Err(LedgerError::InvalidRecipient)
        );
        assert_eq!(
            transfer_ownership(&mut state, &admin, &successor),
            Ok(LedgerEvent::OwnershipTransferred { previous: Some(admin), new: successor })
        );
        assert_eq!(add_treasure_amount(&mut state, &admin, 1), Err(LedgerError::Unauthorized));
        assert!(add_treasure_amount(&mut state, &successor, 1).is_ok());
    }
}
