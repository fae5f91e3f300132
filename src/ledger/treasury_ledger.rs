//! In-memory treasury ledger.
//!
//! Owns one [`LedgerState`], a default-on-miss book of recipient records and
//! the ordered event log. Each operation takes `&mut self`, works on copies of
//! the touched records and commits them together only when the transition
//! succeeded, so a rejected call leaves the ledger equal to its prior snapshot.

use std::collections::BTreeMap;

use solana_program::pubkey::Pubkey;

use crate::{
    error::LedgerError,
    ledger::operations,
    state::{LedgerState, RecipientRecord},
    types::LedgerEvent,
};

/// Recipient records keyed by identity. Reading an identity that was never
/// written yields the default record (no allowance, not withdrawn).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientBook {
    records: BTreeMap<Pubkey, RecipientRecord>,
}

impl RecipientBook {
    pub fn get(&self, recipient: &Pubkey) -> RecipientRecord {
        self.records
            .get(recipient)
            .cloned()
            .unwrap_or_else(|| RecipientRecord::new(*recipient, 0))
    }

    fn put(&mut self, record: RecipientRecord) {
        self.records.insert(record.recipient, record);
    }

    /// Identities with a stored record, in key order.
    pub fn recipients(&self) -> impl Iterator<Item = &Pubkey> {
        self.records.keys()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreasuryLedger {
    state: LedgerState,
    recipients: RecipientBook,
    events: Vec<LedgerEvent>,
}

impl TreasuryLedger {
    /// Constructs the ledger with `deployer` as administrator and an empty pool.
    pub fn new(deployer: Pubkey) -> Result<Self, LedgerError> {
        let (state, event) = operations::initialize_ledger(&deployer, 0)?;
        Ok(Self {
            state,
            recipients: RecipientBook::default(),
            events: vec![event],
        })
    }

    pub fn add_treasure_amount(&mut self, caller: &Pubkey, amount: u64) -> Result<(), LedgerError> {
        let mut state = self.state.clone();
        let event = operations::add_treasure_amount(&mut state, caller, amount)?;
        self.commit(Some(state), None, event);
        Ok(())
    }

    pub fn approve_treasure_withdrawal(
        &mut self,
        caller: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let mut record = self.recipients.get(recipient);
        let event = operations::approve_treasure_withdrawal(
            &self.state,
            &mut record,
            caller,
            amount,
        )?;
        self.commit(None, Some(record), event);
        Ok(())
    }

    pub fn revoke_treasure_withdrawal(
        &mut self,
        caller: &Pubkey,
        recipient: &Pubkey,
    ) -> Result<(), LedgerError> {
        let mut record = self.recipients.get(recipient);
        let event = operations::revoke_treasure_withdrawal(&self.state, &mut record, caller)?;
        self.commit(None, Some(record), event);
        Ok(())
    }

    /// `caller` claims from their own allowance.
    pub fn withdraw_treasure(&mut self, caller: &Pubkey, amount: u64) -> Result<(), LedgerError> {
        let mut state = self.state.clone();
        let mut record = self.recipients.get(caller);
        let event = operations::withdraw_treasure(&mut state, &mut record, amount)?;
        self.commit(Some(state), Some(record), event);
        Ok(())
    }

    pub fn reset_withdrawal_status(
        &mut self,
        caller: &Pubkey,
        recipient: &Pubkey,
    ) -> Result<(), LedgerError> {
        let mut record = self.recipients.get(recipient);
        let event = operations::reset_withdrawal_status(&self.state, &mut record, caller)?;
        self.commit(None, Some(record), event);
        Ok(())
    }

    pub fn transfer_ownership(
        &mut self,
        caller: &Pubkey,
        new_administrator: &Pubkey,
    ) -> Result<(), LedgerError> {
        let mut state = self.state.clone();
        let event = operations::transfer_ownership(&mut state, caller, new_administrator)?;
        self.commit(Some(state), None, event);
        Ok(())
    }

    pub fn get_treasure_amount(&self) -> u64 {
        self.state.treasure_amount
    }

    pub fn get_withdrawal_allowance(&self, recipient: &Pubkey) -> u64 {
        self.recipients.get(recipient).allowed_withdrawal
    }

    pub fn has_withdrawn_treasure(&self, recipient: &Pubkey) -> bool {
        self.recipients.get(recipient).has_withdrawn
    }

    pub fn administrator(&self) -> Pubkey {
        self.state.administrator
    }

    pub fn recipients(&self) -> &RecipientBook {
        &self.recipients
    }

    /// Every notification emitted so far, oldest first.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    // All ledger fields are written before the event is appended.
    fn commit(
        &mut self,
        state: Option<LedgerState>,
        record: Option<RecipientRecord>,
        event: LedgerEvent,
    ) {
        if let Some(state) = state {
            self.state = state;
        }
        if let Some(record) = record {
            self.recipients.put(record);
        }
        self.events.push(event);
    }
}
