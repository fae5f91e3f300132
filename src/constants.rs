//! Constants for the Treasure Ledger Program
//!
//! PDA seed prefixes and log tags used by the processors and the client SDK.

/// PDA seed prefix for the singleton ledger state account
pub const LEDGER_STATE_SEED_PREFIX: &[u8] = b"ledger_state";

/// PDA seed prefix for per-recipient allowance records.
/// Full seeds: `[RECIPIENT_RECORD_SEED_PREFIX, ledger_state_pda, recipient]`
pub const RECIPIENT_RECORD_SEED_PREFIX: &[u8] = b"recipient_record";

/// Leading field of every `sol_log_data` event record, so indexers can pick
/// ledger events out of the program log
pub const LEDGER_EVENT_TAG: &[u8] = b"treasure_ledger_event";
