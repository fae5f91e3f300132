//! # Ledger Test Helpers
//!
//! Transaction submission, account readers, query return data and log
//! parsing shared by the ledger integration tests.

use borsh::BorshDeserialize;
use solana_program::instruction::{Instruction, InstructionError};
use solana_program_test::BanksClientError;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::{Transaction, TransactionError},
};
use treasure_ledger::{
    client_sdk::{decode_amount_return_data, decode_flag_return_data},
    LedgerError, LedgerState, RecipientRecord,
};

use crate::common::setup::TestEnvironment;

/// Signs `instruction` with the payer plus `extra_signers` and processes it.
pub async fn send_instruction(
    env: &mut TestEnvironment,
    instruction: Instruction,
    extra_signers: &[&Keypair],
) -> Result<(), BanksClientError> {
    let transaction = build_transaction(env, instruction, extra_signers).await?;
    env.banks_client.process_transaction(transaction).await
}

async fn build_transaction(
    env: &mut TestEnvironment,
    instruction: Instruction,
    extra_signers: &[&Keypair],
) -> Result<Transaction, BanksClientError> {
    env.recent_blockhash = env.banks_client.get_latest_blockhash().await?;
    let mut signers: Vec<&Keypair> = vec![&env.payer];
    signers.extend_from_slice(extra_signers);
    Ok(Transaction::new_signed_with_payer(
        &[instruction],
        Some(&env.payer.pubkey()),
        signers.as_slice(),
        env.recent_blockhash,
    ))
}

/// Simulates `instruction` and returns the program logs without committing anything.
pub async fn simulate_logs(
    env: &mut TestEnvironment,
    instruction: Instruction,
    extra_signers: &[&Keypair],
) -> Result<Vec<String>, BanksClientError> {
    let transaction = build_transaction(env, instruction, extra_signers).await?;
    let simulation = env.banks_client.simulate_transaction(transaction).await?;

    if let Some(simulation_details) = simulation.simulation_details {
        Ok(simulation_details.logs)
    } else {
        Ok(vec![])
    }
}

/// Extracts the value following `label` from the first log line containing it.
///
/// Example: `"Program log: Treasure amount: 60"` with label `"Treasure amount:"` yields `"60"`.
pub fn parse_log_value(logs: &[String], label: &str) -> Option<String> {
    logs.iter()
        .find_map(|log| log.split(label).nth(1))
        .map(|value| value.trim().to_string())
}

pub async fn get_ledger_state(env: &mut TestEnvironment) -> LedgerState {
    let address = env.client.ledger_state_address();
    let account = env
        .banks_client
        .get_account(address)
        .await
        .expect("banks client should respond")
        .expect("ledger state account should exist");
    LedgerState::try_from_slice(&account.data).expect("ledger state should deserialize")
}

/// Reads the stored record of `recipient`, `None` while no record account exists.
pub async fn get_recipient_record(
    env: &mut TestEnvironment,
    recipient: &Pubkey,
) -> Option<RecipientRecord> {
    let address = env.client.derive_recipient_addresses(recipient).recipient_record;
    let account = env
        .banks_client
        .get_account(address)
        .await
        .expect("banks client should respond")?;
    Some(
        RecipientRecord::try_from_slice(&account.data)
            .expect("recipient record should deserialize"),
    )
}

/// Simulates `instruction` and returns the program's return data, empty when none was set.
pub async fn simulate_return_data(
    env: &mut TestEnvironment,
    instruction: Instruction,
) -> Result<Vec<u8>, BanksClientError> {
    let transaction = build_transaction(env, instruction, &[]).await?;
    let simulation = env.banks_client.simulate_transaction(transaction).await?;

    if let Err(error) = simulation.result.unwrap_or(Ok(())) {
        return Err(BanksClientError::TransactionError(error));
    }
    Ok(simulation
        .simulation_details
        .and_then(|details| details.return_data)
        .map(|return_data| return_data.data)
        .unwrap_or_default())
}

/// Pool total as returned by the `GetTreasureAmount` query.
pub async fn query_treasure_amount(env: &mut TestEnvironment) -> u64 {
    let instruction = env.client.get_treasure_amount().expect("instruction should build");
    let data = simulate_return_data(env, instruction).await.expect("simulation should run");
    decode_amount_return_data(&data).expect("treasure amount should be returned")
}

/// Allowance as returned by the `GetWithdrawalAllowance` query.
pub async fn query_withdrawal_allowance(env: &mut TestEnvironment, recipient: &Pubkey) -> u64 {
    let instruction = env
        .client
        .get_withdrawal_allowance(recipient)
        .expect("instruction should build");
    let data = simulate_return_data(env, instruction).await.expect("simulation should run");
    decode_amount_return_data(&data).expect("allowance should be returned")
}

/// Claimed flag as returned by the `HasWithdrawnTreasure` query.
pub async fn query_has_withdrawn(env: &mut TestEnvironment, recipient: &Pubkey) -> bool {
    let instruction = env
        .client
        .has_withdrawn_treasure(recipient)
        .expect("instruction should build");
    let data = simulate_return_data(env, instruction).await.expect("simulation should run");
    decode_flag_return_data(&data).expect("claimed flag should be returned")
}

/// Extracts the custom program error code of a failed transaction.
pub fn custom_error_code(result: &Result<(), BanksClientError>) -> Option<u32> {
    match result {
        Err(BanksClientError::TransactionError(TransactionError::InstructionError(
            _,
            InstructionError::Custom(code),
        ))) => Some(*code),
        _ => None,
    }
}

/// Asserts that `result` failed with the custom code of `expected`.
pub fn assert_ledger_error(result: &Result<(), BanksClientError>, expected: LedgerError) {
    assert_eq!(
        custom_error_code(result),
        Some(expected.error_code()),
        "expected {:?} ({}), got {:?}",
        expected,
        expected.error_code(),
        result
    );
}
