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

//! # Test Environment Setup Utilities
//!
//! This module provides utilities for setting up test environments,
//! including program test creation and ledger initialization.

use std::env;

use solana_program::bpf_loader_upgradeable::{self, UpgradeableLoaderState};
use solana_program_test::{processor, BanksClient, BanksClientError, ProgramTest};
use solana_sdk::{
    account::Account, pubkey::Pubkey, signature::Keypair, signer::Signer, system_program,
};
use treasure_ledger::{
    client_sdk::LedgerClient, process_instruction, utils::get_program_data_address,
    ID as PROGRAM_ID,
};

use crate::common::ledger_helpers::send_instruction;

/// Lamports given to the deployer so it can pay fees and rent
const DEPLOYER_LAMPORTS: u64 = 100_000_000_000;

/// Test environment context
///
/// Contains all the basic components needed for a test environment.
/// The payer is the deployer: it is recorded as the program's upgrade
/// authority and therefore becomes the initial administrator.
pub struct TestEnvironment {
    pub banks_client: BanksClient,
    pub payer: Keypair,
    pub recent_blockhash: solana_sdk::hash::Hash,
    pub client: LedgerClient,
}

/// Create a basic program test environment
///
/// Sets up the program test with the treasure-ledger program, a funded
/// `deployer` and a program data account naming `deployer` as upgrade authority.
pub fn create_program_test(deployer: &Pubkey) -> ProgramTest {
    let mut program_test = ProgramTest::new(
        "treasure_ledger",
        PROGRAM_ID,
        processor!(process_instruction),
    );

    program_test.add_account(
        *deployer,
        Account {
            lamports: DEPLOYER_LAMPORTS,
            data: vec![],
            owner: system_program::id(),
            executable: false,
            rent_epoch: 0,
        },
    );

    let program_data = bincode::serialize(&UpgradeableLoaderState::ProgramData {
        slot: 0,
        upgrade_authority_address: Some(*deployer),
    })
    .expect("program data should serialize");
    program_test.add_account(
        get_program_data_address(&PROGRAM_ID),
        Account {
            lamports: 1_000_000_000,
            data: program_data,
            owner: bpf_loader_upgradeable::id(),
            executable: false,
            rent_epoch: 0,
        },
    );

    program_test.set_compute_max_units(200_000);
    program_test
}

/// Start a basic test environment with minimal logging
pub async fn start_test_environment() -> TestEnvironment {
    env::set_var("RUST_LOG", "error,solana_runtime::message_processor::stable_log=error");
    let _ = env_logger::try_init();

    let deployer = Keypair::new();
    let program_test = create_program_test(&deployer.pubkey());
    let (banks_client, _genesis_payer, recent_blockhash) = program_test.start().await;

    TestEnvironment {
        banks_client,
        payer: deployer,
        recent_blockhash,
        client: LedgerClient::new(PROGRAM_ID),
    }
}

/// Start a test environment and initialize the ledger with the payer as administrator
pub async fn start_initialized_ledger() -> Result<TestEnvironment, BanksClientError> {
    let mut env = start_test_environment().await;
    let payer_key = env.payer.pubkey();
    let instruction = env
        .client
        .initialize_ledger(&payer_key)
        .expect("instruction should build");
    send_instruction(&mut env, instruction, &[]).await?;
    Ok(env)
}

/// Start an initialized ledger whose pool holds `amount`
pub async fn start_funded_ledger(amount: u64) -> Result<TestEnvironment, BanksClientError> {
    let mut env = start_initialized_ledger().await?;
    let payer_key = env.payer.pubkey();
    let instruction = env
        .client
        .add_treasure_amount(&payer_key, amount)
        .expect("instruction should build");
    send_instruction(&mut env, instruction, &[]).await?;
    Ok(env)
}
