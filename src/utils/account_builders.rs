//! Account Builders
//!
//! Creation of rent-exempt, program-owned PDA accounts.

use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program::{invoke, invoke_signed},
    pubkey::Pubkey,
    system_instruction,
    sysvar::{rent::Rent, Sysvar},
};

/// Creates `pda_account` with `space` bytes, owned by `program_id` and funded
/// to the rent-exempt minimum by `payer`.
///
/// PDA addresses are public, so anyone may have sent lamports to one before
/// it is created. `create_account` rejects such an account; it is instead
/// topped up, allocated and assigned.
///
/// # Arguments
/// * `payer` - Signer funding the account
/// * `pda_account` - The PDA to create
/// * `system_program_account` - Solana system program
/// * `program_id` - Owner of the new account
/// * `space` - Account data size
/// * `signer_seeds` - Full PDA seeds, bump included
pub fn create_pda_account<'a>(
    payer: &AccountInfo<'a>,
    pda_account: &AccountInfo<'a>,
    system_program_account: &AccountInfo<'a>,
    program_id: &Pubkey,
    space: usize,
    signer_seeds: &[&[u8]],
) -> ProgramResult {
    let rent = Rent::get()?;
    let lamports = rent.minimum_balance(space);
    let current_lamports = pda_account.lamports();

    if current_lamports == 0 {
        invoke_signed(
            &system_instruction::create_account(
                payer.key,
                pda_account.key,
                lamports,
                space as u64,
                program_id,
            ),
            &[
                payer.clone(),
                pda_account.clone(),
                system_program_account.clone(),
            ],
            &[signer_seeds],
        )?;

        msg!("Created PDA {} ({} bytes, {} lamports)", pda_account.key, space, lamports);
        return Ok(());
    }

    let top_up = lamports.saturating_sub(current_lamports);
    if top_up > 0 {
        invoke(
            &system_instruction::transfer(payer.key, pda_account.key, top_up),
            &[
                payer.clone(),
                pda_account.clone(),
                system_program_account.clone(),
            ],
        )?;
    }

    invoke_signed(
        &system_instruction::allocate(pda_account.key, space as u64),
        &[pda_account.clone(), system_program_account.clone()],
        &[signer_seeds],
    )?;
    invoke_signed(
        &system_instruction::assign(pda_account.key, program_id),
        &[pda_account.clone(), system_program_account.clone()],
        &[signer_seeds],
    )?;

    msg!(
        "Created pre-funded PDA {} ({} bytes, {} lamports held, {} topped up)",
        pda_account.key,
        space,
        current_lamports,
        top_up
    );
    Ok(())
}
