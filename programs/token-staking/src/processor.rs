use crate::account_structs::*;
use crate::custody::SplTokenCustody;
use crate::events::*;
use crate::guard::program_upgrade_authority;
use crate::staking::{self, Route, VaultSetup};
use crate::state::{CUSTODY_SEED, VAULT_SEED};
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount};
use anchor_spl::token::{self, InitializeAccount3, TokenAccount};

pub fn initialize(ctx: Context<Initialize>, lock_period_slots: u64) -> Result<()> {
    let vault_key = ctx.accounts.vault_state.key();
    let custody_key = ctx.accounts.custody_account.key();
    let upgrade_authority = program_upgrade_authority(&ctx.accounts.program_data)?;

    staking::initialize_vault(
        &mut ctx.accounts.vault_state,
        VaultSetup {
            authority: ctx.accounts.signer.key(),
            upgrade_authority,
            mint: ctx.accounts.mint.key(),
            custody_account: custody_key,
            lock_period_slots,
            bump: ctx.bumps.vault_state,
            custody_bump: ctx.bumps.custody_account,
        },
    )?;
    create_custody_account(ctx.accounts, ctx.bumps.custody_account)?;

    msg!(
        "Vault {} initialized with custody {} and lock period {} slots",
        vault_key,
        custody_key,
        lock_period_slots
    );
    emit!(VaultInitialized {
        authority: ctx.accounts.signer.key(),
        mint: ctx.accounts.mint.key(),
        vault: vault_key,
        custody_account: custody_key,
        lock_period_slots,
    });

    Ok(())
}

/// Allocates the custody PDA as a token account of the vault mint with the
/// vault PDA as its token authority.
fn create_custody_account<'info>(accounts: &Initialize<'info>, bump: u8) -> Result<()> {
    let custody = accounts.custody_account.to_account_info();
    let system = accounts.system_program.to_account_info();
    let seeds: &[&[u8]] = &[CUSTODY_SEED, &[bump]];
    let signer_seeds = &[seeds];
    let space = TokenAccount::LEN;
    let required = Rent::get()?.minimum_balance(space);
    let current = custody.lamports();

    if current == 0 {
        system_program::create_account(
            CpiContext::new_with_signer(
                system,
                CreateAccount {
                    from: accounts.signer.to_account_info(),
                    to: custody.clone(),
                },
                signer_seeds,
            ),
            required,
            space as u64,
            &token::ID,
        )?;
    } else {
        // create_account refuses an address that already holds lamports
        let top_up = required.saturating_sub(current);
        if top_up > 0 {
            system_program::transfer(
                CpiContext::new(
                    system.clone(),
                    system_program::Transfer {
                        from: accounts.signer.to_account_info(),
                        to: custody.clone(),
                    },
                ),
                top_up,
            )?;
        }
        system_program::allocate(
            CpiContext::new_with_signer(
                system.clone(),
                Allocate {
                    account_to_allocate: custody.clone(),
                },
                signer_seeds,
            ),
            space as u64,
        )?;
        system_program::assign(
            CpiContext::new_with_signer(
                system,
                Assign {
                    account_to_assign: custody.clone(),
                },
                signer_seeds,
            ),
            &token::ID,
        )?;
    }

    token::initialize_account3(CpiContext::new(
        accounts.token_program.to_account_info(),
        InitializeAccount3 {
            account: custody,
            mint: accounts.mint.to_account_info(),
            authority: accounts.vault_state.to_account_info(),
        },
    ))
}

pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    msg!("Starting stake process");
    let clock = Clock::get()?;
    let owner = ctx.accounts.signer.key();
    let route = Route {
        from: ctx.accounts.user_token_account.key(),
        to: ctx.accounts.stake_token_account.key(),
    };

    let mut custody = SplTokenCustody::new(
        &ctx.accounts.token_program,
        &ctx.accounts.user_token_account,
        &ctx.accounts.stake_token_account,
        ctx.accounts.signer.to_account_info(),
        &[],
    );
    let stake_info = &mut ctx.accounts.stake_info;
    let stake_at_slot = staking::stake(stake_info, owner, amount, route, &mut custody, &clock)?;
    stake_info.bump = ctx.bumps.stake_info;

    let unlock_slot = stake_info.unlock_slot(ctx.accounts.vault_state.lock_period_slots)?;

    msg!("Emitting Staked");
    emit!(Staked {
        user: owner,
        amount,
        mint: ctx.accounts.mint.key(),
        stake_info: ctx.accounts.stake_info.key(),
        stake_token_account: route.to,
        stake_at_slot,
        unlock_slot,
    });

    Ok(())
}

pub fn unstake(ctx: Context<Unstake>) -> Result<()> {
    msg!("Starting unstake process");
    let clock = Clock::get()?;
    let owner = ctx.accounts.signer.key();
    let lock_period_slots = ctx.accounts.vault_state.lock_period_slots;
    let route = Route {
        from: ctx.accounts.stake_token_account.key(),
        to: ctx.accounts.user_token_account.key(),
    };

    let seeds: &[&[u8]] = &[VAULT_SEED, &[ctx.accounts.vault_state.bump]];
    let signer = &[seeds];
    let mut custody = SplTokenCustody::new(
        &ctx.accounts.token_program,
        &ctx.accounts.stake_token_account,
        &ctx.accounts.user_token_account,
        ctx.accounts.vault_state.to_account_info(),
        signer,
    );
    let release = staking::unstake(
        &mut ctx.accounts.stake_info,
        owner,
        lock_period_slots,
        route,
        &mut custody,
        &clock,
    )?;

    msg!("Emitting Unstaked");
    emit!(Unstaked {
        user: owner,
        amount: release.amount,
        mint: ctx.accounts.mint.key(),
        stake_info: ctx.accounts.stake_info.key(),
        destination: route.to,
        stake_at_slot: release.stake_at_slot,
        unstaked_at_slot: release.released_at_slot,
    });

    Ok(())
}

/// Slots left before `owner` may unstake, 0 once unlocked.
/// Returns value via return_data for efficient CPI access
pub fn unlock_status(ctx: Context<UnlockStatus>, owner: Pubkey) -> Result<u64> {
    let current_slot = Clock::get()?.slot;
    let remaining = ctx
        .accounts
        .stake_info
        .slots_until_unlock(ctx.accounts.vault_state.lock_period_slots, current_slot)?;

    msg!("unlock_status: {} has {} slots remaining", owner, remaining);

    anchor_lang::solana_program::program::set_return_data(&remaining.to_le_bytes());

    Ok(remaining)
}
