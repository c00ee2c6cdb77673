use crate::error::*;
use crate::guard::get_program_data_address;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    // init_if_needed so a second call reaches the handler and reports
    // AlreadyInitialized instead of a system program error.
    #[account(
        init_if_needed,
        payer = signer,
        space = VaultState::LEN,
        seeds = [VAULT_SEED],
        bump
    )]
    pub vault_state: Account<'info, VaultState>,

    /// CHECK: Aggregate custody token account, created by the handler only
    /// after the vault is known to be uninitialized. Its token authority is
    /// the vault PDA, so only this program can move funds out of it.
    #[account(
        mut,
        seeds = [CUSTODY_SEED],
        bump
    )]
    pub custody_account: UncheckedAccount<'info>,

    pub mint: Account<'info, Mint>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,

    /// CHECK: This is the program data account that contains the update authority
    #[account(
        constraint = program_data.key() == get_program_data_address(&crate::id()) @ CustomErrorCode::InvalidProgramData
    )]
    pub program_data: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        seeds = [VAULT_SEED],
        bump = vault_state.bump,
        constraint = vault_state.is_initialized @ CustomErrorCode::VaultNotInitialized,
        constraint = vault_state.mint == mint.key() @ CustomErrorCode::InvalidMint
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        init_if_needed,
        payer = signer,
        space = StakeInfo::LEN,
        seeds = [STAKE_INFO_SEED, signer.key().as_ref()],
        bump
    )]
    pub stake_info: Account<'info, StakeInfo>,

    /// Per-user stake token account. Like the custody account it answers to
    /// the vault PDA rather than to the user.
    #[account(
        init_if_needed,
        payer = signer,
        seeds = [TOKEN_SEED, signer.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = vault_state,
    )]
    pub stake_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        constraint = user_token_account.owner == signer.key() @ CustomErrorCode::InvalidTokenOwner
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Unstake<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        seeds = [VAULT_SEED],
        bump = vault_state.bump,
        constraint = vault_state.is_initialized @ CustomErrorCode::VaultNotInitialized,
        constraint = vault_state.mint == mint.key() @ CustomErrorCode::InvalidMint
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        seeds = [CUSTODY_SEED],
        bump = vault_state.custody_bump,
        constraint = custody_account.key() == vault_state.custody_account @ CustomErrorCode::InvalidCustodyAccount,
        constraint = custody_account.owner == vault_state.key() @ CustomErrorCode::InvalidCustodyAccount
    )]
    pub custody_account: Account<'info, TokenAccount>,

    // Created on demand only so that a caller who never staked gets
    // NotStaked; the failed transaction discards the allocation.
    #[account(
        init_if_needed,
        payer = signer,
        space = StakeInfo::LEN,
        seeds = [STAKE_INFO_SEED, signer.key().as_ref()],
        bump
    )]
    pub stake_info: Account<'info, StakeInfo>,

    #[account(
        init_if_needed,
        payer = signer,
        seeds = [TOKEN_SEED, signer.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = vault_state,
    )]
    pub stake_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        constraint = user_token_account.owner == signer.key() @ CustomErrorCode::InvalidTokenOwner
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct UnlockStatus<'info> {
    #[account(
        seeds = [VAULT_SEED],
        bump = vault_state.bump,
        constraint = vault_state.is_initialized @ CustomErrorCode::VaultNotInitialized
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        seeds = [STAKE_INFO_SEED, owner.as_ref()],
        bump = stake_info.bump
    )]
    pub stake_info: Account<'info, StakeInfo>,
}
