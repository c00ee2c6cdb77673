use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub custody_account: Pubkey,
    pub lock_period_slots: u64,
}

#[event]
pub struct Staked {
    pub user: Pubkey,
    pub amount: u64,
    pub mint: Pubkey,
    pub stake_info: Pubkey,
    pub stake_token_account: Pubkey,
    pub stake_at_slot: u64,
    pub unlock_slot: u64,
}

#[event]
pub struct Unstaked {
    pub user: Pubkey,
    pub amount: u64,
    pub mint: Pubkey,
    pub stake_info: Pubkey,
    pub destination: Pubkey,
    pub stake_at_slot: u64,
    pub unstaked_at_slot: u64,
}
