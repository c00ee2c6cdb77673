use crate::error::CustomErrorCode;
use anchor_lang::prelude::*;

pub const VAULT_SEED: &[u8] = b"vault";
pub const CUSTODY_SEED: &[u8] = b"custody";
pub const STAKE_INFO_SEED: &[u8] = b"stake_info";
pub const TOKEN_SEED: &[u8] = b"token";

pub const DEFAULT_LOCK_PERIOD_SLOTS: u64 = 250; // ~0.43s per slot on mainnet
pub const MIN_LOCK_PERIOD_SLOTS: u64 = 1;
pub const MAX_LOCK_PERIOD_SLOTS: u64 = 78_840_000; // ~365 days at 0.4s per slot

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct VaultState {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub custody_account: Pubkey,
    pub lock_period_slots: u64,
    pub is_initialized: bool,
    pub bump: u8,
    pub custody_bump: u8,
}

impl VaultState {
    pub const LEN: usize = 8 + 32 + 32 + 32 + 8 + 1 + 1 + 1;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StakeStatus {
    #[default]
    Unstaked,
    Staked,
}

/// Per-owner stake ledger entry.
///
/// The record outlives each stake/unstake cycle. `amount` and `stake_at_slot`
/// describe the most recent stake and are overwritten by the next one; only
/// `status` decides whether tokens are currently locked.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct StakeInfo {
    pub owner: Pubkey,
    pub stake_at_slot: u64,
    pub amount: u64,
    pub status: StakeStatus,
    pub unstaked_at_slot: u64,
    pub bump: u8,
}

impl StakeInfo {
    pub const LEN: usize = 8 + // discriminator
        32 + // owner
        8 +  // stake_at_slot
        8 +  // amount
        1 +  // status
        8 +  // unstaked_at_slot
        1; // bump

    pub fn is_staked(&self) -> bool {
        self.status == StakeStatus::Staked
    }

    /// A freshly created entry has no owner yet; after the first stake it is
    /// pinned to the staker.
    pub fn check_owner(&self, owner: &Pubkey) -> Result<()> {
        if self.owner != Pubkey::default() {
            require_keys_eq!(self.owner, *owner, CustomErrorCode::InvalidStakeOwner);
        }
        Ok(())
    }

    /// First slot at which the active stake may be released.
    pub fn unlock_slot(&self, lock_period_slots: u64) -> Result<u64> {
        self.stake_at_slot
            .checked_add(lock_period_slots)
            .ok_or_else(|| error!(CustomErrorCode::Overflow))
    }

    /// Slots elapsed since the stake was recorded.
    pub fn slots_staked(&self, current_slot: u64) -> Result<u64> {
        current_slot
            .checked_sub(self.stake_at_slot)
            .ok_or_else(|| error!(CustomErrorCode::SlotRegression))
    }

    /// Remaining slots until `unstake` is allowed, 0 once unlocked.
    pub fn slots_until_unlock(&self, lock_period_slots: u64, current_slot: u64) -> Result<u64> {
        require!(self.is_staked(), CustomErrorCode::NotStaked);
        Ok(self
            .unlock_slot(lock_period_slots)?
            .saturating_sub(current_slot))
    }

    pub(crate) fn record_stake(&mut self, owner: Pubkey, amount: u64, slot: u64) {
        self.owner = owner;
        self.amount = amount;
        self.stake_at_slot = slot;
        self.status = StakeStatus::Staked;
    }

    pub(crate) fn record_unstake(&mut self, slot: u64) {
        self.status = StakeStatus::Unstaked;
        self.unstaked_at_slot = slot;
    }
}

pub fn validate_lock_period(lock_period_slots: u64) -> Result<()> {
    require!(
        lock_period_slots >= MIN_LOCK_PERIOD_SLOTS,
        CustomErrorCode::InvalidLockPeriod
    );
    require!(
        lock_period_slots <= MAX_LOCK_PERIOD_SLOTS,
        CustomErrorCode::InvalidLockPeriod
    );
    Ok(())
}
