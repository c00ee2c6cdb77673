//! Stake lifecycle transitions.
//!
//! Every operation validates all of its preconditions before touching
//! custody, performs at most one transfer and only then writes the ledger
//! entry. A failing call therefore leaves the entry and every balance exactly
//! as it found them.

use crate::clock::SlotClock;
use crate::custody::TokenCustody;
use crate::error::CustomErrorCode;
use crate::guard::check_upgrade_authority;
use crate::state::{validate_lock_period, StakeInfo, VaultState};
use anchor_lang::prelude::*;

/// Source and destination token accounts of a custody movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub from: Pubkey,
    pub to: Pubkey,
}

/// Outcome of a successful unstake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Release {
    pub amount: u64,
    pub stake_at_slot: u64,
    pub released_at_slot: u64,
}

pub struct VaultSetup {
    pub authority: Pubkey,
    /// Upgrade authority recorded in the program's ProgramData account.
    pub upgrade_authority: Option<Pubkey>,
    pub mint: Pubkey,
    pub custody_account: Pubkey,
    pub lock_period_slots: u64,
    pub bump: u8,
    pub custody_bump: u8,
}

pub fn initialize_vault(vault: &mut VaultState, setup: VaultSetup) -> Result<()> {
    require!(!vault.is_initialized, CustomErrorCode::AlreadyInitialized);
    check_upgrade_authority(setup.upgrade_authority, &setup.authority)?;
    validate_lock_period(setup.lock_period_slots)?;

    vault.authority = setup.authority;
    vault.mint = setup.mint;
    vault.custody_account = setup.custody_account;
    vault.lock_period_slots = setup.lock_period_slots;
    vault.bump = setup.bump;
    vault.custody_bump = setup.custody_bump;
    vault.is_initialized = true;

    Ok(())
}

/// Locks `amount` tokens from `route.from` into the owner's stake account.
/// Returns the slot recorded as the start of the stake.
pub fn stake<C: TokenCustody, K: SlotClock>(
    entry: &mut StakeInfo,
    owner: Pubkey,
    amount: u64,
    route: Route,
    custody: &mut C,
    clock: &K,
) -> Result<u64> {
    require!(amount > 0, CustomErrorCode::InvalidAmount);
    entry.check_owner(&owner)?;
    require!(!entry.is_staked(), CustomErrorCode::AlreadyStaked);

    let balance = custody.balance_of(&route.from)?;
    msg!("Funding balance: {}, stake amount: {}", balance, amount);
    require!(balance >= amount, CustomErrorCode::InsufficientFunds);

    let slot = clock.current_slot();
    custody.transfer(&route.from, &route.to, amount)?;
    entry.record_stake(owner, amount, slot);

    Ok(slot)
}

/// Empties the stake account along `route` once the lock period has elapsed.
/// Anything that reached the stake account besides the recorded stake goes
/// back to the owner with it.
pub fn unstake<C: TokenCustody, K: SlotClock>(
    entry: &mut StakeInfo,
    owner: Pubkey,
    lock_period_slots: u64,
    route: Route,
    custody: &mut C,
    clock: &K,
) -> Result<Release> {
    require!(entry.is_staked(), CustomErrorCode::NotStaked);
    require_keys_eq!(entry.owner, owner, CustomErrorCode::InvalidStakeOwner);

    let now = clock.current_slot();
    let slots_passed = entry.slots_staked(now)?;
    msg!(
        "Slots passed: {}, lock period: {}",
        slots_passed,
        lock_period_slots
    );
    require!(
        slots_passed >= lock_period_slots,
        CustomErrorCode::LockPeriodNotElapsed
    );

    let held = custody.balance_of(&route.from)?;
    msg!("Stake account holds {}, recorded stake {}", held, entry.amount);
    require!(held >= entry.amount, CustomErrorCode::InsufficientFunds);

    custody.transfer(&route.from, &route.to, held)?;
    entry.record_unstake(now);

    Ok(Release {
        amount: held,
        stake_at_slot: entry.stake_at_slot,
        released_at_slot: now,
    })
}
