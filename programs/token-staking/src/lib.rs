pub mod account_structs;
/// # Token Staking - Slot-Locked Staking System
///
/// ## Business Process Flow
///
/// 1. Initial Setup:
///    - The program upgrade authority initializes the program once with the
///      stakeable mint and a lock period measured in slots
///    - A custody token account controlled by the vault PDA is created
///
/// 2. User Staking Flow:
///    - User stakes an amount of tokens from their own token account
///    - Tokens move into a per-user stake token account controlled by the vault PDA
///    - The stake ledger entry records the amount and the slot it was staked at
///
/// 3. Withdrawal Flow:
///    a. Waiting Period:
///       - Tokens stay locked until `lock_period_slots` slots have passed
///       - The remaining slots can be queried with `unlock_status`
///
///    b. Unstake:
///       - Once the lock period has elapsed the stake token account is emptied
///         back into the user's token account
///       - The ledger entry is kept and flipped back to unstaked, ready for reuse
///
/// Every account is located by PDA seeds, and only the program can sign for
/// the token accounts that hold staked funds. Each instruction either
/// commits all of its state changes and its token transfer, or none of them.
pub mod clock;
pub mod custody;
pub mod error;
pub mod events;
pub mod guard;
pub mod pda;
pub mod processor;
pub mod staking;
pub mod state;


use account_structs::*;
use anchor_lang::prelude::*;

declare_id!("Dthxpk9KWQ2BDGLhV6G1Seq4dUbGNiDZ5omvgmNMTi4p");

#[program]
pub mod token_staking {
    use super::*;

    /// Creates the vault singleton and its custody token account:
    /// - lock_period_slots: slots a stake stays locked (see DEFAULT_LOCK_PERIOD_SLOTS)
    /// Only the program upgrade authority may call it, and only once; any later
    /// call fails with AlreadyInitialized.
    pub fn initialize(ctx: Context<Initialize>, lock_period_slots: u64) -> Result<()> {
        processor::initialize(ctx, lock_period_slots)
    }

    /// Locks `amount` tokens (smallest units) from the signer's token account
    /// into their stake token account and records the current slot.
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        processor::stake(ctx, amount)
    }

    /// Returns everything held in the signer's stake token account once the
    /// lock period has elapsed.
    pub fn unstake(ctx: Context<Unstake>) -> Result<()> {
        processor::unstake(ctx)
    }

    /// Slots left before `owner` may unstake, 0 once the lock period has elapsed.
    /// Returns value via return_data for efficient CPI access
    pub fn unlock_status(ctx: Context<UnlockStatus>, owner: Pubkey) -> Result<u64> {
        processor::unlock_status(ctx, owner)
    }
}
