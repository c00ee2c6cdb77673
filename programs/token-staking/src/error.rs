use anchor_lang::prelude::*;

#[error_code]
pub enum CustomErrorCode {
    #[msg("The program has already been initialized")]
    AlreadyInitialized = 1,
    #[msg("Vault has not been initialized")]
    VaultNotInitialized = 2,
    #[msg("Invalid lock period")]
    InvalidLockPeriod = 3,
    #[msg("Invalid amount")]
    InvalidAmount = 4,
    #[msg("Insufficient funds")]
    InsufficientFunds = 5,
    #[msg("Tokens are already staked")]
    AlreadyStaked = 6,
    #[msg("Tokens not staked")]
    NotStaked = 7,
    #[msg("Lock period not elapsed")]
    LockPeriodNotElapsed = 8,

    #[msg("Stake entry belongs to a different owner")]
    InvalidStakeOwner = 9,
    #[msg("Invalid mint provided")]
    InvalidMint = 10,
    #[msg("Invalid custody account")]
    InvalidCustodyAccount = 11,
    #[msg("Invalid token owner")]
    InvalidTokenOwner = 12,
    #[msg("Token account is not part of this transfer")]
    UnknownTokenAccount = 13,
    #[msg("Owner identity must be 32 bytes")]
    InvalidOwnerIdentity = 14,
    #[msg("Current slot is earlier than the recorded stake slot")]
    SlotRegression = 15,
    #[msg("Arithmetic overflow")]
    Overflow = 16,

    #[msg("ProgramData account did not match expected PDA.")]
    InvalidProgramData = 17,
    #[msg("Program has no upgrade authority (set to None).")]
    NoUpgradeAuthority = 18,
    #[msg("Signer is not the upgrade authority.")]
    InvalidUpgradeAuthority = 19,
}
