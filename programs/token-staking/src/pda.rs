use crate::error::CustomErrorCode;
use crate::state::{CUSTODY_SEED, STAKE_INFO_SEED, TOKEN_SEED, VAULT_SEED};
use anchor_lang::prelude::*;

const OWNER_IDENTITY_LEN: usize = 32;

/// Derives the program address for `namespace`, optionally scoped to an
/// owner identity. Returns the address and its canonical bump.
pub fn derive_address(namespace: &[u8], owner: Option<&[u8]>) -> Result<(Pubkey, u8)> {
    match owner {
        Some(owner) => {
            require!(
                owner.len() == OWNER_IDENTITY_LEN,
                CustomErrorCode::InvalidOwnerIdentity
            );
            Ok(Pubkey::find_program_address(&[namespace, owner], &crate::ID))
        }
        None => Ok(Pubkey::find_program_address(&[namespace], &crate::ID)),
    }
}

pub fn vault_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED], &crate::ID)
}

pub fn custody_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CUSTODY_SEED], &crate::ID)
}

pub fn stake_info_address(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKE_INFO_SEED, owner.as_ref()], &crate::ID)
}

pub fn stake_token_address(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKEN_SEED, owner.as_ref()], &crate::ID)
}
