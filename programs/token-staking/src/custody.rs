use crate::error::CustomErrorCode;
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

/// Token balance bookkeeping the staking state machine relies on.
pub trait TokenCustody {
    fn balance_of(&self, account: &Pubkey) -> Result<u64>;

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()>;
}

/// One transfer leg through the SPL Token program.
///
/// `authority` signs the transfer. For program-owned accounts the PDA seeds
/// are supplied through `signer_seeds`; user-owned sources pass an empty slice
/// and rely on the transaction signature.
pub struct SplTokenCustody<'a, 'info> {
    token_program: &'a Program<'info, Token>,
    from: &'a Account<'info, TokenAccount>,
    to: &'a Account<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> SplTokenCustody<'a, 'info> {
    pub fn new(
        token_program: &'a Program<'info, Token>,
        from: &'a Account<'info, TokenAccount>,
        to: &'a Account<'info, TokenAccount>,
        authority: AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Self {
        Self {
            token_program,
            from,
            to,
            authority,
            signer_seeds,
        }
    }
}

impl<'a, 'info> TokenCustody for SplTokenCustody<'a, 'info> {
    fn balance_of(&self, account: &Pubkey) -> Result<u64> {
        if *account == self.from.key() {
            Ok(self.from.amount)
        } else if *account == self.to.key() {
            Ok(self.to.amount)
        } else {
            err!(CustomErrorCode::UnknownTokenAccount)
        }
    }

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*from, self.from.key(), CustomErrorCode::UnknownTokenAccount);
        require_keys_eq!(*to, self.to.key(), CustomErrorCode::UnknownTokenAccount);

        let cpi_accounts = Transfer {
            from: self.from.to_account_info(),
            to: self.to.to_account_info(),
            authority: self.authority.clone(),
        };
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                cpi_accounts,
                self.signer_seeds,
            ),
            amount,
        )
    }
}
