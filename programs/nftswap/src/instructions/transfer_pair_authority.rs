//! Propose a new pair authority
//!
//! First half of the two-phase transfer: the change takes effect only once
//! the proposed authority signs [`accept_pair_authority`].

use {
    crate::{error::AmmError, state::PairAuthority},
    anchor_lang::prelude::*,
};

#[derive(Accounts)]
pub struct TransferPairAuthority<'info> {
    #[account(
        constraint = current_authority.key() == pair_authority.current_authority
            @ AmmError::InvalidCurrentAuthority,
    )]
    pub current_authority: Signer<'info>,

    #[account(mut)]
    pub pair_authority: Account<'info, PairAuthority>,

    /// CHECK: recorded as the proposed authority; must sign the accept
    /// instruction before gaining any capability
    pub new_authority: UncheckedAccount<'info>,
}

pub fn transfer_pair_authority(ctx: Context<TransferPairAuthority>) -> Result<()> {
    let pair_authority = &mut ctx.accounts.pair_authority;
    pair_authority.pending_authority = ctx.accounts.new_authority.key();

    Ok(())
}
