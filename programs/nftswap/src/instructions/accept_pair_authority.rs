//! Accept a proposed pair-authority transfer

use {
    crate::{error::AmmError, state::PairAuthority},
    anchor_lang::prelude::*,
};

#[derive(Accounts)]
pub struct AcceptPairAuthority<'info> {
    #[account(
        constraint = pending_authority.key() == pair_authority.pending_authority
            @ AmmError::InvalidPendingAuthority,
    )]
    pub pending_authority: Signer<'info>,

    #[account(mut)]
    pub pair_authority: Account<'info, PairAuthority>,
}

pub fn accept_pair_authority(ctx: Context<AcceptPairAuthority>) -> Result<()> {
    let pair_authority = &mut ctx.accounts.pair_authority;
    pair_authority.current_authority = ctx.accounts.pending_authority.key();
    pair_authority.pending_authority = Pubkey::default();

    Ok(())
}
