//! Change the platform fee rate

use {
    crate::{error::AmmError, state::PairAuthority},
    anchor_lang::prelude::*,
};

#[derive(Accounts)]
pub struct SetPairAuthorityFee<'info> {
    #[account(
        constraint = current_authority.key() == pair_authority.current_authority
            @ AmmError::InvalidCurrentAuthority,
    )]
    pub current_authority: Signer<'info>,

    #[account(mut)]
    pub pair_authority: Account<'info, PairAuthority>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy)]
pub struct SetPairAuthorityFeeParams {
    pub new_fee_bps: u16,
}

pub fn set_pair_authority_fee(
    ctx: Context<SetPairAuthorityFee>,
    params: &SetPairAuthorityFeeParams,
) -> Result<()> {
    require!(
        params.new_fee_bps <= PairAuthority::MAX_FEE_BPS,
        AmmError::InvalidFeeRate
    );

    ctx.accounts.pair_authority.fee_bps = params.new_fee_bps;

    Ok(())
}
