//! Reprice a pair (owner only)

use {
    crate::{error::AmmError, state::Pair},
    anchor_lang::prelude::*,
};

#[derive(Accounts)]
pub struct SetSpotPrice<'info> {
    pub owner: Signer<'info>,

    #[account(mut, has_one = owner @ AmmError::InvalidOwner)]
    pub pair: Account<'info, Pair>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy)]
pub struct SetSpotPriceParams {
    pub new_spot_price: u64,
}

pub fn set_spot_price(ctx: Context<SetSpotPrice>, params: &SetSpotPriceParams) -> Result<()> {
    ctx.accounts.pair.spot_price = params.new_spot_price;

    Ok(())
}
