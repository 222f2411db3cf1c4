//! Change a pair's fee rate (owner only)

use {
    crate::{
        error::AmmError,
        state::{Pair, PairKind},
    },
    anchor_lang::prelude::*,
};

#[derive(Accounts)]
pub struct SetFee<'info> {
    pub owner: Signer<'info>,

    #[account(mut, has_one = owner @ AmmError::InvalidOwner)]
    pub pair: Account<'info, Pair>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy)]
pub struct SetFeeParams {
    pub new_fee_bps: u16,
}

pub fn set_fee(ctx: Context<SetFee>, params: &SetFeeParams) -> Result<()> {
    let pair = &mut ctx.accounts.pair;

    require!(params.new_fee_bps <= Pair::MAX_FEE_BPS, AmmError::InvalidFeeRate);
    require!(
        params.new_fee_bps == 0 || pair.kind == PairKind::Trade,
        AmmError::FeeOnNonTradePair
    );

    pair.fee_bps = params.new_fee_bps;

    Ok(())
}
