//! Change a pair's curve step (owner only)

use {
    crate::{
        curve::{self, CurveKind},
        error::AmmError,
        state::Pair,
    },
    anchor_lang::prelude::*,
};

#[derive(Accounts)]
pub struct SetDelta<'info> {
    pub owner: Signer<'info>,

    #[account(mut, has_one = owner @ AmmError::InvalidOwner)]
    pub pair: Account<'info, Pair>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy)]
pub struct SetDeltaParams {
    pub new_delta: u64,
}

pub fn set_delta(ctx: Context<SetDelta>, params: &SetDeltaParams) -> Result<()> {
    let pair = &mut ctx.accounts.pair;

    if pair.curve == CurveKind::Exponential {
        require!(
            params.new_delta <= curve::MAX_EXPONENTIAL_DELTA_BPS,
            AmmError::InvalidDelta
        );
    }

    pair.delta = params.new_delta;

    Ok(())
}
