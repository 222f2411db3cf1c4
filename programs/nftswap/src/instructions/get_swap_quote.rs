//! Price an n-unit trade without executing it
//!
//! Read-only getter in the same shape as the settlement pricing: the returned
//! quote for quantity 1 is exactly what `buy_nft` / `sell_nft` would charge.
//! Clients use it to size slippage bounds before composing a transaction.

use {
    crate::{
        curve::TradeDirection,
        error::AmmError,
        state::{Pair, PairAuthority, SwapQuote},
    },
    anchor_lang::prelude::*,
};

#[derive(Accounts)]
pub struct GetSwapQuote<'info> {
    #[account(has_one = pair_authority @ AmmError::InvalidPairAuthority)]
    pub pair: Account<'info, Pair>,

    pub pair_authority: Account<'info, PairAuthority>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy)]
pub struct GetSwapQuoteParams {
    /// 0 = buy from the pair, 1 = sell to the pair.
    pub direction: u8,
    pub quantity: u64,
}

pub fn get_swap_quote(
    ctx: Context<GetSwapQuote>,
    params: &GetSwapQuoteParams,
) -> Result<SwapQuote> {
    let pair = &ctx.accounts.pair;
    let protocol_fee_bps = ctx.accounts.pair_authority.fee_bps;

    match TradeDirection::from_code(params.direction)? {
        TradeDirection::Buy => pair.buy_quote(params.quantity, protocol_fee_bps),
        TradeDirection::Sell => pair.sell_quote(params.quantity, protocol_fee_bps),
    }
}
