//! Create the protocol-level fee and governance record

use {
    crate::{error::AmmError, state::PairAuthority},
    anchor_lang::prelude::*,
};

#[derive(Accounts)]
pub struct InitializePairAuthority<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Fresh authority-record identity funded by the payer.
    #[account(init, payer = payer, space = PairAuthority::LEN)]
    pub pair_authority: Account<'info, PairAuthority>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy)]
pub struct InitializePairAuthorityParams {
    /// Platform fee in basis points, applied to every swap under this
    /// authority.
    pub fee_bps: u16,
}

pub fn initialize_pair_authority(
    ctx: Context<InitializePairAuthority>,
    params: &InitializePairAuthorityParams,
) -> Result<()> {
    require!(
        params.fee_bps <= PairAuthority::MAX_FEE_BPS,
        AmmError::InvalidFeeRate
    );

    let pair_authority = &mut ctx.accounts.pair_authority;
    pair_authority.current_authority = ctx.accounts.payer.key();
    pair_authority.pending_authority = Pubkey::default();
    pair_authority.fee_bps = params.fee_bps;

    Ok(())
}
