//! Close a pair (owner only)
//!
//! Only an emptied pair may close: every NFT withdrawn and both quote vaults
//! at zero. The vault token accounts are closed under the signer proxy and
//! all rent returns to the owner.

use {
    crate::{error::AmmError, state::Pair},
    anchor_lang::prelude::*,
    anchor_spl::token::{Token, TokenAccount},
};

#[derive(Accounts)]
pub struct ClosePair<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        close = owner,
        has_one = owner @ AmmError::InvalidOwner,
        has_one = quote_vault @ AmmError::InvalidQuoteTokenVault,
        has_one = fee_vault @ AmmError::InvalidFeeVault,
    )]
    pub pair: Account<'info, Pair>,

    #[account(
        mut,
        seeds = [Pair::QUOTE_VAULT_SEED, pair.key().as_ref()],
        bump,
    )]
    pub quote_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [Pair::QUOTE_VAULT_SEED, Pair::FEE_VAULT_SEED, pair.key().as_ref()],
        bump,
    )]
    pub fee_vault: Box<Account<'info, TokenAccount>>,

    /// CHECK: PDA used only as the vaults' spending authority
    #[account(seeds = [Pair::PROGRAM_SEED, Pair::SIGNER_SEED], bump)]
    pub program_as_signer: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn close_pair(ctx: Context<ClosePair>) -> Result<()> {
    let pair = &ctx.accounts.pair;
    require!(pair.nfts_held == 0, AmmError::StillHoldsNfts);
    require!(
        ctx.accounts.quote_vault.amount == 0 && ctx.accounts.fee_vault.amount == 0,
        AmmError::VaultNotEmpty
    );

    let signer_bump = ctx.bumps.program_as_signer;
    pair.close_vault(
        ctx.accounts.quote_vault.to_account_info(),
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.program_as_signer.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer_bump,
    )?;
    pair.close_vault(
        ctx.accounts.fee_vault.to_account_info(),
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.program_as_signer.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer_bump,
    )?;

    Ok(())
}
