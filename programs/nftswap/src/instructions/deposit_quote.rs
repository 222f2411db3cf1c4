//! Fund a pair's quote vault (owner only)

use {
    crate::{error::AmmError, state::Pair},
    anchor_lang::prelude::*,
    anchor_spl::token::{Mint, Token, TokenAccount},
};

#[derive(Accounts)]
pub struct DepositQuote<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ AmmError::InvalidOwner,
        has_one = quote_mint @ AmmError::InvalidQuoteTokenMint,
        has_one = quote_vault @ AmmError::InvalidQuoteTokenVault,
    )]
    pub pair: Account<'info, Pair>,

    pub quote_mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [Pair::QUOTE_VAULT_SEED, pair.key().as_ref()],
        bump,
    )]
    pub quote_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = owner_quote_account.owner == owner.key() @ AmmError::InvalidOwner,
        constraint = owner_quote_account.mint == quote_mint.key() @ AmmError::InvalidQuoteTokenMint,
    )]
    pub owner_quote_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy)]
pub struct DepositQuoteParams {
    pub amount: u64,
}

pub fn deposit_quote(ctx: Context<DepositQuote>, params: &DepositQuoteParams) -> Result<()> {
    require!(
        ctx.accounts.pair.kind.supports_sell(),
        AmmError::UnsupportedDirection
    );
    require!(params.amount > 0, AmmError::InvalidAmount);

    Pair::transfer_from_user(
        ctx.accounts.owner_quote_account.to_account_info(),
        ctx.accounts.quote_vault.to_account_info(),
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        params.amount,
    )?;

    let pair = &mut ctx.accounts.pair;
    if !pair.is_active {
        pair.is_active = true;
    }

    Ok(())
}
