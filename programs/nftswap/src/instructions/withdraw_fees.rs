//! Withdraw accumulated pair fees (owner only)

use {
    crate::{error::AmmError, state::Pair},
    anchor_lang::prelude::*,
    anchor_spl::{
        associated_token::AssociatedToken,
        token::{Mint, Token, TokenAccount},
    },
};

#[derive(Accounts)]
pub struct WithdrawFees<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ AmmError::InvalidOwner,
        has_one = quote_mint @ AmmError::InvalidQuoteTokenMint,
        has_one = fee_vault @ AmmError::InvalidFeeVault,
    )]
    pub pair: Account<'info, Pair>,

    pub quote_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [Pair::QUOTE_VAULT_SEED, Pair::FEE_VAULT_SEED, pair.key().as_ref()],
        bump,
    )]
    pub fee_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = quote_mint,
        associated_token::authority = owner,
    )]
    pub owner_quote_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: PDA used only as the vaults' spending authority
    #[account(seeds = [Pair::PROGRAM_SEED, Pair::SIGNER_SEED], bump)]
    pub program_as_signer: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy)]
pub struct WithdrawFeesParams {
    pub amount: u64,
}

pub fn withdraw_fees(ctx: Context<WithdrawFees>, params: &WithdrawFeesParams) -> Result<()> {
    require!(
        ctx.accounts.fee_vault.amount >= params.amount,
        AmmError::InsufficientBalance
    );

    ctx.accounts.pair.transfer_from_vault(
        ctx.accounts.fee_vault.to_account_info(),
        ctx.accounts.owner_quote_account.to_account_info(),
        ctx.accounts.program_as_signer.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        ctx.bumps.program_as_signer,
        params.amount,
    )?;

    Ok(())
}
