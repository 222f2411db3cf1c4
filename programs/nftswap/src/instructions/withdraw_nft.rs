//! Withdraw an NFT from a pair's custody (owner only)
//!
//! Closes the deposit receipt and the emptied NFT vault, returning their rent
//! to the original depositor.

use {
    crate::{
        error::AmmError,
        state::{NftReceipt, Pair},
    },
    anchor_lang::prelude::*,
    anchor_spl::{
        associated_token::AssociatedToken,
        token::{Mint, Token, TokenAccount},
    },
};

#[derive(Accounts)]
pub struct WithdrawNft<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(mut, has_one = owner @ AmmError::InvalidOwner)]
    pub pair: Account<'info, Pair>,

    pub nft_mint: Box<Account<'info, Mint>>,

    /// CHECK: receives the vault and receipt rent on close
    #[account(mut)]
    pub depositor: UncheckedAccount<'info>,

    #[account(
        mut,
        close = depositor,
        seeds = [NftReceipt::SEED, pair.key().as_ref(), nft_mint.key().as_ref()],
        bump = receipt.bump,
        has_one = nft_vault @ AmmError::InvalidNftVault,
        has_one = depositor @ AmmError::InvalidDepositor,
    )]
    pub receipt: Account<'info, NftReceipt>,

    #[account(
        mut,
        seeds = [Pair::NFT_VAULT_SEED, pair.key().as_ref(), nft_mint.key().as_ref()],
        bump,
        constraint = nft_vault.amount == 1 @ AmmError::InsufficientBalance,
    )]
    pub nft_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = nft_mint,
        associated_token::authority = owner,
    )]
    pub owner_nft_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: PDA used only as the vaults' spending authority
    #[account(seeds = [Pair::PROGRAM_SEED, Pair::SIGNER_SEED], bump)]
    pub program_as_signer: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn withdraw_nft(ctx: Context<WithdrawNft>) -> Result<()> {
    let signer_bump = ctx.bumps.program_as_signer;

    let pair = &ctx.accounts.pair;
    pair.transfer_from_vault(
        ctx.accounts.nft_vault.to_account_info(),
        ctx.accounts.owner_nft_account.to_account_info(),
        ctx.accounts.program_as_signer.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer_bump,
        1,
    )?;
    pair.close_vault(
        ctx.accounts.nft_vault.to_account_info(),
        ctx.accounts.depositor.to_account_info(),
        ctx.accounts.program_as_signer.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer_bump,
    )?;

    ctx.accounts.pair.note_nft_withdrawal()?;

    Ok(())
}
