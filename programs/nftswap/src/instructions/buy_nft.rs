//! Buy one NFT out of a pair
//!
//! Permissionless. The trade runs validate -> price -> settle -> commit; a
//! failure at any point before commit aborts the transaction with every
//! balance untouched. The trader pays the curve principal into the quote
//! vault, the platform fee to the pair authority, and the pair fee (trade
//! pairs) into the fee vault, then receives the NFT under the program
//! signer's authority.

use {
    crate::{
        error::AmmError,
        state::{NftReceipt, Pair, PairAuthority},
    },
    anchor_lang::prelude::*,
    anchor_spl::{
        associated_token::AssociatedToken,
        token::{Mint, Token, TokenAccount},
    },
};

#[derive(Accounts)]
pub struct BuyNft<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        has_one = pair_authority @ AmmError::InvalidPairAuthority,
        has_one = quote_mint @ AmmError::InvalidQuoteTokenMint,
        has_one = quote_vault @ AmmError::InvalidQuoteTokenVault,
        has_one = fee_vault @ AmmError::InvalidFeeVault,
    )]
    pub pair: Box<Account<'info, Pair>>,

    pub pair_authority: Box<Account<'info, PairAuthority>>,

    /// CHECK: only the owner of the platform fee destination account
    #[account(
        constraint = current_authority.key() == pair_authority.current_authority
            @ AmmError::InvalidCurrentAuthority,
    )]
    pub current_authority: UncheckedAccount<'info>,

    /// Platform fee destination.
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = quote_mint,
        associated_token::authority = current_authority,
    )]
    pub authority_quote_account: Box<Account<'info, TokenAccount>>,

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
    pub receipt: Box<Account<'info, NftReceipt>>,

    #[account(
        mut,
        seeds = [Pair::NFT_VAULT_SEED, pair.key().as_ref(), nft_mint.key().as_ref()],
        bump,
        constraint = nft_vault.amount == 1 @ AmmError::InsufficientBalance,
    )]
    pub nft_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = nft_mint,
        associated_token::authority = payer,
    )]
    pub user_nft_account: Box<Account<'info, TokenAccount>>,

    pub quote_mint: Box<Account<'info, Mint>>,

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

    #[account(
        mut,
        constraint = user_quote_account.owner == payer.key() @ AmmError::InvalidOwner,
        constraint = user_quote_account.mint == quote_mint.key() @ AmmError::InvalidQuoteTokenMint,
    )]
    pub user_quote_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: PDA used only as the vaults' spending authority
    #[account(seeds = [Pair::PROGRAM_SEED, Pair::SIGNER_SEED], bump)]
    pub program_as_signer: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy)]
pub struct BuyNftParams {
    /// Worst total the trader accepts, fees included.
    pub max_price: u64,
}

pub fn buy_nft(ctx: Context<BuyNft>, params: &BuyNftParams) -> Result<()> {
    let signer_bump = ctx.bumps.program_as_signer;

    msg!("Price trade");
    let quote = ctx
        .accounts
        .pair
        .buy_quote(1, ctx.accounts.pair_authority.fee_bps)?;
    require!(quote.total <= params.max_price, AmmError::SlippageExceeded);

    msg!("Settle trade");
    Pair::transfer_from_user(
        ctx.accounts.user_quote_account.to_account_info(),
        ctx.accounts.quote_vault.to_account_info(),
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        quote.principal,
    )?;
    Pair::transfer_from_user(
        ctx.accounts.user_quote_account.to_account_info(),
        ctx.accounts.authority_quote_account.to_account_info(),
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        quote.protocol_fee,
    )?;
    Pair::transfer_from_user(
        ctx.accounts.user_quote_account.to_account_info(),
        ctx.accounts.fee_vault.to_account_info(),
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        quote.pair_fee,
    )?;

    let pair = &ctx.accounts.pair;
    pair.transfer_from_vault(
        ctx.accounts.nft_vault.to_account_info(),
        ctx.accounts.user_nft_account.to_account_info(),
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

    msg!("Commit trade");
    ctx.accounts.pair.commit_buy(&quote)?;

    Ok(())
}
