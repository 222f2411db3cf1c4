//! Sell one NFT into a pair
//!
//! Permissionless. The NFT must prove verified membership of the pair's
//! collection. The trader's proceeds, the platform fee, and the pair fee all
//! come out of the quote vault; their sum is exactly the curve principal, so
//! no fee can move without the principal moving in the same transaction.

use {
    crate::{
        collection,
        error::AmmError,
        state::{NftReceipt, Pair, PairAuthority},
    },
    anchor_lang::prelude::*,
    anchor_spl::{
        associated_token::AssociatedToken,
        metadata::{mpl_token_metadata, MetadataAccount},
        token::{Mint, Token, TokenAccount},
    },
};

#[derive(Accounts)]
pub struct SellNft<'info> {
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

    #[account(
        seeds = [
            b"metadata",
            mpl_token_metadata::ID.as_ref(),
            nft_mint.key().as_ref(),
        ],
        seeds::program = mpl_token_metadata::ID,
        bump,
    )]
    pub nft_metadata: Box<Account<'info, MetadataAccount>>,

    #[account(
        mut,
        constraint = user_nft_account.owner == payer.key() @ AmmError::InvalidOwner,
        constraint = user_nft_account.mint == nft_mint.key() @ AmmError::InvalidMint,
        constraint = user_nft_account.amount == 1 @ AmmError::InsufficientBalance,
    )]
    pub user_nft_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = payer,
        token::mint = nft_mint,
        token::authority = program_as_signer,
        seeds = [Pair::NFT_VAULT_SEED, pair.key().as_ref(), nft_mint.key().as_ref()],
        bump,
    )]
    pub nft_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = payer,
        space = NftReceipt::LEN,
        seeds = [NftReceipt::SEED, pair.key().as_ref(), nft_mint.key().as_ref()],
        bump,
    )]
    pub receipt: Box<Account<'info, NftReceipt>>,

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
        init_if_needed,
        payer = payer,
        associated_token::mint = quote_mint,
        associated_token::authority = payer,
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
pub struct SellNftParams {
    /// Least proceeds the trader accepts, after fees.
    pub min_proceeds: u64,
}

pub fn sell_nft(ctx: Context<SellNft>, params: &SellNftParams) -> Result<()> {
    let signer_bump = ctx.bumps.program_as_signer;

    msg!("Validate trade");
    collection::assert_verified_member(
        &ctx.accounts.nft_metadata,
        &ctx.accounts.pair.collection_mint,
    )?;

    msg!("Price trade");
    let quote = ctx
        .accounts
        .pair
        .sell_quote(1, ctx.accounts.pair_authority.fee_bps)?;
    require!(quote.total >= params.min_proceeds, AmmError::SlippageExceeded);
    require!(
        ctx.accounts.quote_vault.amount >= quote.principal,
        AmmError::InsufficientBalance
    );

    msg!("Settle trade");
    Pair::transfer_from_user(
        ctx.accounts.user_nft_account.to_account_info(),
        ctx.accounts.nft_vault.to_account_info(),
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        1,
    )?;

    let pair = &ctx.accounts.pair;
    pair.transfer_from_vault(
        ctx.accounts.quote_vault.to_account_info(),
        ctx.accounts.user_quote_account.to_account_info(),
        ctx.accounts.program_as_signer.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer_bump,
        quote.total,
    )?;
    pair.transfer_from_vault(
        ctx.accounts.quote_vault.to_account_info(),
        ctx.accounts.authority_quote_account.to_account_info(),
        ctx.accounts.program_as_signer.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer_bump,
        quote.protocol_fee,
    )?;
    pair.transfer_from_vault(
        ctx.accounts.quote_vault.to_account_info(),
        ctx.accounts.fee_vault.to_account_info(),
        ctx.accounts.program_as_signer.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer_bump,
        quote.pair_fee,
    )?;

    let receipt = &mut ctx.accounts.receipt;
    receipt.pair = ctx.accounts.pair.key();
    receipt.nft_mint = ctx.accounts.nft_mint.key();
    receipt.nft_vault = ctx.accounts.nft_vault.key();
    receipt.depositor = ctx.accounts.payer.key();
    receipt.bump = ctx.bumps.receipt;

    msg!("Commit trade");
    ctx.accounts.quote_vault.reload()?;
    let vault_balance = ctx.accounts.quote_vault.amount;
    ctx.accounts.pair.commit_sell(&quote, vault_balance)?;

    Ok(())
}
