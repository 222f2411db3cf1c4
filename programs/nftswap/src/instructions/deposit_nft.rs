//! Move an NFT into a pair's custody (owner only)
//!
//! The NFT must prove membership of the pair's collection. A fresh PDA vault
//! takes custody under the program signer, and a receipt records the deposit
//! so the NFT can later be located and released.

use {
    crate::{
        collection,
        error::AmmError,
        math,
        state::{NftReceipt, Pair},
    },
    anchor_lang::prelude::*,
    anchor_spl::{
        metadata::{mpl_token_metadata, MetadataAccount},
        token::{Mint, Token, TokenAccount},
    },
};

#[derive(Accounts)]
pub struct DepositNft<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(mut, has_one = owner @ AmmError::InvalidOwner)]
    pub pair: Account<'info, Pair>,

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
        constraint = owner_nft_account.owner == owner.key() @ AmmError::InvalidOwner,
        constraint = owner_nft_account.mint == nft_mint.key() @ AmmError::InvalidMint,
        constraint = owner_nft_account.amount == 1 @ AmmError::InsufficientBalance,
    )]
    pub owner_nft_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = owner,
        token::mint = nft_mint,
        token::authority = program_as_signer,
        seeds = [Pair::NFT_VAULT_SEED, pair.key().as_ref(), nft_mint.key().as_ref()],
        bump,
    )]
    pub nft_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = owner,
        space = NftReceipt::LEN,
        seeds = [NftReceipt::SEED, pair.key().as_ref(), nft_mint.key().as_ref()],
        bump,
    )]
    pub receipt: Account<'info, NftReceipt>,

    /// CHECK: PDA used only as the vaults' spending authority
    #[account(seeds = [Pair::PROGRAM_SEED, Pair::SIGNER_SEED], bump)]
    pub program_as_signer: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn deposit_nft(ctx: Context<DepositNft>) -> Result<()> {
    require!(
        ctx.accounts.pair.kind.supports_buy(),
        AmmError::UnsupportedDirection
    );
    collection::assert_verified_member(
        &ctx.accounts.nft_metadata,
        &ctx.accounts.pair.collection_mint,
    )?;

    Pair::transfer_from_user(
        ctx.accounts.owner_nft_account.to_account_info(),
        ctx.accounts.nft_vault.to_account_info(),
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        1,
    )?;

    let receipt = &mut ctx.accounts.receipt;
    receipt.pair = ctx.accounts.pair.key();
    receipt.nft_mint = ctx.accounts.nft_mint.key();
    receipt.nft_vault = ctx.accounts.nft_vault.key();
    receipt.depositor = ctx.accounts.owner.key();
    receipt.bump = ctx.bumps.receipt;

    let pair = &mut ctx.accounts.pair;
    pair.nfts_held = math::checked_add(pair.nfts_held, 1)?;
    if !pair.is_active {
        pair.is_active = true;
    }

    Ok(())
}
