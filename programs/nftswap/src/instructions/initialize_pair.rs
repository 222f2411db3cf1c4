//! Create a pair and its custody vaults
//!
//! The pair itself is a fresh keypair identity; both quote vaults are PDAs of
//! the pair address so any client can recompute them offline. Their spending
//! authority is the program signer proxy, never a user key.

use {
    crate::{
        collection,
        curve::{self, CurveKind},
        error::AmmError,
        state::{Pair, PairAuthority, PairKind},
    },
    anchor_lang::prelude::*,
    anchor_spl::{
        metadata::{mpl_token_metadata, MetadataAccount},
        token::{Mint, Token, TokenAccount},
    },
};

#[derive(Accounts)]
pub struct InitializePair<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Governing fee authority the new pair registers under.
    pub pair_authority: Account<'info, PairAuthority>,

    #[account(init, payer = payer, space = Pair::LEN)]
    pub pair: Account<'info, Pair>,

    /// Mint of the collection parent NFT.
    pub collection_mint: Box<Account<'info, Mint>>,

    /// Metadata of the collection parent; must be a sized collection.
    #[account(
        seeds = [
            b"metadata",
            mpl_token_metadata::ID.as_ref(),
            collection_mint.key().as_ref(),
        ],
        seeds::program = mpl_token_metadata::ID,
        bump,
    )]
    pub collection_metadata: Box<Account<'info, MetadataAccount>>,

    /// Fungible token the pair settles in.
    pub quote_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = payer,
        token::mint = quote_mint,
        token::authority = program_as_signer,
        seeds = [Pair::QUOTE_VAULT_SEED, pair.key().as_ref()],
        bump,
    )]
    pub quote_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = payer,
        token::mint = quote_mint,
        token::authority = program_as_signer,
        seeds = [Pair::QUOTE_VAULT_SEED, Pair::FEE_VAULT_SEED, pair.key().as_ref()],
        bump,
    )]
    pub fee_vault: Box<Account<'info, TokenAccount>>,

    /// CHECK: PDA used only as the vaults' spending authority
    #[account(seeds = [Pair::PROGRAM_SEED, Pair::SIGNER_SEED], bump)]
    pub program_as_signer: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy)]
pub struct InitializePairParams {
    /// 0 = token pair, 1 = NFT pair, 2 = trade pair.
    pub kind: u8,
    /// 0 = linear, 1 = exponential.
    pub curve: u8,
    pub spot_price: u64,
    pub delta: u64,
    pub fee_bps: u16,
    pub is_private: bool,
}

pub fn initialize_pair(ctx: Context<InitializePair>, params: &InitializePairParams) -> Result<()> {
    let kind = PairKind::from_code(params.kind)?;
    let curve_kind = CurveKind::from_code(params.curve)?;

    require!(params.fee_bps <= Pair::MAX_FEE_BPS, AmmError::InvalidFeeRate);
    require!(
        params.fee_bps == 0 || kind == PairKind::Trade,
        AmmError::FeeOnNonTradePair
    );
    if curve_kind == CurveKind::Exponential {
        require!(
            params.delta <= curve::MAX_EXPONENTIAL_DELTA_BPS,
            AmmError::InvalidDelta
        );
    }

    collection::assert_sized_collection(&ctx.accounts.collection_metadata)?;

    let pair = &mut ctx.accounts.pair;
    pair.owner = ctx.accounts.payer.key();
    pair.pair_authority = ctx.accounts.pair_authority.key();
    pair.collection_mint = ctx.accounts.collection_mint.key();
    pair.quote_mint = ctx.accounts.quote_mint.key();
    pair.quote_vault = ctx.accounts.quote_vault.key();
    pair.fee_vault = ctx.accounts.fee_vault.key();
    pair.kind = kind;
    pair.curve = curve_kind;
    pair.delta = params.delta;
    pair.fee_bps = params.fee_bps;
    pair.spot_price = params.spot_price;
    pair.is_private = params.is_private;
    pair.trade_count = 0;
    pair.nfts_held = 0;
    pair.is_active = false;

    msg!("Pair initialized for collection {}", pair.collection_mint);

    Ok(())
}
