//! Bonding-curve automated market maker for verified NFT collections.
//!
//! Each pair is one market between an NFT collection and a fungible quote
//! token. Prices walk a linear or exponential curve; custody lives in PDA
//! vaults controlled by a program signer proxy; every pair pays a platform
//! fee to its governing pair authority.

use anchor_lang::prelude::*;

pub mod collection;
pub mod curve;
pub mod error;
pub mod instructions;
pub mod math;
pub mod state;

use {instructions::*, state::SwapQuote};

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "nftswap",
    project_url: "https://github.com/nftswap/nftswap",
    contacts: "email:security@nftswap.io",
    policy: "https://github.com/nftswap/nftswap/blob/main/SECURITY.md"
}

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod nftswap {
    use super::*;

    /// Create a protocol fee authority record.
    pub fn initialize_pair_authority(
        ctx: Context<InitializePairAuthority>,
        params: InitializePairAuthorityParams,
    ) -> Result<()> {
        instructions::initialize_pair_authority(ctx, &params)
    }

    /// Change the platform fee rate (current authority only).
    pub fn set_pair_authority_fee(
        ctx: Context<SetPairAuthorityFee>,
        params: SetPairAuthorityFeeParams,
    ) -> Result<()> {
        instructions::set_pair_authority_fee(ctx, &params)
    }

    /// Propose a new authority; takes effect on accept.
    pub fn transfer_pair_authority(ctx: Context<TransferPairAuthority>) -> Result<()> {
        instructions::transfer_pair_authority(ctx)
    }

    /// Complete a proposed authority transfer (pending authority only).
    pub fn accept_pair_authority(ctx: Context<AcceptPairAuthority>) -> Result<()> {
        instructions::accept_pair_authority(ctx)
    }

    /// Create a pair and its custody vaults.
    pub fn initialize_pair(
        ctx: Context<InitializePair>,
        params: InitializePairParams,
    ) -> Result<()> {
        instructions::initialize_pair(ctx, &params)
    }

    /// Fund the pair's quote vault (owner only).
    pub fn deposit_quote(ctx: Context<DepositQuote>, params: DepositQuoteParams) -> Result<()> {
        instructions::deposit_quote(ctx, &params)
    }

    /// Move an NFT of the pair's collection into custody (owner only).
    pub fn deposit_nft(ctx: Context<DepositNft>) -> Result<()> {
        instructions::deposit_nft(ctx)
    }

    /// Buy one NFT out of the pair at the curve price plus fees.
    pub fn buy_nft(ctx: Context<BuyNft>, params: BuyNftParams) -> Result<()> {
        instructions::buy_nft(ctx, &params)
    }

    /// Sell one NFT to the pair at the curve price minus fees.
    pub fn sell_nft(ctx: Context<SellNft>, params: SellNftParams) -> Result<()> {
        instructions::sell_nft(ctx, &params)
    }

    /// Price an n-unit trade without executing it.
    pub fn get_swap_quote(
        ctx: Context<GetSwapQuote>,
        params: GetSwapQuoteParams,
    ) -> Result<SwapQuote> {
        instructions::get_swap_quote(ctx, &params)
    }

    /// Change the curve step (owner only).
    pub fn set_delta(ctx: Context<SetDelta>, params: SetDeltaParams) -> Result<()> {
        instructions::set_delta(ctx, &params)
    }

    /// Change the pair fee (owner only, trade pairs).
    pub fn set_fee(ctx: Context<SetFee>, params: SetFeeParams) -> Result<()> {
        instructions::set_fee(ctx, &params)
    }

    /// Reprice the pair (owner only).
    pub fn set_spot_price(ctx: Context<SetSpotPrice>, params: SetSpotPriceParams) -> Result<()> {
        instructions::set_spot_price(ctx, &params)
    }

    /// Withdraw quote tokens from the pair vault (owner only).
    pub fn withdraw_quote(ctx: Context<WithdrawQuote>, params: WithdrawQuoteParams) -> Result<()> {
        instructions::withdraw_quote(ctx, &params)
    }

    /// Withdraw an NFT from custody (owner only).
    pub fn withdraw_nft(ctx: Context<WithdrawNft>) -> Result<()> {
        instructions::withdraw_nft(ctx)
    }

    /// Withdraw accumulated pair fees (owner only).
    pub fn withdraw_fees(ctx: Context<WithdrawFees>, params: WithdrawFeesParams) -> Result<()> {
        instructions::withdraw_fees(ctx, &params)
    }

    /// Close an emptied pair and reclaim all rent (owner only).
    pub fn close_pair(ctx: Context<ClosePair>) -> Result<()> {
        instructions::close_pair(ctx)
    }
}
