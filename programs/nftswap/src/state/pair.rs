//! Pair state and swap quoting
//!
//! A pair is one market between a verified NFT collection and a fungible
//! quote token. It owns the bonding-curve parameters and references the two
//! custody vaults derived from its address. Quoting is pure (`&self`) and
//! happens strictly before settlement; committing a quote is the only
//! mutation a swap applies to the pair.

use {
    crate::{
        curve::{self, CurveKind, CurveQuote},
        error::AmmError,
        math,
    },
    anchor_lang::prelude::*,
    anchor_spl::token::{CloseAccount, Transfer},
};

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PairKind {
    /// Pair only buys NFTs, holding quote tokens as working capital.
    Token,
    /// Pair only sells NFTs, accumulating quote tokens as proceeds.
    Nft,
    /// Pair quotes both directions and may charge its own fee.
    Trade,
}

impl PairKind {
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(PairKind::Token),
            1 => Ok(PairKind::Nft),
            2 => Ok(PairKind::Trade),
            _ => err!(AmmError::InvalidPairKind),
        }
    }

    /// Can a trader buy an NFT out of this pair?
    pub fn supports_buy(&self) -> bool {
        matches!(self, PairKind::Nft | PairKind::Trade)
    }

    /// Can a trader sell an NFT into this pair?
    pub fn supports_sell(&self) -> bool {
        matches!(self, PairKind::Token | PairKind::Trade)
    }
}

/// Fully priced swap, fees included.
///
/// `principal` is the curve price and is exactly the amount that crosses the
/// pair's quote vault. On a buy the trader pays `total = principal + fees`;
/// on a sell the trader receives `total = principal - fees`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct SwapQuote {
    /// Curve price for the run of units.
    pub principal: u64,
    /// Platform fee routed to the pair authority.
    pub protocol_fee: u64,
    /// Pair fee routed to the pair's fee vault (trade pairs only).
    pub pair_fee: u64,
    /// Amount the trader pays (buy) or receives (sell).
    pub total: u64,
    /// Spot price the pair adopts when the trade commits.
    pub new_spot_price: u64,
}

#[account]
#[derive(Debug, InitSpace)]
pub struct Pair {
    /// Creator; sole holder of the administrative capabilities.
    pub owner: Pubkey,
    /// Governing [`PairAuthority`](crate::state::PairAuthority).
    pub pair_authority: Pubkey,
    /// Verified collection this pair trades against.
    pub collection_mint: Pubkey,
    /// Quote token used for settlement.
    pub quote_mint: Pubkey,
    /// Quote custody vault, PDA of `["quote", pair]`.
    pub quote_vault: Pubkey,
    /// Fee custody vault, PDA of `["quote", "fee", pair]`.
    pub fee_vault: Pubkey,
    pub kind: PairKind,
    pub curve: CurveKind,
    /// Curve step: absolute increment (linear) or basis points (exponential).
    pub delta: u64,
    /// Pair-level fee in basis points; zero unless `kind == Trade`.
    pub fee_bps: u16,
    /// Current reference price in quote minor units.
    pub spot_price: u64,
    /// Listing hint recorded at creation; swaps stay permissionless.
    pub is_private: bool,
    /// Number of swaps committed against this pair.
    pub trade_count: u64,
    /// NFTs currently in custody.
    pub nfts_held: u32,
    /// Whether the pair accepts new trades.
    pub is_active: bool,
}

impl Pair {
    pub const LEN: usize = 8 + Self::INIT_SPACE;
    pub const MAX_FEE_BPS: u16 = 10_000;

    pub const QUOTE_VAULT_SEED: &'static [u8] = b"quote";
    pub const FEE_VAULT_SEED: &'static [u8] = b"fee";
    pub const NFT_VAULT_SEED: &'static [u8] = b"nft_account";
    pub const PROGRAM_SEED: &'static [u8] = b"program";
    pub const SIGNER_SEED: &'static [u8] = b"signer";

    /// Quote vault address for a pair. Pure; clients recompute it offline.
    pub fn find_quote_vault(pair: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::QUOTE_VAULT_SEED, pair.as_ref()], &crate::ID)
    }

    /// Fee vault address for a pair.
    pub fn find_fee_vault(pair: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::QUOTE_VAULT_SEED, Self::FEE_VAULT_SEED, pair.as_ref()],
            &crate::ID,
        )
    }

    /// Custody vault address for one NFT held by a pair.
    pub fn find_nft_vault(pair: &Pubkey, nft_mint: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::NFT_VAULT_SEED, pair.as_ref(), nft_mint.as_ref()],
            &crate::ID,
        )
    }

    /// Program signer proxy that owns every vault.
    pub fn find_program_signer() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::PROGRAM_SEED, Self::SIGNER_SEED], &crate::ID)
    }

    /// Fee on `amount`, rounded up so the remainder never leaks to the
    /// trader.
    pub fn fee_amount(amount: u64, fee_bps: u16) -> Result<u64> {
        math::checked_as_u64(math::checked_ceil_div(
            math::checked_mul(amount as u128, fee_bps as u128)?,
            curve::BPS_POWER,
        )?)
    }

    fn check_fees(&self, protocol_fee_bps: u16) -> Result<()> {
        require!(
            protocol_fee_bps as u32 + self.fee_bps as u32 <= Self::MAX_FEE_BPS as u32,
            AmmError::FeeTooLarge
        );
        Ok(())
    }

    /// Price a buy of `quantity` NFTs out of this pair.
    pub fn buy_quote(&self, quantity: u64, protocol_fee_bps: u16) -> Result<SwapQuote> {
        require!(self.is_active, AmmError::PairInactive);
        require!(self.kind.supports_buy(), AmmError::UnsupportedDirection);
        self.check_fees(protocol_fee_bps)?;

        let CurveQuote {
            total: principal,
            new_spot_price,
        } = curve::buy_quote(self.curve, self.spot_price, self.delta, quantity)?;

        let protocol_fee = Self::fee_amount(principal, protocol_fee_bps)?;
        let pair_fee = Self::fee_amount(principal, self.fee_bps)?;
        let total = math::checked_add(math::checked_add(principal, protocol_fee)?, pair_fee)?;

        Ok(SwapQuote {
            principal,
            protocol_fee,
            pair_fee,
            total,
            new_spot_price,
        })
    }

    /// Price a sell of `quantity` NFTs into this pair.
    ///
    /// Fees come out of the trader's proceeds: the proceeds round down, the
    /// protocol fee rounds up, and the pair fee takes the exact remainder, so
    /// `total + protocol_fee + pair_fee == principal` for every fee
    /// combination.
    pub fn sell_quote(&self, quantity: u64, protocol_fee_bps: u16) -> Result<SwapQuote> {
        require!(self.is_active, AmmError::PairInactive);
        require!(self.kind.supports_sell(), AmmError::UnsupportedDirection);
        self.check_fees(protocol_fee_bps)?;

        let CurveQuote {
            total: principal,
            new_spot_price,
        } = curve::sell_quote(self.curve, self.spot_price, self.delta, quantity)?;

        let combined_bps = protocol_fee_bps as u32 + self.fee_bps as u32;
        let combined_fee = math::checked_as_u64(math::checked_ceil_div(
            math::checked_mul(principal as u128, combined_bps as u128)?,
            curve::BPS_POWER,
        )?)?;
        let protocol_fee = Self::fee_amount(principal, protocol_fee_bps)?;
        let pair_fee = math::checked_sub(combined_fee, protocol_fee)?;
        let total = math::checked_sub(principal, combined_fee)?;

        Ok(SwapQuote {
            principal,
            protocol_fee,
            pair_fee,
            total,
            new_spot_price,
        })
    }

    /// Apply a committed buy: the trade is irreversible past this point.
    pub fn commit_buy(&mut self, quote: &SwapQuote) -> Result<()> {
        self.spot_price = quote.new_spot_price;
        self.nfts_held = math::checked_sub(self.nfts_held, 1)?;
        self.trade_count = math::checked_add(self.trade_count, 1)?;
        if self.kind == PairKind::Nft && self.nfts_held == 0 {
            self.is_active = false;
        }
        Ok(())
    }

    /// Apply a committed sell. `quote_vault_balance` is the vault balance
    /// after settlement; a token pair that can no longer cover the next sell
    /// stops quoting.
    pub fn commit_sell(&mut self, quote: &SwapQuote, quote_vault_balance: u64) -> Result<()> {
        self.spot_price = quote.new_spot_price;
        self.nfts_held = math::checked_add(self.nfts_held, 1)?;
        self.trade_count = math::checked_add(self.trade_count, 1)?;
        self.refresh_quote_coverage(quote_vault_balance);
        Ok(())
    }

    /// Deactivate a token pair whose vault no longer covers its own bid.
    pub fn refresh_quote_coverage(&mut self, quote_vault_balance: u64) {
        if self.kind == PairKind::Token && quote_vault_balance < self.spot_price {
            self.is_active = false;
        }
    }

    /// Note an NFT leaving custody through an owner withdrawal.
    pub fn note_nft_withdrawal(&mut self) -> Result<()> {
        self.nfts_held = math::checked_sub(self.nfts_held, 1)?;
        if self.kind == PairKind::Nft && self.nfts_held == 0 {
            self.is_active = false;
        }
        Ok(())
    }

    /// Transfer out of a program-custodied vault, signed by the signer proxy.
    pub fn transfer_from_vault<'info>(
        &self,
        from: AccountInfo<'info>,
        to: AccountInfo<'info>,
        authority: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        signer_bump: u8,
        amount: u64,
    ) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let authority_seeds: &[&[&[u8]]] =
            &[&[Self::PROGRAM_SEED, Self::SIGNER_SEED, &[signer_bump]]];

        let context = CpiContext::new(token_program, Transfer { from, to, authority })
            .with_signer(authority_seeds);

        anchor_spl::token::transfer(context, amount)
    }

    /// Transfer from a user-owned account (the user signed the transaction).
    pub fn transfer_from_user<'info>(
        from: AccountInfo<'info>,
        to: AccountInfo<'info>,
        authority: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        amount: u64,
    ) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let context = CpiContext::new(token_program, Transfer { from, to, authority });
        anchor_spl::token::transfer(context, amount)
    }

    /// Close an emptied NFT vault, returning its rent to `destination`.
    pub fn close_vault<'info>(
        &self,
        vault: AccountInfo<'info>,
        destination: AccountInfo<'info>,
        authority: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        signer_bump: u8,
    ) -> Result<()> {
        let authority_seeds: &[&[&[u8]]] =
            &[&[Self::PROGRAM_SEED, Self::SIGNER_SEED, &[signer_bump]]];

        let context = CpiContext::new(
            token_program,
            CloseAccount {
                account: vault,
                destination,
                authority,
            },
        )
        .with_signer(authority_seeds);

        anchor_spl::token::close_account(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pair(kind: PairKind, curve: CurveKind, spot_price: u64, delta: u64, fee_bps: u16) -> Pair {
        Pair {
            owner: Pubkey::new_unique(),
            pair_authority: Pubkey::new_unique(),
            collection_mint: Pubkey::new_unique(),
            quote_mint: Pubkey::new_unique(),
            quote_vault: Pubkey::new_unique(),
            fee_vault: Pubkey::new_unique(),
            kind,
            curve,
            delta,
            fee_bps,
            spot_price,
            is_private: false,
            trade_count: 0,
            nfts_held: 1,
            is_active: true,
        }
    }

    #[test]
    fn flat_curve_buy_with_platform_fee() {
        // authority at 100 bps, pair fee zero: principal 2, fee rounds the
        // 0.02 up to one minor unit, spot does not move
        let p = pair(PairKind::Nft, CurveKind::Linear, 2, 0, 0);
        let q = p.buy_quote(1, 100).unwrap();
        assert_eq!(q.principal, 2);
        assert_eq!(q.protocol_fee, 1);
        assert_eq!(q.pair_fee, 0);
        assert_eq!(q.total, 3);
        assert_eq!(q.new_spot_price, 2);
    }

    #[test]
    fn linear_ramp_buy_moves_spot() {
        let p = pair(PairKind::Nft, CurveKind::Linear, 2, 1, 0);
        let q = p.buy_quote(3, 100).unwrap();
        assert_eq!(q.principal, 9); // 2 + 3 + 4
        assert_eq!(q.new_spot_price, 5);
    }

    #[test]
    fn trade_pair_charges_both_fees_on_buy() {
        let p = pair(PairKind::Trade, CurveKind::Linear, 1_000, 0, 250);
        let q = p.buy_quote(1, 100).unwrap();
        assert_eq!(q.protocol_fee, 10);
        assert_eq!(q.pair_fee, 25);
        assert_eq!(q.total, 1_035);
    }

    #[test]
    fn sell_fees_come_out_of_proceeds() {
        let mut p = pair(PairKind::Trade, CurveKind::Linear, 1_000, 0, 250);
        p.nfts_held = 0;
        let q = p.sell_quote(1, 100).unwrap();
        assert_eq!(q.principal, 1_000);
        assert_eq!(q.protocol_fee, 10);
        assert_eq!(q.pair_fee, 25);
        assert_eq!(q.total, 965);
        assert_eq!(q.total + q.protocol_fee + q.pair_fee, q.principal);
    }

    #[test]
    fn inactive_pair_does_not_quote() {
        let mut p = pair(PairKind::Trade, CurveKind::Linear, 10, 1, 0);
        p.is_active = false;
        assert!(p.buy_quote(1, 0).is_err());
        assert!(p.sell_quote(1, 0).is_err());
    }

    #[test]
    fn direction_must_match_pair_kind() {
        let token_side = pair(PairKind::Token, CurveKind::Linear, 10, 1, 0);
        assert!(token_side.buy_quote(1, 0).is_err());
        assert!(token_side.sell_quote(1, 0).is_ok());

        let nft_side = pair(PairKind::Nft, CurveKind::Linear, 10, 1, 0);
        assert!(nft_side.buy_quote(1, 0).is_ok());
        assert!(nft_side.sell_quote(1, 0).is_err());
    }

    #[test]
    fn combined_fees_above_full_price_are_rejected() {
        let p = pair(PairKind::Trade, CurveKind::Linear, 10, 0, 5_000);
        assert!(p.buy_quote(1, 5_001).is_err());
        assert!(p.sell_quote(1, 5_001).is_err());
        assert!(p.buy_quote(1, 5_000).is_ok());
    }

    #[test]
    fn commit_buy_updates_inventory_and_deactivates_empty_nft_pair() {
        let mut p = pair(PairKind::Nft, CurveKind::Linear, 2, 1, 0);
        let q = p.buy_quote(1, 0).unwrap();
        p.commit_buy(&q).unwrap();
        assert_eq!(p.spot_price, 3);
        assert_eq!(p.nfts_held, 0);
        assert_eq!(p.trade_count, 1);
        assert!(!p.is_active);
    }

    #[test]
    fn commit_sell_deactivates_uncovered_token_pair() {
        let mut p = pair(PairKind::Token, CurveKind::Linear, 10, 2, 0);
        p.nfts_held = 0;
        let q = p.sell_quote(1, 0).unwrap();
        // vault still covers the next bid of 8
        p.commit_sell(&q, 9).unwrap();
        assert_eq!(p.spot_price, 8);
        assert!(p.is_active);

        let q = p.sell_quote(1, 0).unwrap();
        // vault can no longer cover the next bid of 6
        p.commit_sell(&q, 1).unwrap();
        assert!(!p.is_active);
    }

    #[test]
    fn withdrawal_of_last_nft_deactivates_nft_pair() {
        let mut p = pair(PairKind::Nft, CurveKind::Linear, 10, 1, 0);
        p.note_nft_withdrawal().unwrap();
        assert_eq!(p.nfts_held, 0);
        assert!(!p.is_active);
    }

    #[test]
    fn vault_derivations_are_pure() {
        let key = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        assert_eq!(Pair::find_quote_vault(&key), Pair::find_quote_vault(&key));
        assert_eq!(Pair::find_fee_vault(&key), Pair::find_fee_vault(&key));
        assert_eq!(
            Pair::find_nft_vault(&key, &mint),
            Pair::find_nft_vault(&key, &mint)
        );
        assert_eq!(Pair::find_program_signer(), Pair::find_program_signer());

        let other = Pubkey::new_unique();
        assert_ne!(
            Pair::find_quote_vault(&key).0,
            Pair::find_quote_vault(&other).0
        );
        assert_ne!(Pair::find_quote_vault(&key).0, Pair::find_fee_vault(&key).0);
    }

    proptest! {
        /// Fees never exceed the gross curve price and the vault-crossing
        /// amount is exactly the principal, for every fee combination.
        #[test]
        fn fee_split_is_exact(
            spot in 0u64..1_000_000_000,
            protocol_bps in 0u16..=10_000,
            pair_bps in 0u16..=10_000,
        ) {
            prop_assume!(protocol_bps as u32 + pair_bps as u32 <= 10_000);
            let mut p = pair(PairKind::Trade, CurveKind::Linear, spot, 0, pair_bps);
            p.nfts_held = 0;

            let sell = p.sell_quote(1, protocol_bps).unwrap();
            prop_assert!(sell.protocol_fee + sell.pair_fee <= sell.principal);
            prop_assert_eq!(sell.total + sell.protocol_fee + sell.pair_fee, sell.principal);

            let buy = p.buy_quote(1, protocol_bps).unwrap();
            prop_assert_eq!(buy.total, buy.principal + buy.protocol_fee + buy.pair_fee);
        }

        /// A linear buy-then-sell round trip restores the spot price, and
        /// each crossing charges its own fee on its own principal only.
        #[test]
        fn linear_round_trip_restores_spot(
            spot in 0u64..1_000_000_000,
            delta in 0u64..1_000_000,
            protocol_bps in 0u16..=1_000,
        ) {
            let mut p = pair(PairKind::Trade, CurveKind::Linear, spot, delta, 0);
            p.nfts_held = 2;

            let buy = p.buy_quote(1, protocol_bps).unwrap();
            p.commit_buy(&buy).unwrap();
            let sell = p.sell_quote(1, protocol_bps).unwrap();
            p.commit_sell(&sell, u64::MAX).unwrap();

            prop_assert_eq!(p.spot_price, spot);
            prop_assert_eq!(buy.protocol_fee, Pair::fee_amount(buy.principal, protocol_bps).unwrap());
            prop_assert_eq!(sell.protocol_fee, Pair::fee_amount(sell.principal, protocol_bps).unwrap());
        }
    }
}
