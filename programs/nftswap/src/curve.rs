//! Bonding curve pricing
//!
//! Pure integer pricing for the two supported curves. A quote prices a run of
//! `quantity` units starting at the pair's current spot price and reports the
//! spot price the pair must adopt once the trade commits. Rounding always
//! favors the pair: unit prices round up on the way in (trader pays) and down
//! on the way out (trader is paid).

use {
    crate::{error::AmmError, math},
    anchor_lang::prelude::*,
};

/// Basis point denominator (10_000 = 100%).
pub const BPS_POWER: u128 = 10_000;

/// Largest exponential step accepted at pair creation, in basis points.
/// A step of 10_000 doubles the spot price on every unit.
pub const MAX_EXPONENTIAL_DELTA_BPS: u64 = 10_000;

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CurveKind {
    /// Spot price moves by an absolute `delta` per unit traded.
    Linear,
    /// Spot price moves by a `delta` basis-point ratio per unit traded.
    Exponential,
}

impl CurveKind {
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(CurveKind::Linear),
            1 => Ok(CurveKind::Exponential),
            _ => err!(AmmError::InvalidCurveKind),
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TradeDirection {
    /// Trader buys collectibles from the pair.
    Buy,
    /// Trader sells collectibles to the pair.
    Sell,
}

impl TradeDirection {
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(TradeDirection::Buy),
            1 => Ok(TradeDirection::Sell),
            _ => err!(AmmError::InvalidDirection),
        }
    }
}

/// Result of pricing a run of units along a curve, before fees.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CurveQuote {
    /// Sum of the unit prices crossed by the trade.
    pub total: u64,
    /// Spot price the pair adopts when the trade commits.
    pub new_spot_price: u64,
}

/// Price a buy of `quantity` units starting from `spot_price`.
///
/// Units are priced `spot, spot+step, ...`; the first unit always trades at
/// the current spot price. Exponential steps round up so the trader carries
/// the rounding remainder.
pub fn buy_quote(
    curve: CurveKind,
    spot_price: u64,
    delta: u64,
    quantity: u64,
) -> Result<CurveQuote> {
    require!(quantity > 0, AmmError::InvalidQuantity);

    let n = quantity as u128;
    let spot = spot_price as u128;

    match curve {
        CurveKind::Linear => {
            let d = delta as u128;
            // total = n * spot + d * n * (n - 1) / 2
            let ramp = math::checked_div(
                math::checked_mul(math::checked_mul(d, n)?, n - 1)?,
                2,
            )?;
            let total = math::checked_add(math::checked_mul(spot, n)?, ramp)?;
            let new_spot = math::checked_add(spot, math::checked_mul(d, n)?)?;
            Ok(CurveQuote {
                total: math::checked_as_u64(total)?,
                new_spot_price: math::checked_as_u64(new_spot)?,
            })
        }
        CurveKind::Exponential => {
            let step = math::checked_add(BPS_POWER, delta as u128)?;
            let mut unit = spot;
            let mut total: u128 = 0;
            for _ in 0..quantity {
                total = math::checked_add(total, unit)?;
                unit = math::checked_ceil_div(math::checked_mul(unit, step)?, BPS_POWER)?;
            }
            Ok(CurveQuote {
                total: math::checked_as_u64(total)?,
                new_spot_price: math::checked_as_u64(unit)?,
            })
        }
    }
}

/// Price a sell of `quantity` units starting from `spot_price`.
///
/// Linear sells are rejected with [`AmmError::CurveUnderflow`] when the run
/// would drive the spot price below zero; the price is never clamped.
/// Exponential steps round down so the trader carries the rounding remainder.
pub fn sell_quote(
    curve: CurveKind,
    spot_price: u64,
    delta: u64,
    quantity: u64,
) -> Result<CurveQuote> {
    require!(quantity > 0, AmmError::InvalidQuantity);

    let n = quantity as u128;
    let spot = spot_price as u128;

    match curve {
        CurveKind::Linear => {
            let d = delta as u128;
            let walk = math::checked_mul(d, n)?;
            if walk > spot {
                return err!(AmmError::CurveUnderflow);
            }
            // total = n * spot - d * n * (n - 1) / 2
            let ramp = math::checked_div(
                math::checked_mul(math::checked_mul(d, n)?, n - 1)?,
                2,
            )?;
            let total = math::checked_sub(math::checked_mul(spot, n)?, ramp)?;
            Ok(CurveQuote {
                total: math::checked_as_u64(total)?,
                new_spot_price: math::checked_as_u64(spot - walk)?,
            })
        }
        CurveKind::Exponential => {
            let step = math::checked_add(BPS_POWER, delta as u128)?;
            let mut unit = spot;
            let mut total: u128 = 0;
            for _ in 0..quantity {
                total = math::checked_add(total, unit)?;
                unit = math::checked_div(math::checked_mul(unit, BPS_POWER)?, step)?;
            }
            Ok(CurveQuote {
                total: math::checked_as_u64(total)?,
                new_spot_price: math::checked_as_u64(unit)?,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn flat_linear_buy_prices_at_spot() {
        let q = buy_quote(CurveKind::Linear, 2, 0, 1).unwrap();
        assert_eq!(q.total, 2);
        assert_eq!(q.new_spot_price, 2);
    }

    #[test]
    fn linear_buy_walks_the_ramp() {
        // units at 2, 3, 4
        let q = buy_quote(CurveKind::Linear, 2, 1, 3).unwrap();
        assert_eq!(q.total, 9);
        assert_eq!(q.new_spot_price, 5);
    }

    #[test]
    fn linear_sell_walks_down() {
        // units at 10, 8, 6
        let q = sell_quote(CurveKind::Linear, 10, 2, 3).unwrap();
        assert_eq!(q.total, 24);
        assert_eq!(q.new_spot_price, 4);
    }

    #[test]
    fn linear_sell_below_zero_is_rejected() {
        // second unit would be priced below zero
        assert!(sell_quote(CurveKind::Linear, 5, 3, 2).is_err());
        // run leaves the units non-negative but the new spot would be negative
        assert!(sell_quote(CurveKind::Linear, 5, 2, 3).is_err());
        // exact walk to zero is allowed
        let q = sell_quote(CurveKind::Linear, 6, 2, 3).unwrap();
        assert_eq!(q.new_spot_price, 0);
    }

    #[test]
    fn exponential_buy_rounds_up_per_unit() {
        // 10% step: units at 100, 110, 121
        let q = buy_quote(CurveKind::Exponential, 100, 1_000, 3).unwrap();
        assert_eq!(q.total, 331);
        assert_eq!(q.new_spot_price, 134); // ceil(121 * 1.1)

        // rounding on an odd spot: 101 -> ceil(111.1) = 112
        let q = buy_quote(CurveKind::Exponential, 101, 1_000, 2).unwrap();
        assert_eq!(q.total, 101 + 112);
    }

    #[test]
    fn exponential_sell_rounds_down_per_unit() {
        // 10% step down: units at 100, floor(90.9..) = 90, floor(81.8..) = 81
        let q = sell_quote(CurveKind::Exponential, 100, 1_000, 3).unwrap();
        assert_eq!(q.total, 271);
        assert_eq!(q.new_spot_price, 73); // floor(81 / 1.1)
    }

    #[test]
    fn zero_quantity_is_rejected() {
        assert!(buy_quote(CurveKind::Linear, 10, 1, 0).is_err());
        assert!(sell_quote(CurveKind::Exponential, 10, 1, 0).is_err());
    }

    #[test]
    fn buy_overflow_is_fatal() {
        assert!(buy_quote(CurveKind::Linear, u64::MAX, 1, 2).is_err());
        assert!(buy_quote(CurveKind::Exponential, u64::MAX, 10_000, 2).is_err());
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(CurveKind::from_code(2).is_err());
        assert!(TradeDirection::from_code(2).is_err());
        assert_eq!(CurveKind::from_code(1).unwrap(), CurveKind::Exponential);
    }

    proptest! {
        /// Buying n units then selling n units lands back on the original
        /// spot price for any linear curve.
        #[test]
        fn linear_round_trip_restores_spot(
            spot in 0u64..1_000_000_000,
            delta in 0u64..1_000_000,
            quantity in 1u64..50,
        ) {
            let up = buy_quote(CurveKind::Linear, spot, delta, quantity).unwrap();
            let down = sell_quote(CurveKind::Linear, up.new_spot_price, delta, quantity).unwrap();
            prop_assert_eq!(down.new_spot_price, spot);
        }

        /// A linear buy never charges less than quantity * spot, and a sell
        /// never pays more than quantity * spot.
        #[test]
        fn linear_totals_bracket_spot(
            spot in 0u64..1_000_000_000,
            delta in 0u64..1_000_000,
            quantity in 1u64..50,
        ) {
            let up = buy_quote(CurveKind::Linear, spot, delta, quantity).unwrap();
            prop_assert!(u128::from(up.total) >= u128::from(spot) * u128::from(quantity));

            let start = spot + delta * quantity; // tall enough to sell from
            let down = sell_quote(CurveKind::Linear, start, delta, quantity).unwrap();
            prop_assert!(u128::from(down.total) <= u128::from(start) * u128::from(quantity));
        }

        /// Exponential rounding favors the pair in both directions.
        #[test]
        fn exponential_totals_bracket_spot(
            spot in 0u64..1_000_000_000,
            delta in 0u64..=10_000,
            quantity in 1u64..50,
        ) {
            let up = buy_quote(CurveKind::Exponential, spot, delta, quantity).unwrap();
            prop_assert!(u128::from(up.total) >= u128::from(spot) * u128::from(quantity));

            let down = sell_quote(CurveKind::Exponential, spot, delta, quantity).unwrap();
            prop_assert!(u128::from(down.total) <= u128::from(spot) * u128::from(quantity));
        }

        /// Identical inputs always produce identical quotes.
        #[test]
        fn quotes_are_deterministic(
            spot in 0u64..1_000_000_000,
            delta in 0u64..=10_000,
            quantity in 1u64..50,
        ) {
            let a = buy_quote(CurveKind::Exponential, spot, delta, quantity).unwrap();
            let b = buy_quote(CurveKind::Exponential, spot, delta, quantity).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
