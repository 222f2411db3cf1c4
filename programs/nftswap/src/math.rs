//! Checked arithmetic helpers
//!
//! Every pricing computation in the program goes through these wrappers.
//! Overflow is fatal to the instruction, never saturated or wrapped; the
//! failing operands are logged before the error is returned.

use {
    crate::error::AmmError,
    anchor_lang::prelude::*,
    std::fmt::Display,
};

pub fn checked_add<T>(arg1: T, arg2: T) -> Result<T>
where
    T: num_traits::CheckedAdd + Display,
{
    if let Some(res) = arg1.checked_add(&arg2) {
        Ok(res)
    } else {
        msg!("Error: overflow in {} + {}", arg1, arg2);
        err!(AmmError::MathOverflow)
    }
}

pub fn checked_sub<T>(arg1: T, arg2: T) -> Result<T>
where
    T: num_traits::CheckedSub + Display,
{
    if let Some(res) = arg1.checked_sub(&arg2) {
        Ok(res)
    } else {
        msg!("Error: overflow in {} - {}", arg1, arg2);
        err!(AmmError::MathOverflow)
    }
}

pub fn checked_mul<T>(arg1: T, arg2: T) -> Result<T>
where
    T: num_traits::CheckedMul + Display,
{
    if let Some(res) = arg1.checked_mul(&arg2) {
        Ok(res)
    } else {
        msg!("Error: overflow in {} * {}", arg1, arg2);
        err!(AmmError::MathOverflow)
    }
}

pub fn checked_div<T>(arg1: T, arg2: T) -> Result<T>
where
    T: num_traits::CheckedDiv + Display,
{
    if let Some(res) = arg1.checked_div(&arg2) {
        Ok(res)
    } else {
        msg!("Error: overflow in {} / {}", arg1, arg2);
        err!(AmmError::MathOverflow)
    }
}

/// Division rounding toward positive infinity.
pub fn checked_ceil_div<T>(arg1: T, arg2: T) -> Result<T>
where
    T: num_traits::PrimInt + num_traits::CheckedAdd + Display,
{
    if arg2 == T::zero() {
        msg!("Error: division by zero in {} / {}", arg1, arg2);
        return err!(AmmError::MathOverflow);
    }
    let quotient = arg1 / arg2;
    if quotient * arg2 == arg1 {
        Ok(quotient)
    } else {
        checked_add(quotient, T::one())
    }
}

pub fn checked_as_u64<T>(arg: T) -> Result<u64>
where
    T: num_traits::ToPrimitive + Display + Copy,
{
    if let Some(res) = arg.to_u64() {
        Ok(res)
    } else {
        msg!("Error: overflow converting {} to u64", arg);
        err!(AmmError::MathOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_overflow_is_an_error() {
        assert!(checked_add(u64::MAX, 1u64).is_err());
        assert_eq!(checked_add(2u64, 3u64).unwrap(), 5);
    }

    #[test]
    fn sub_below_zero_is_an_error() {
        assert!(checked_sub(1u64, 2u64).is_err());
        assert_eq!(checked_sub(5u128, 3u128).unwrap(), 2);
    }

    #[test]
    fn ceil_div_rounds_up() {
        assert_eq!(checked_ceil_div(10u128, 4u128).unwrap(), 3);
        assert_eq!(checked_ceil_div(8u128, 4u128).unwrap(), 2);
        assert_eq!(checked_ceil_div(0u128, 7u128).unwrap(), 0);
        assert!(checked_ceil_div(1u128, 0u128).is_err());
    }

    #[test]
    fn narrowing_checks_range() {
        assert!(checked_as_u64(u128::from(u64::MAX) + 1).is_err());
        assert_eq!(checked_as_u64(42u128).unwrap(), 42);
    }
}
