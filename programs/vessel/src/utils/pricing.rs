use anchor_lang::prelude::*;

use crate::constants::{ONE, STABLE_DECIMALS};
use crate::utils::math_utils::{mul_div, pow10, Rounding};

#[error_code]
pub enum PricingErrorCode {
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Oracle price is zero")]
    InvalidPrice,
    #[msg("Result does not fit in u64")]
    ResultOverflow,
}

/// Converts a collateral amount (base units) into stable token value (base units).
///
/// `price` is the value of one whole collateral unit denominated in whole stable
/// tokens, with 1e18 fixed-point precision:
///
/// `value = amount * price * 10^stable_decimals / (1e18 * 10^collateral_decimals)`
///
/// # Arguments
/// * `amount` - Collateral amount in base units
/// * `price` - Oracle price with 1e18 precision
/// * `collateral_decimals` - Decimal places of the collateral mint
/// * `rounding` - Rounding direction for the final division
pub fn value_of(
    amount: u64,
    price: u128,
    collateral_decimals: u8,
    rounding: Rounding,
) -> Result<u64> {
    require!(price > 0, PricingErrorCode::InvalidPrice);

    let mut numerator = (amount as u128)
        .checked_mul(price)
        .ok_or(PricingErrorCode::MathOverflow)?;
    let mut denominator = ONE;

    if STABLE_DECIMALS >= collateral_decimals {
        let scale = pow10(STABLE_DECIMALS - collateral_decimals)
            .ok_or(PricingErrorCode::MathOverflow)?;
        numerator = numerator
            .checked_mul(scale)
            .ok_or(PricingErrorCode::MathOverflow)?;
    } else {
        let scale = pow10(collateral_decimals - STABLE_DECIMALS)
            .ok_or(PricingErrorCode::MathOverflow)?;
        denominator = denominator
            .checked_mul(scale)
            .ok_or(PricingErrorCode::MathOverflow)?;
    }

    let value = mul_div(numerator, 1, denominator, rounding)
        .ok_or(PricingErrorCode::MathOverflow)?;
    u64::try_from(value).map_err(|_| PricingErrorCode::ResultOverflow.into())
}

/// Converts a stable token value (base units) into a collateral amount (base units).
///
/// Inverse of [`value_of`]:
///
/// `amount = value * 1e18 * 10^collateral_decimals / (price * 10^stable_decimals)`
pub fn amount_of(
    value: u64,
    price: u128,
    collateral_decimals: u8,
    rounding: Rounding,
) -> Result<u64> {
    require!(price > 0, PricingErrorCode::InvalidPrice);

    let mut numerator = (value as u128)
        .checked_mul(ONE)
        .ok_or(PricingErrorCode::MathOverflow)?;
    let mut denominator = price;

    if collateral_decimals >= STABLE_DECIMALS {
        let scale = pow10(collateral_decimals - STABLE_DECIMALS)
            .ok_or(PricingErrorCode::MathOverflow)?;
        numerator = numerator
            .checked_mul(scale)
            .ok_or(PricingErrorCode::MathOverflow)?;
    } else {
        let scale = pow10(STABLE_DECIMALS - collateral_decimals)
            .ok_or(PricingErrorCode::MathOverflow)?;
        denominator = denominator
            .checked_mul(scale)
            .ok_or(PricingErrorCode::MathOverflow)?;
    }

    let amount = mul_div(numerator, 1, denominator, rounding)
        .ok_or(PricingErrorCode::MathOverflow)?;
    u64::try_from(amount).map_err(|_| PricingErrorCode::ResultOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn one_to_one_price_with_matching_decimals_is_identity() {
        let fifty = 50_000_000_000u64;
        assert_eq!(value_of(fifty, ONE, 9, Rounding::Floor).unwrap(), fifty);
        assert_eq!(amount_of(fifty, ONE, 9, Rounding::Floor).unwrap(), fifty);
    }

    #[test]
    fn decimal_scaling_between_collateral_and_stable() {
        // 50 tokens of a 6-decimals collateral at price 1.0 -> 50 stable (9 decimals)
        let amount = 50_000_000u64;
        assert_eq!(
            value_of(amount, ONE, 6, Rounding::Floor).unwrap(),
            50_000_000_000
        );
        assert_eq!(
            amount_of(50_000_000_000, ONE, 6, Rounding::Floor).unwrap(),
            amount
        );
    }

    #[test]
    fn non_unit_price_floors_toward_protocol() {
        // price 1.5: 10 collateral -> 15 stable; 10 stable -> 6.666.. collateral
        let price = ONE + ONE / 2;
        assert_eq!(
            value_of(10_000_000_000, price, 9, Rounding::Floor).unwrap(),
            15_000_000_000
        );
        assert_eq!(
            amount_of(10_000_000_000, price, 9, Rounding::Floor).unwrap(),
            6_666_666_666
        );
        assert_eq!(
            amount_of(10_000_000_000, price, 9, Rounding::Ceil).unwrap(),
            6_666_666_667
        );
    }

    #[test]
    fn dust_deposit_at_low_price_quotes_zero_value() {
        // 999 base units of a 6-decimals collateral priced at 1e-6 floor to a
        // zero stable quote; deposit paths must reject such a quote instead
        // of absorbing the collateral.
        let price = ONE / 1_000_000;
        assert_eq!(value_of(999, price, 6, Rounding::Floor).unwrap(), 0);
        assert!(value_of(1_000_000_000, price, 6, Rounding::Floor).unwrap() > 0);
    }

    #[test]
    fn zero_price_is_rejected() {
        assert!(value_of(1, 0, 9, Rounding::Floor).is_err());
        assert!(amount_of(1, 0, 9, Rounding::Floor).is_err());
    }

    proptest! {
        /// Floor conversions never create value out of rounding: converting a
        /// stable value to collateral and back loses at most rounding dust.
        #[test]
        fn round_trip_never_gains(value in 0u64..1_000_000_000_000_000, price in (ONE / 1_000)..(1_000 * ONE)) {
            let amount = amount_of(value, price, 9, Rounding::Floor).unwrap();
            let back = value_of(amount, price, 9, Rounding::Floor).unwrap();
            prop_assert!(back <= value);
        }
    }
}
