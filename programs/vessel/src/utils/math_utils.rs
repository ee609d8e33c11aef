/// Rounding direction for fixed-point value conversions.
///
/// The engine always requests `Floor` so that rounding never favors the caller;
/// `Ceil` is provided for completeness of the conversion surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Floor,
    Ceil,
}

/// Integer ceil division for `u128`.
///
/// Returns `None` on division by zero or overflow.
pub fn ceil_div_u128(numerator: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }

    numerator
        .checked_add(denominator.checked_sub(1)?)
        .and_then(|adjusted| adjusted.checked_div(denominator))
}

/// Computes `a * b / denominator` in full `u128` precision with the given rounding.
///
/// Returns `None` on division by zero or overflow of the intermediate product.
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    let product = a.checked_mul(b)?;
    match rounding {
        Rounding::Floor => product.checked_div(denominator),
        Rounding::Ceil => ceil_div_u128(product, denominator),
    }
}

/// `10^exp` as `u128`, or `None` when the power overflows.
pub fn pow10(exp: u8) -> Option<u128> {
    10u128.checked_pow(exp as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_div_rounds_up_on_remainder() {
        assert_eq!(ceil_div_u128(10, 3), Some(4));
        assert_eq!(ceil_div_u128(9, 3), Some(3));
        assert_eq!(ceil_div_u128(0, 7), Some(0));
        assert_eq!(ceil_div_u128(1, 0), None);
    }

    #[test]
    fn mul_div_floor_and_ceil_differ_by_at_most_one() {
        let floor = mul_div(7, 3, 2, Rounding::Floor).unwrap();
        let ceil = mul_div(7, 3, 2, Rounding::Ceil).unwrap();
        assert_eq!(floor, 10);
        assert_eq!(ceil, 11);
    }

    #[test]
    fn mul_div_detects_overflow() {
        assert_eq!(mul_div(u128::MAX, 2, 1, Rounding::Floor), None);
        assert_eq!(mul_div(1, 1, 0, Rounding::Floor), None);
    }

    #[test]
    fn pow10_bounds() {
        assert_eq!(pow10(0), Some(1));
        assert_eq!(pow10(18), Some(1_000_000_000_000_000_000));
        assert_eq!(pow10(39), None);
    }
}
