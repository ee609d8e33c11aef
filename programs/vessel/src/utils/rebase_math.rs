use anchor_lang::prelude::*;

use crate::constants::ONE;
use crate::utils::math_utils::{mul_div, Rounding};

#[error_code]
pub enum RebaseMathErrorCode {
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Tax mint amount does not fit in u64")]
    ResultOverflow,
}

/// Outcome of the tax-adjusted rebase computation.
pub struct RebaseOutcome {
    /// Index to apply to the ledger; reflects only the net (post-tax) increase
    pub adjusted_index: u128,
    /// Tax, in stable token base units, to mint to the fee collector after the
    /// index update
    pub mint_amount: u64,
}

/// Computes the tax-adjusted rebase index and the fee mint amount.
///
/// Invariant preserved: with `supply = total_shares * current_index / 1e18`,
/// the post-tax rebasing supply equals `supply + net_increase` where
/// `net_increase = delta - tax`, `delta = new_supply - supply` and
/// `tax = delta * tax_rate / 1e18` (all floor). The tax itself is minted
/// separately, after the index is applied, so that the fee mint adds new
/// shares at the adjusted index instead of being rescaled retroactively.
///
/// When the index does not increase, or nothing would be taxed, the requested
/// index is passed through unchanged with a zero mint amount.
pub fn collect_on_rebase(
    total_shares: u128,
    current_index: u128,
    next_index: u128,
    tax_rate: u128,
) -> Result<RebaseOutcome> {
    let supply = mul_div(total_shares, current_index, ONE, Rounding::Floor)
        .ok_or(RebaseMathErrorCode::MathOverflow)?;
    let new_supply = mul_div(total_shares, next_index, ONE, Rounding::Floor)
        .ok_or(RebaseMathErrorCode::MathOverflow)?;

    if new_supply <= supply || tax_rate == 0 || total_shares == 0 {
        return Ok(RebaseOutcome {
            adjusted_index: next_index,
            mint_amount: 0,
        });
    }

    let delta = new_supply
        .checked_sub(supply)
        .ok_or(RebaseMathErrorCode::MathOverflow)?;
    let tax = mul_div(delta, tax_rate, ONE, Rounding::Floor)
        .ok_or(RebaseMathErrorCode::MathOverflow)?;
    if tax == 0 {
        return Ok(RebaseOutcome {
            adjusted_index: next_index,
            mint_amount: 0,
        });
    }

    let net_increase = delta
        .checked_sub(tax)
        .ok_or(RebaseMathErrorCode::MathOverflow)?;
    let target_supply = supply
        .checked_add(net_increase)
        .ok_or(RebaseMathErrorCode::MathOverflow)?;

    // The floor here can land one unit below current_index when supply itself
    // was floored; clamp to keep the token-layer monotonicity guarantee.
    let adjusted_index = mul_div(target_supply, ONE, total_shares, Rounding::Floor)
        .ok_or(RebaseMathErrorCode::MathOverflow)?
        .max(current_index);

    let mint_amount = new_supply
        .checked_sub(target_supply)
        .ok_or(RebaseMathErrorCode::MathOverflow)?;
    let mint_amount =
        u64::try_from(mint_amount).map_err(|_| RebaseMathErrorCode::ResultOverflow)?;

    Ok(RebaseOutcome {
        adjusted_index,
        mint_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SHARES: u128 = 1_000_000_000_000; // 1000 tokens of 9 decimals at index 1.0

    #[test]
    fn ten_percent_rebase_with_ten_percent_tax() {
        // Index 1.0 -> 1.1 with a 10% tax: holders keep 90% of the increase.
        let outcome = collect_on_rebase(SHARES, ONE, ONE + ONE / 10, ONE / 10).unwrap();

        assert_eq!(outcome.adjusted_index, 1_090_000_000_000_000_000);
        assert_eq!(outcome.mint_amount, 10_000_000_000);

        // Post-tax rebasing supply plus the fee mint reconstructs the naive
        // post-rebase supply exactly.
        let post_tax_supply = mul_div(SHARES, outcome.adjusted_index, ONE, Rounding::Floor).unwrap();
        assert_eq!(post_tax_supply, 1_090_000_000_000);
        assert_eq!(post_tax_supply + outcome.mint_amount as u128, 1_100_000_000_000);
    }

    #[test]
    fn unchanged_index_skips_tax() {
        let outcome = collect_on_rebase(SHARES, ONE, ONE, ONE / 10).unwrap();
        assert_eq!(outcome.adjusted_index, ONE);
        assert_eq!(outcome.mint_amount, 0);
    }

    #[test]
    fn zero_tax_rate_passes_index_through() {
        let next = ONE + ONE / 20;
        let outcome = collect_on_rebase(SHARES, ONE, next, 0).unwrap();
        assert_eq!(outcome.adjusted_index, next);
        assert_eq!(outcome.mint_amount, 0);
    }

    #[test]
    fn empty_ledger_passes_index_through() {
        let next = 2 * ONE;
        let outcome = collect_on_rebase(0, ONE, next, ONE / 10).unwrap();
        assert_eq!(outcome.adjusted_index, next);
        assert_eq!(outcome.mint_amount, 0);
    }

    #[test]
    fn full_tax_rate_freezes_holder_supply() {
        // 100% tax: the index stays put and the whole increase goes to fees.
        let outcome = collect_on_rebase(SHARES, ONE, ONE + ONE / 10, ONE).unwrap();
        assert_eq!(outcome.adjusted_index, ONE);
        assert_eq!(outcome.mint_amount, 100_000_000_000);
    }

    proptest! {
        /// Supply conservation: post-tax rebasing supply plus the fee mint never
        /// exceeds the naive post-rebase supply, and undershoots only by floor
        /// dust bounded by one base unit.
        #[test]
        fn supply_conservation(
            shares in 1u128..(1u128 << 60),
            current in (ONE / 2)..(10 * ONE),
            bump in 0u128..(ONE / 2),
            tax_rate in 0u128..=ONE,
        ) {
            let next = current + bump;
            let outcome = collect_on_rebase(shares, current, next, tax_rate).unwrap();
            let naive = mul_div(shares, next, ONE, Rounding::Floor).unwrap();
            let post = mul_div(shares, outcome.adjusted_index, ONE, Rounding::Floor).unwrap();
            let total = post + outcome.mint_amount as u128;

            // Never mints value out of thin air; undershoot is bounded by the
            // index-granularity dust of the share count.
            prop_assert!(total <= naive);
            prop_assert!(naive - total <= shares / ONE + 2);
            prop_assert!(outcome.adjusted_index >= current);
            prop_assert!(outcome.adjusted_index <= next);
        }
    }
}
