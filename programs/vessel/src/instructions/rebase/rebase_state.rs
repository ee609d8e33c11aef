use anchor_lang::prelude::*;

use crate::constants::ONE;
use crate::utils::math_utils::{mul_div, Rounding};

/// Global rebase ledger for the stable token
///
/// Maps internal share balances to externally visible token amounts via
/// `tokens = shares * rebase_index / 1e18`. Opted-out holders are excluded
/// from the scaling relationship and tracked at raw value.
#[account]
#[derive(InitSpace)]
pub struct RebaseLedger {
    /// Share-to-token scalar with 1e18 precision; monotonically non-decreasing
    pub rebase_index: u128,
    /// Total internal shares across all rebasing holders
    pub total_shares: u128,
    /// Total token balance held by opted-out accounts, in base units
    pub opted_out_supply: u64,
    /// Monotonic nonce of the last applied index update
    pub nonce: u64,
    /// PDA bump seed for account derivation
    pub bump: u8,
    /// Reserved space for future ledger extensions
    pub reserved: [u8; 32],
}

/// Per-account balance record of the stable token
///
/// Rebasing holders store internal shares; opted-out holders store a frozen
/// raw balance unaffected by index updates.
#[account]
#[derive(InitSpace)]
pub struct Holder {
    /// The wallet this balance belongs to
    pub owner: Pubkey,
    /// Internal shares; zero while opted out
    pub shares: u128,
    /// Raw token balance; zero unless opted out
    pub raw_balance: u64,
    /// When true the balance is reported at raw value, excluded from rebasing
    pub opted_out: bool,
    /// PDA bump seed for account derivation
    pub bump: u8,
}

#[error_code]
pub enum RebaseLedgerErrorCode {
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Balance does not fit in u64")]
    ResultOverflow,
    #[msg("Insufficient stable token balance")]
    InsufficientBalance,
}

impl Holder {
    /// Externally visible balance at the given rebase index, floor-rounded.
    pub fn balance(&self, rebase_index: u128) -> Result<u64> {
        if self.opted_out {
            return Ok(self.raw_balance);
        }
        let tokens = mul_div(self.shares, rebase_index, ONE, Rounding::Floor)
            .ok_or(RebaseLedgerErrorCode::MathOverflow)?;
        u64::try_from(tokens).map_err(|_| RebaseLedgerErrorCode::ResultOverflow.into())
    }
}

/// Mints `tokens` to a holder and returns the observed balance delta.
///
/// The delta can undershoot `tokens` by index-granularity dust when the holder
/// is rebasing; callers enforcing slippage must compare the delta, not the
/// nominal amount.
pub fn credit_holder(
    ledger: &mut RebaseLedger,
    holder: &mut Holder,
    tokens: u64,
) -> Result<u64> {
    if holder.opted_out {
        holder.raw_balance = holder
            .raw_balance
            .checked_add(tokens)
            .ok_or(RebaseLedgerErrorCode::MathOverflow)?;
        ledger.opted_out_supply = ledger
            .opted_out_supply
            .checked_add(tokens)
            .ok_or(RebaseLedgerErrorCode::MathOverflow)?;
        return Ok(tokens);
    }

    let before = holder.balance(ledger.rebase_index)?;
    let shares = mul_div(tokens as u128, ONE, ledger.rebase_index, Rounding::Floor)
        .ok_or(RebaseLedgerErrorCode::MathOverflow)?;
    holder.shares = holder
        .shares
        .checked_add(shares)
        .ok_or(RebaseLedgerErrorCode::MathOverflow)?;
    ledger.total_shares = ledger
        .total_shares
        .checked_add(shares)
        .ok_or(RebaseLedgerErrorCode::MathOverflow)?;
    let after = holder.balance(ledger.rebase_index)?;

    after
        .checked_sub(before)
        .ok_or(RebaseLedgerErrorCode::MathOverflow.into())
}

/// Burns exactly `tokens` from a holder's visible balance.
///
/// Shares are removed with ceil rounding so the visible balance drops by at
/// least the burned amount; burning the full balance clears every share so no
/// dust is stranded.
pub fn debit_holder(ledger: &mut RebaseLedger, holder: &mut Holder, tokens: u64) -> Result<()> {
    if holder.opted_out {
        require!(
            holder.raw_balance >= tokens,
            RebaseLedgerErrorCode::InsufficientBalance
        );
        holder.raw_balance -= tokens;
        ledger.opted_out_supply = ledger
            .opted_out_supply
            .checked_sub(tokens)
            .ok_or(RebaseLedgerErrorCode::MathOverflow)?;
        return Ok(());
    }

    let balance = holder.balance(ledger.rebase_index)?;
    require!(balance >= tokens, RebaseLedgerErrorCode::InsufficientBalance);

    let shares = if tokens == balance {
        holder.shares
    } else {
        mul_div(tokens as u128, ONE, ledger.rebase_index, Rounding::Ceil)
            .ok_or(RebaseLedgerErrorCode::MathOverflow)?
            .min(holder.shares)
    };

    holder.shares = holder
        .shares
        .checked_sub(shares)
        .ok_or(RebaseLedgerErrorCode::MathOverflow)?;
    ledger.total_shares = ledger
        .total_shares
        .checked_sub(shares)
        .ok_or(RebaseLedgerErrorCode::MathOverflow)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(index: u128) -> RebaseLedger {
        RebaseLedger {
            rebase_index: index,
            total_shares: 0,
            opted_out_supply: 0,
            nonce: 0,
            bump: 255,
            reserved: [0; 32],
        }
    }

    fn holder() -> Holder {
        Holder {
            owner: Pubkey::default(),
            shares: 0,
            raw_balance: 0,
            opted_out: false,
            bump: 255,
        }
    }

    #[test]
    fn credit_then_balance_at_unit_index() {
        let mut l = ledger(ONE);
        let mut h = holder();
        let minted = credit_holder(&mut l, &mut h, 50_000_000_000).unwrap();
        assert_eq!(minted, 50_000_000_000);
        assert_eq!(h.balance(l.rebase_index).unwrap(), 50_000_000_000);
        assert_eq!(l.total_shares, 50_000_000_000u128 * ONE / ONE);
    }

    #[test]
    fn balance_scales_with_index() {
        let mut l = ledger(ONE);
        let mut h = holder();
        credit_holder(&mut l, &mut h, 100).unwrap();
        l.rebase_index = ONE + ONE / 10;
        assert_eq!(h.balance(l.rebase_index).unwrap(), 110);
    }

    #[test]
    fn burn_full_balance_leaves_no_share_dust() {
        let mut l = ledger(ONE + ONE / 3);
        let mut h = holder();
        credit_holder(&mut l, &mut h, 1_000_000).unwrap();
        let balance = h.balance(l.rebase_index).unwrap();
        debit_holder(&mut l, &mut h, balance).unwrap();
        assert_eq!(h.shares, 0);
        assert_eq!(l.total_shares, 0);
    }

    #[test]
    fn burn_more_than_balance_is_rejected() {
        let mut l = ledger(ONE);
        let mut h = holder();
        credit_holder(&mut l, &mut h, 10).unwrap();
        assert!(debit_holder(&mut l, &mut h, 11).is_err());
        assert_eq!(h.balance(l.rebase_index).unwrap(), 10);
    }

    #[test]
    fn partial_burn_removes_at_least_the_requested_amount() {
        let mut l = ledger(ONE + ONE / 7);
        let mut h = holder();
        credit_holder(&mut l, &mut h, 1_000_000).unwrap();
        let before = h.balance(l.rebase_index).unwrap();
        debit_holder(&mut l, &mut h, 400_000).unwrap();
        let after = h.balance(l.rebase_index).unwrap();
        assert!(before - after >= 400_000);
        assert!(before - after <= 400_001);
    }

    #[test]
    fn opted_out_holder_uses_raw_balance() {
        let mut l = ledger(ONE);
        let mut h = holder();
        h.opted_out = true;
        credit_holder(&mut l, &mut h, 500).unwrap();
        l.rebase_index = 2 * ONE;
        assert_eq!(h.balance(l.rebase_index).unwrap(), 500);
        assert_eq!(l.opted_out_supply, 500);
        debit_holder(&mut l, &mut h, 500).unwrap();
        assert_eq!(l.opted_out_supply, 0);
    }
}
