use anchor_lang::prelude::*;

use crate::constants::ONE;
use crate::instructions::coverage::CoverageTracker;
use crate::utils::math_utils::{mul_div, Rounding};

/// Per-(user, asset) redemption queue cursor
///
/// Requests are numbered by insertion order; `first_unclaimed_index` advances
/// monotonically through settled requests and never revisits one. Requests are
/// processed in strict FIFO order through this cursor.
#[account]
#[derive(InitSpace)]
pub struct RedemptionQueue {
    /// Owner of this queue
    pub user: Pubkey,
    /// Collateral asset of this queue
    pub asset_mint: Pubkey,
    /// Index assigned to the next created request
    pub next_index: u64,
    /// Index of the earliest request that has not been settled yet
    pub first_unclaimed_index: u64,
    /// PDA bump seed for account derivation
    pub bump: u8,
}

/// A single time-locked redemption obligation
///
/// Append-only: the account is never closed; `claimed` is written exactly once,
/// at settlement, with the coverage-adjusted payout.
#[account]
#[derive(InitSpace)]
pub struct RedemptionRequest {
    /// User the collateral is owed to
    pub user: Pubkey,
    /// Collateral asset owed
    pub asset_mint: Pubkey,
    /// Position in the owner's per-asset queue
    pub index: u64,
    /// Nominal collateral amount owed, in base units
    pub amount: u64,
    /// Coverage-adjusted amount paid out; zero until settled
    pub claimed: u64,
    /// Unix timestamp after which the request is claimable
    pub claimable_after: u64,
    /// PDA bump seed for account derivation
    pub bump: u8,
}

#[error_code]
pub enum RedemptionStateErrorCode {
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Payout does not fit in u64")]
    ResultOverflow,
}

impl RedemptionRequest {
    /// Coverage-adjusted payout if the request has matured at `now`.
    ///
    /// The ratio checkpoint in effect at `claimable_after` governs the payout,
    /// pinning matured obligations against later ratio changes.
    pub fn payable_at(&self, tracker: &CoverageTracker, now: u64) -> Result<Option<u64>> {
        if self.claimable_after > now {
            return Ok(None);
        }
        let ratio = tracker.ratio_at(self.claimable_after);
        let payable = mul_div(self.amount as u128, ratio, ONE, Rounding::Floor)
            .ok_or(RedemptionStateErrorCode::MathOverflow)?;
        let payable =
            u64::try_from(payable).map_err(|_| RedemptionStateErrorCode::ResultOverflow)?;
        Ok(Some(payable))
    }
}

/// Settlement totals for one claim over the queue's pending prefix.
pub struct SettlementPlan {
    /// Coverage-adjusted payout per settled request, in queue order
    pub payouts: Vec<u64>,
    /// Sum of nominal amounts of the settled requests
    pub amount_requested: u64,
    /// Sum of coverage-adjusted payouts
    pub amount_claimed: u64,
}

impl SettlementPlan {
    /// Number of requests the plan settles; the cursor advances by this much.
    pub fn requests_settled(&self) -> u64 {
        self.payouts.len() as u64
    }
}

/// Decides which pending requests settle at `now`.
///
/// `pending` must be the queue's unsettled requests in cursor order. The
/// settled set is always the maximal matured prefix: the walk stops at the
/// first unmatured request even when later requests have matured, so a claim
/// can never reorder or skip within the queue. `amount_requested` carries the
/// full nominal sum regardless of haircuts; the pending-claims ledger releases
/// nominal obligations, never the haircut payout.
pub fn plan_settlement(
    pending: &[&RedemptionRequest],
    tracker: &CoverageTracker,
    now: u64,
) -> Result<SettlementPlan> {
    let mut payouts = Vec::with_capacity(pending.len());
    let mut amount_requested: u64 = 0;
    let mut amount_claimed: u64 = 0;

    for request in pending {
        let Some(payable) = request.payable_at(tracker, now)? else {
            break;
        };
        amount_requested = amount_requested
            .checked_add(request.amount)
            .ok_or(RedemptionStateErrorCode::MathOverflow)?;
        amount_claimed = amount_claimed
            .checked_add(payable)
            .ok_or(RedemptionStateErrorCode::MathOverflow)?;
        payouts.push(payable);
    }

    Ok(SettlementPlan {
        payouts,
        amount_requested,
        amount_claimed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::coverage::RatioCheckpoint;

    fn tracker(points: &[(u64, u128)]) -> CoverageTracker {
        CoverageTracker {
            checkpoints: points
                .iter()
                .map(|&(timestamp, ratio)| RatioCheckpoint { timestamp, ratio })
                .collect(),
            bump: 255,
        }
    }

    fn request(amount: u64, claimable_after: u64) -> RedemptionRequest {
        RedemptionRequest {
            user: Pubkey::default(),
            asset_mint: Pubkey::default(),
            index: 0,
            amount,
            claimed: 0,
            claimable_after,
            bump: 255,
        }
    }

    #[test]
    fn unmatured_request_is_not_payable() {
        let t = tracker(&[(0, ONE)]);
        assert_eq!(request(100, 500).payable_at(&t, 499).unwrap(), None);
        assert_eq!(request(100, 500).payable_at(&t, 500).unwrap(), Some(100));
    }

    #[test]
    fn half_coverage_halves_the_payout() {
        let t = tracker(&[(0, ONE / 2)]);
        assert_eq!(
            request(50_000_000_000, 100).payable_at(&t, 200).unwrap(),
            Some(25_000_000_000)
        );
    }

    #[test]
    fn ratio_change_after_maturation_does_not_alter_payout() {
        // Matured at t=100 under full coverage; ratio halved at t=150.
        let t = tracker(&[(0, ONE), (150, ONE / 2)]);
        let req = request(1_000, 100);
        assert_eq!(req.payable_at(&t, 200).unwrap(), Some(1_000));

        // A request maturing after the cut takes the haircut.
        let late = request(1_000, 150);
        assert_eq!(late.payable_at(&t, 200).unwrap(), Some(500));
    }

    #[test]
    fn payout_floors_toward_protocol() {
        let t = tracker(&[(0, ONE / 3)]);
        assert_eq!(request(100, 0).payable_at(&t, 1).unwrap(), Some(33));
    }

    #[test]
    fn settlement_stops_at_the_first_unmatured_request() {
        let t = tracker(&[(0, ONE)]);
        let first = request(100, 50);
        let blocker = request(200, 500);
        let matured_behind = request(300, 60);

        // The third request has matured, but sits behind an unmatured one and
        // must not settle out of order.
        let plan = plan_settlement(&[&first, &blocker, &matured_behind], &t, 100).unwrap();
        assert_eq!(plan.requests_settled(), 1);
        assert_eq!(plan.payouts, vec![100]);
        assert_eq!(plan.amount_requested, 100);
        assert_eq!(plan.amount_claimed, 100);
    }

    #[test]
    fn second_claim_with_nothing_newly_matured_settles_nothing() {
        let t = tracker(&[(0, ONE)]);
        let matured = request(100, 50);
        let unmatured = request(200, 500);

        let first_claim = plan_settlement(&[&matured, &unmatured], &t, 100).unwrap();
        assert_eq!(first_claim.requests_settled(), 1);

        // The cursor advanced past the settled request; a repeat claim sees
        // only the unmatured tail and must settle nothing, leaving callers to
        // fail without touching state.
        let second_claim = plan_settlement(&[&unmatured], &t, 100).unwrap();
        assert_eq!(second_claim.requests_settled(), 0);
        assert_eq!(second_claim.amount_requested, 0);
        assert_eq!(second_claim.amount_claimed, 0);
        assert!(second_claim.payouts.is_empty());
    }

    #[test]
    fn nominal_amount_is_released_even_when_payouts_are_haircut() {
        let t = tracker(&[(0, ONE / 2)]);
        let a = request(1_000, 10);
        let b = request(500, 20);

        let plan = plan_settlement(&[&a, &b], &t, 100).unwrap();
        assert_eq!(plan.requests_settled(), 2);
        assert_eq!(plan.amount_claimed, 750);
        // Full nominal sum, not the haircut sum: the coverage shortfall is
        // absorbed, never left reserved.
        assert_eq!(plan.amount_requested, 1_500);
    }
}
