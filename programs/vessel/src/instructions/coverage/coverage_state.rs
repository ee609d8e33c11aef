use anchor_lang::prelude::*;

use crate::constants::{MAX_CHECKPOINTS, ONE};

/// A single (timepoint, ratio) checkpoint of the coverage series.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatioCheckpoint {
    /// Unix timestamp at which this ratio took effect
    pub timestamp: u64,
    /// Fraction of nominal redemption value payable, 1e18 = 100%
    pub ratio: u128,
}

/// Append-only checkpoint series of the coverage ratio
///
/// The ratio effective at a request's maturation timestamp governs its payout;
/// checkpoints set later are never retroactively visible to requests that
/// matured before them.
#[account]
#[derive(InitSpace)]
pub struct CoverageTracker {
    /// Ordered series of checkpoints; seeded with (0, 1e18) at initialization
    #[max_len(MAX_CHECKPOINTS)]
    pub checkpoints: Vec<RatioCheckpoint>,
    /// PDA bump seed for account derivation
    pub bump: u8,
}

impl CoverageTracker {
    /// Ratio most recently in effect at or before `timepoint`.
    ///
    /// Falls back to 100% when no checkpoint covers the timepoint, which can
    /// only happen on an uninitialized series.
    pub fn ratio_at(&self, timepoint: u64) -> u128 {
        // Binary search for the last checkpoint with timestamp <= timepoint.
        let mut lo = 0usize;
        let mut hi = self.checkpoints.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.checkpoints[mid].timestamp <= timepoint {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        if lo == 0 {
            ONE
        } else {
            self.checkpoints[lo - 1].ratio
        }
    }

    /// Ratio of the most recent checkpoint.
    pub fn latest(&self) -> u128 {
        self.checkpoints.last().map(|cp| cp.ratio).unwrap_or(ONE)
    }

    /// Drops checkpoints that can no longer govern any lookup at or after
    /// `watermark`, keeping the one in effect at the watermark itself.
    ///
    /// Safe only when no unsettled request matured before `watermark`; the
    /// caller asserts that. Returns the number of checkpoints removed.
    pub fn compact_before(&mut self, watermark: u64) -> usize {
        let mut keep_from = 0usize;
        for (i, checkpoint) in self.checkpoints.iter().enumerate() {
            if checkpoint.timestamp <= watermark {
                keep_from = i;
            } else {
                break;
            }
        }
        self.checkpoints.drain(..keep_from);
        keep_from
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(points: &[(u64, u128)]) -> CoverageTracker {
        CoverageTracker {
            checkpoints: points
                .iter()
                .map(|&(timestamp, ratio)| RatioCheckpoint { timestamp, ratio })
                .collect(),
            bump: 255,
        }
    }

    #[test]
    fn empty_series_defaults_to_full_coverage() {
        assert_eq!(tracker(&[]).ratio_at(12345), ONE);
    }

    #[test]
    fn lookup_uses_value_at_or_before_timepoint() {
        let t = tracker(&[(0, ONE), (100, ONE / 2), (200, (3 * ONE) / 4)]);
        assert_eq!(t.ratio_at(0), ONE);
        assert_eq!(t.ratio_at(99), ONE);
        assert_eq!(t.ratio_at(100), ONE / 2);
        assert_eq!(t.ratio_at(150), ONE / 2);
        assert_eq!(t.ratio_at(200), (3 * ONE) / 4);
        assert_eq!(t.ratio_at(u64::MAX), (3 * ONE) / 4);
    }

    #[test]
    fn checkpoint_is_not_retroactively_visible() {
        // A request matured at t=150; a checkpoint pushed at t=160 must not
        // change the ratio in effect at maturation.
        let before = tracker(&[(0, ONE)]);
        let pinned = before.ratio_at(150);
        let after = tracker(&[(0, ONE), (160, ONE / 2)]);
        assert_eq!(after.ratio_at(150), pinned);
    }

    #[test]
    fn latest_tracks_last_checkpoint() {
        assert_eq!(tracker(&[]).latest(), ONE);
        assert_eq!(tracker(&[(0, ONE), (50, ONE / 4)]).latest(), ONE / 4);
    }

    #[test]
    fn compaction_keeps_the_checkpoint_governing_the_watermark() {
        let mut t = tracker(&[(0, ONE), (100, ONE / 2), (200, (3 * ONE) / 4), (300, ONE / 4)]);
        let removed = t.compact_before(250);
        assert_eq!(removed, 2);
        assert_eq!(t.checkpoints.len(), 2);
        // Lookups at or after the watermark are unchanged.
        assert_eq!(t.ratio_at(250), (3 * ONE) / 4);
        assert_eq!(t.ratio_at(299), (3 * ONE) / 4);
        assert_eq!(t.ratio_at(300), ONE / 4);
    }

    #[test]
    fn compaction_before_the_first_checkpoint_removes_nothing() {
        let mut t = tracker(&[(100, ONE / 2), (200, ONE / 4)]);
        assert_eq!(t.compact_before(50), 0);
        assert_eq!(t.checkpoints.len(), 2);
    }
}
