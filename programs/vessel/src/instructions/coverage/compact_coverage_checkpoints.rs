use crate::constants::seeds;
use crate::instructions::coverage::CoverageTracker;
use crate::state::State;
use anchor_lang::prelude::*;

#[event]
pub struct CoverageCheckpointsCompactedEvent {
    pub watermark: u64,
    pub removed: u64,
    pub remaining: u64,
}

/// Account structure for compacting the coverage checkpoint series.
#[derive(Accounts)]
pub struct CompactCoverageCheckpoints<'info> {
    /// Program state account containing the admin authorization
    #[account(
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = admin.key() == state.admin @ CompactCoverageCheckpointsErrorCode::Unauthorized
    )]
    pub state: Account<'info, State>,

    /// The coverage checkpoint series
    #[account(
        mut,
        seeds = [seeds::COVERAGE_TRACKER],
        bump = coverage_tracker.bump
    )]
    pub coverage_tracker: Account<'info, CoverageTracker>,

    /// The signer authorizing the compaction, must be the admin
    pub admin: Signer<'info>,
}

/// Drops checkpoints older than the one governing `watermark`, reclaiming
/// capacity in the bounded checkpoint series.
///
/// The admin asserts that every unsettled redemption request matures at or
/// after the watermark. The checkpoint in effect at the watermark is kept,
/// so lookups at any timepoint from the watermark onward are unchanged.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `watermark` - Unix timestamp before which checkpoint history is dropped
pub fn compact_coverage_checkpoints(
    ctx: Context<CompactCoverageCheckpoints>,
    watermark: u64,
) -> Result<()> {
    let tracker = &mut ctx.accounts.coverage_tracker;
    let removed = tracker.compact_before(watermark);
    require!(
        removed > 0,
        CompactCoverageCheckpointsErrorCode::NothingCompacted
    );

    let remaining = tracker.checkpoints.len() as u64;
    msg!(
        "Coverage checkpoints compacted: {} removed, {} remaining, watermark {}",
        removed,
        remaining,
        watermark
    );
    emit!(CoverageCheckpointsCompactedEvent {
        watermark,
        removed: removed as u64,
        remaining,
    });

    Ok(())
}

#[error_code]
pub enum CompactCoverageCheckpointsErrorCode {
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("No checkpoints precede the watermark")]
    NothingCompacted,
}
