use crate::constants::{seeds, MAX_CHECKPOINTS, ONE};
use crate::instructions::coverage::{CoverageTracker, RatioCheckpoint};
use crate::state::State;
use anchor_lang::prelude::*;

#[event]
pub struct CoverageRatioSetEvent {
    pub old_ratio: u128,
    pub new_ratio: u128,
    pub timestamp: u64,
}

/// Account structure for pushing a coverage ratio checkpoint.
#[derive(Accounts)]
pub struct SetCoverageRatio<'info> {
    /// Program state account containing the admin authorization
    #[account(
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = admin.key() == state.admin @ SetCoverageRatioErrorCode::Unauthorized
    )]
    pub state: Account<'info, State>,

    /// The coverage checkpoint series
    #[account(
        mut,
        seeds = [seeds::COVERAGE_TRACKER],
        bump = coverage_tracker.bump
    )]
    pub coverage_tracker: Account<'info, CoverageTracker>,

    /// The signer authorizing the update, must be the admin
    pub admin: Signer<'info>,
}

/// Pushes a new coverage ratio checkpoint at the current time.
///
/// The checkpoint governs requests maturing from now on; requests that
/// matured earlier keep the ratio that was in effect at their maturation
/// (never retroactive).
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `ratio` - New coverage ratio, `0 < ratio <= 1e18`
pub fn set_coverage_ratio(ctx: Context<SetCoverageRatio>, ratio: u128) -> Result<()> {
    require!(
        ratio > 0 && ratio <= ONE,
        SetCoverageRatioErrorCode::InvalidRatio
    );

    let tracker = &mut ctx.accounts.coverage_tracker;
    let old_ratio = tracker.latest();
    require!(ratio != old_ratio, SetCoverageRatioErrorCode::NoChange);
    require!(
        tracker.checkpoints.len() < MAX_CHECKPOINTS,
        SetCoverageRatioErrorCode::CheckpointCapacityExceeded
    );

    let timestamp = Clock::get()?.unix_timestamp as u64;
    tracker.checkpoints.push(RatioCheckpoint { timestamp, ratio });

    msg!("Coverage ratio set: {} -> {} at {}", old_ratio, ratio, timestamp);
    emit!(CoverageRatioSetEvent {
        old_ratio,
        new_ratio: ratio,
        timestamp,
    });

    Ok(())
}

#[error_code]
pub enum SetCoverageRatioErrorCode {
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Ratio must be in (0, 1e18]")]
    InvalidRatio,

    #[msg("No change: ratio equals the latest checkpoint")]
    NoChange,

    #[msg("Checkpoint capacity exceeded")]
    CheckpointCapacityExceeded,
}
