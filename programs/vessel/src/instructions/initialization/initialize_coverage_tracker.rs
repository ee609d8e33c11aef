use crate::constants::{seeds, ONE};
use crate::instructions::coverage::{CoverageTracker, RatioCheckpoint};
use crate::state::State;
use anchor_lang::prelude::*;

/// Account structure for initializing the coverage ratio tracker.
#[derive(Accounts)]
pub struct InitializeCoverageTracker<'info> {
    /// Program state, ensures `boss` is authorized.
    #[account(seeds = [seeds::STATE], bump = state.bump, has_one = boss)]
    pub state: Account<'info, State>,

    /// The coverage checkpoint series, seeded at full coverage.
    #[account(
        init,
        payer = boss,
        space = 8 + CoverageTracker::INIT_SPACE,
        seeds = [seeds::COVERAGE_TRACKER],
        bump
    )]
    pub coverage_tracker: Account<'info, CoverageTracker>,

    /// The signer funding and authorizing the initialization, must be the boss.
    #[account(mut)]
    pub boss: Signer<'info>,

    /// Solana System program for account creation and rent payment.
    pub system_program: Program<'info, System>,
}

/// Initializes the coverage tracker with a single checkpoint pinning 100%
/// coverage from the beginning of time, so every request has a governing
/// ratio. Only the boss can call this instruction.
pub fn initialize_coverage_tracker(ctx: Context<InitializeCoverageTracker>) -> Result<()> {
    let tracker = &mut ctx.accounts.coverage_tracker;
    tracker.checkpoints.push(RatioCheckpoint {
        timestamp: 0,
        ratio: ONE,
    });
    tracker.bump = ctx.bumps.coverage_tracker;

    Ok(())
}
