use crate::constants::{seeds, ONE};
use crate::instructions::rebase::RebaseLedger;
use crate::state::State;
use anchor_lang::prelude::*;

/// Account structure for initializing the rebase ledger.
#[derive(Accounts)]
pub struct InitializeRebaseLedger<'info> {
    /// Program state, ensures `boss` is authorized.
    #[account(seeds = [seeds::STATE], bump = state.bump, has_one = boss)]
    pub state: Account<'info, State>,

    /// The global rebase ledger account, starts at index 1.0.
    #[account(
        init,
        payer = boss,
        space = 8 + RebaseLedger::INIT_SPACE,
        seeds = [seeds::REBASE_LEDGER],
        bump
    )]
    pub rebase_ledger: Account<'info, RebaseLedger>,

    /// The signer funding and authorizing the initialization, must be the boss.
    #[account(mut)]
    pub boss: Signer<'info>,

    /// Solana System program for account creation and rent payment.
    pub system_program: Program<'info, System>,
}

/// Initializes the rebase ledger with an index of exactly 1.0 (1e18), zero
/// shares, and a zero update nonce. Only the boss can call this instruction.
pub fn initialize_rebase_ledger(ctx: Context<InitializeRebaseLedger>) -> Result<()> {
    let ledger = &mut ctx.accounts.rebase_ledger;
    ledger.rebase_index = ONE;
    ledger.total_shares = 0;
    ledger.opted_out_supply = 0;
    ledger.nonce = 0;
    ledger.bump = ctx.bumps.rebase_ledger;

    Ok(())
}
