use crate::constants::seeds;
use crate::instructions::rebase::RebaseLedger;
use anchor_lang::prelude::*;

/// Event emitted when the rebase index is queried
#[event]
pub struct GetRebaseIndexEvent {
    /// Current rebase index, 1e18-scaled
    pub rebase_index: u128,
    /// Monotonic update counter of the ledger
    pub nonce: u64,
}

/// Account structure for querying the current rebase index
#[derive(Accounts)]
pub struct GetRebaseIndex<'info> {
    /// Global share ledger holding the current rebase index
    #[account(seeds = [seeds::REBASE_LEDGER], bump = rebase_ledger.bump)]
    pub rebase_ledger: Account<'info, RebaseLedger>,
}

/// Returns the current rebase index of the stable token ledger.
///
/// # Events
/// * `GetRebaseIndexEvent` - Emitted with the index and ledger nonce
pub fn get_rebase_index(ctx: Context<GetRebaseIndex>) -> Result<u128> {
    let ledger = &ctx.accounts.rebase_ledger;

    msg!(
        "Rebase Index Info - Index: {}, Nonce: {}",
        ledger.rebase_index,
        ledger.nonce
    );
    emit!(GetRebaseIndexEvent {
        rebase_index: ledger.rebase_index,
        nonce: ledger.nonce,
    });

    Ok(ledger.rebase_index)
}
