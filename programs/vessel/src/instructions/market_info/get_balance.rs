use crate::constants::seeds;
use crate::instructions::rebase::{Holder, RebaseLedger};
use anchor_lang::prelude::*;

/// Event emitted when a balance query is completed
#[event]
pub struct GetBalanceEvent {
    /// The queried holder
    pub owner: Pubkey,
    /// Current stable token balance, in base units
    pub balance: u64,
    /// The rebase index the balance was computed against
    pub rebase_index: u128,
}

/// Account structure for querying a holder's stable token balance
///
/// The query is read-only. The balance reflects the current rebase index for
/// rebasing holders and the stored raw balance for opted-out holders.
#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct GetBalance<'info> {
    /// Global share ledger holding the current rebase index
    #[account(seeds = [seeds::REBASE_LEDGER], bump = rebase_ledger.bump)]
    pub rebase_ledger: Account<'info, RebaseLedger>,

    /// The holder account being queried
    #[account(seeds = [seeds::HOLDER, owner.as_ref()], bump = holder.bump)]
    pub holder: Account<'info, Holder>,
}

/// Returns the stable token balance of a holder.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `owner` - The holder whose balance is being queried
///
/// # Events
/// * `GetBalanceEvent` - Emitted with the balance and the index used
pub fn get_balance(ctx: Context<GetBalance>, owner: Pubkey) -> Result<u64> {
    let rebase_index = ctx.accounts.rebase_ledger.rebase_index;
    let balance = ctx.accounts.holder.balance(rebase_index)?;

    msg!(
        "Balance Info - Owner: {}, Balance: {}, Index: {}",
        owner,
        balance,
        rebase_index
    );
    emit!(GetBalanceEvent {
        owner,
        balance,
        rebase_index,
    });

    Ok(balance)
}
