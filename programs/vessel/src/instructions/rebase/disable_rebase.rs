use crate::constants::{seeds, ONE};
use crate::instructions::rebase::{Holder, RebaseLedger};
use crate::utils::math_utils::{mul_div, Rounding};
use anchor_lang::prelude::*;

#[event]
pub struct RebaseOptOutSetEvent {
    pub account: Pubkey,
    pub opted_out: bool,
    pub balance: u64,
}

/// Account structure for toggling an account's rebase opt-out flag.
#[derive(Accounts)]
pub struct DisableRebase<'info> {
    /// The global rebase ledger
    #[account(mut, seeds = [seeds::REBASE_LEDGER], bump = rebase_ledger.bump)]
    pub rebase_ledger: Account<'info, RebaseLedger>,

    /// The caller's holder account
    #[account(
        mut,
        seeds = [seeds::HOLDER, owner.key().as_ref()],
        bump = holder.bump
    )]
    pub holder: Account<'info, Holder>,

    /// The account toggling its own flag
    pub owner: Signer<'info>,
}

/// Freezes (or re-enables) rebasing for the caller's balance.
///
/// Opting out converts shares to a raw balance at the current index; the
/// balance then stays fixed across future index updates. Opting back in
/// converts the raw balance to shares at the current index. Both conversions
/// floor, so a round trip can shed index-granularity dust but never gains.
pub fn disable_rebase(ctx: Context<DisableRebase>, disable: bool) -> Result<()> {
    let ledger = &mut ctx.accounts.rebase_ledger;
    let holder = &mut ctx.accounts.holder;
    require!(
        holder.opted_out != disable,
        DisableRebaseErrorCode::NoChange
    );

    if disable {
        let raw = holder.balance(ledger.rebase_index)?;
        ledger.total_shares = ledger
            .total_shares
            .checked_sub(holder.shares)
            .ok_or(DisableRebaseErrorCode::MathOverflow)?;
        ledger.opted_out_supply = ledger
            .opted_out_supply
            .checked_add(raw)
            .ok_or(DisableRebaseErrorCode::MathOverflow)?;
        holder.shares = 0;
        holder.raw_balance = raw;
        holder.opted_out = true;
    } else {
        let shares = mul_div(
            holder.raw_balance as u128,
            ONE,
            ledger.rebase_index,
            Rounding::Floor,
        )
        .ok_or(DisableRebaseErrorCode::MathOverflow)?;
        ledger.total_shares = ledger
            .total_shares
            .checked_add(shares)
            .ok_or(DisableRebaseErrorCode::MathOverflow)?;
        ledger.opted_out_supply = ledger
            .opted_out_supply
            .checked_sub(holder.raw_balance)
            .ok_or(DisableRebaseErrorCode::MathOverflow)?;
        holder.shares = shares;
        holder.raw_balance = 0;
        holder.opted_out = false;
    }

    let balance = holder.balance(ledger.rebase_index)?;
    msg!(
        "Rebase opt-out set: account={}, opted_out={}, balance={}",
        holder.owner,
        disable,
        balance
    );
    emit!(RebaseOptOutSetEvent {
        account: holder.owner,
        opted_out: disable,
        balance,
    });

    Ok(())
}

#[error_code]
pub enum DisableRebaseErrorCode {
    #[msg("No change: account is already in the requested rebase mode")]
    NoChange,

    #[msg("Math overflow")]
    MathOverflow,
}
