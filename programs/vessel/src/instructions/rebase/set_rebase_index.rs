use crate::constants::seeds;
use crate::instructions::rebase::{credit_holder, Holder, RebaseLedger};
use crate::state::State;
use crate::utils::rebase_math::collect_on_rebase;
use anchor_lang::prelude::*;

/// Event emitted when the rebase index is updated
#[event]
pub struct RebaseIndexSetEvent {
    /// Index before the update
    pub old_index: u128,
    /// Index requested by the rebase manager
    pub requested_index: u128,
    /// Index actually applied after tax adjustment
    pub applied_index: u128,
    /// Tax minted to the fee collector, in base units
    pub tax_minted: u64,
    /// Nonce of this update
    pub nonce: u64,
}

/// Account structure for publishing a rebase index update
///
/// The fee collector's holder account is created on first use so the tax mint
/// can never fail for lack of a destination.
#[derive(Accounts)]
pub struct SetRebaseIndex<'info> {
    /// Program state containing the rebase manager and fee collector
    #[account(
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = rebase_manager.key() == state.rebase_manager
            @ SetRebaseIndexErrorCode::Unauthorized
    )]
    pub state: Box<Account<'info, State>>,

    /// The global rebase ledger
    #[account(mut, seeds = [seeds::REBASE_LEDGER], bump = rebase_ledger.bump)]
    pub rebase_ledger: Box<Account<'info, RebaseLedger>>,

    /// Fee collector's stable token holder account
    #[account(
        init_if_needed,
        payer = rebase_manager,
        space = 8 + Holder::INIT_SPACE,
        seeds = [seeds::HOLDER, state.fee_collector.as_ref()],
        bump
    )]
    pub fee_collector_holder: Box<Account<'info, Holder>>,

    /// The designated rebase authority (pays for account creation)
    #[account(mut)]
    pub rebase_manager: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Applies a rebase index update with tax collection.
///
/// When the index increases, a `tax_rate` fraction of the supply increase is
/// siphoned to the fee collector: the applied index is recomputed so holders
/// see only the net (post-tax) increase, and the tax is minted **after** the
/// index update so it enters as new shares at the adjusted index. The
/// ordering is load-bearing; minting first would change the resulting index.
///
/// An unchanged index is accepted (no-op rebase with a nonce bump); a
/// decrease is rejected at the token layer.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `new_index` - Requested index with 1e18 precision, nonzero
/// * `nonce` - Must be exactly `ledger.nonce + 1` (replay protection)
///
/// # Events
/// * `RebaseIndexSetEvent` - Emitted with requested and applied indices
pub fn set_rebase_index(ctx: Context<SetRebaseIndex>, new_index: u128, nonce: u64) -> Result<()> {
    require!(new_index != 0, SetRebaseIndexErrorCode::ZeroIndex);

    let ledger = &mut ctx.accounts.rebase_ledger;
    require_eq!(
        nonce,
        ledger
            .nonce
            .checked_add(1)
            .ok_or(SetRebaseIndexErrorCode::MathOverflow)?,
        SetRebaseIndexErrorCode::InvalidNonce
    );
    require!(
        new_index >= ledger.rebase_index,
        SetRebaseIndexErrorCode::IndexDecreased
    );

    let old_index = ledger.rebase_index;
    let outcome = collect_on_rebase(
        ledger.total_shares,
        old_index,
        new_index,
        ctx.accounts.state.tax_rate,
    )?;

    // Index first, fee mint second.
    ledger.rebase_index = outcome.adjusted_index;
    ledger.nonce = nonce;

    if outcome.mint_amount > 0 {
        let fee_holder = &mut ctx.accounts.fee_collector_holder;
        if fee_holder.owner == Pubkey::default() {
            fee_holder.owner = ctx.accounts.state.fee_collector;
            fee_holder.bump = ctx.bumps.fee_collector_holder;
        }
        credit_holder(ledger, fee_holder, outcome.mint_amount)?;
    }

    msg!(
        "Rebase index set: {} -> {} (requested {}), tax minted {}, nonce {}",
        old_index,
        outcome.adjusted_index,
        new_index,
        outcome.mint_amount,
        nonce
    );
    emit!(RebaseIndexSetEvent {
        old_index,
        requested_index: new_index,
        applied_index: outcome.adjusted_index,
        tax_minted: outcome.mint_amount,
        nonce,
    });

    Ok(())
}

/// Error codes for rebase index updates
#[error_code]
pub enum SetRebaseIndexErrorCode {
    /// Caller is not the rebase manager
    #[msg("Unauthorized: rebase manager signature required")]
    Unauthorized,

    /// Zero index supplied
    #[msg("Rebase index must be nonzero")]
    ZeroIndex,

    /// Nonce is not the successor of the ledger nonce
    #[msg("Invalid nonce: must be exactly one above the last applied nonce")]
    InvalidNonce,

    /// Index decrease attempted
    #[msg("Rebase index must not decrease")]
    IndexDecreased,

    /// Arithmetic overflow occurred
    #[msg("Math overflow")]
    MathOverflow,
}
