use crate::constants::seeds;
use crate::state::State;
use anchor_lang::prelude::*;

/// Event emitted when the fee collector is reassigned
#[event]
pub struct FeeCollectorSetEvent {
    /// The previous fee collector's public key
    pub old_fee_collector: Pubkey,
    /// The new fee collector's public key
    pub new_fee_collector: Pubkey,
}

/// Account structure for reassigning the fee collector
#[derive(Accounts)]
pub struct SetFeeCollector<'info> {
    /// Program state account, boss-gated
    #[account(
        mut,
        seeds = [seeds::STATE],
        bump = state.bump,
        has_one = boss
    )]
    pub state: Account<'info, State>,

    /// The current boss account
    pub boss: Signer<'info>,
}

/// Assigns the fee collector to a new account.
///
/// Tax minted on future rebases is credited to the new collector; balances
/// already credited to the previous collector are untouched.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `new_fee_collector` - Public key to receive future rebase taxes
pub fn set_fee_collector(ctx: Context<SetFeeCollector>, new_fee_collector: Pubkey) -> Result<()> {
    require!(
        new_fee_collector != Pubkey::default(),
        SetFeeCollectorErrorCode::InvalidFeeCollector
    );

    let state = &mut ctx.accounts.state;
    require!(
        state.fee_collector != new_fee_collector,
        SetFeeCollectorErrorCode::NoChange
    );

    let old_fee_collector = state.fee_collector;
    state.fee_collector = new_fee_collector;

    emit!(FeeCollectorSetEvent {
        old_fee_collector,
        new_fee_collector
    });

    Ok(())
}

#[error_code]
pub enum SetFeeCollectorErrorCode {
    #[msg("Fee collector is already set to this address")]
    NoChange,

    #[msg("Fee collector cannot be the default address")]
    InvalidFeeCollector,
}
