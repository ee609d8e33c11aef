use crate::constants::seeds;
use crate::state::State;
use anchor_lang::prelude::*;

/// Event emitted when the redemption claim delay is changed
#[event]
pub struct ClaimDelaySetEvent {
    /// The previous delay in seconds
    pub old_claim_delay: u64,
    /// The new delay in seconds
    pub new_claim_delay: u64,
}

/// Account structure for updating the redemption claim delay
#[derive(Accounts)]
pub struct SetClaimDelay<'info> {
    /// Program state account containing the admin authorization
    #[account(
        mut,
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = admin.key() == state.admin @ SetClaimDelayErrorCode::Unauthorized
    )]
    pub state: Account<'info, State>,

    /// The signer authorizing the update, must be the admin
    pub admin: Signer<'info>,
}

/// Updates the redemption claim delay.
///
/// Applies to requests created after this call; existing requests keep the
/// `claimable_after` they were stamped with.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `new_claim_delay` - Seconds a redemption request must wait before it
///   becomes claimable
pub fn set_claim_delay(ctx: Context<SetClaimDelay>, new_claim_delay: u64) -> Result<()> {
    let state = &mut ctx.accounts.state;
    require!(
        state.claim_delay != new_claim_delay,
        SetClaimDelayErrorCode::NoChange
    );

    let old_claim_delay = state.claim_delay;
    state.claim_delay = new_claim_delay;

    emit!(ClaimDelaySetEvent {
        old_claim_delay,
        new_claim_delay
    });

    Ok(())
}

#[error_code]
pub enum SetClaimDelayErrorCode {
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Claim delay is already set to this value")]
    NoChange,
}
