use crate::constants::seeds;
use crate::state::State;
use anchor_lang::prelude::*;

/// Event emitted when the rebase manager role is reassigned
#[event]
pub struct RebaseManagerSetEvent {
    /// The previous rebase manager's public key
    pub old_rebase_manager: Pubkey,
    /// The new rebase manager's public key
    pub new_rebase_manager: Pubkey,
}

/// Account structure for reassigning the rebase manager role
#[derive(Accounts)]
pub struct SetRebaseManager<'info> {
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

/// Assigns the rebase manager role to a new account.
///
/// The rebase manager is the only account that may post new rebase index
/// values, so this role controls supply growth.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `new_rebase_manager` - Public key to receive the rebase manager role
pub fn set_rebase_manager(ctx: Context<SetRebaseManager>, new_rebase_manager: Pubkey) -> Result<()> {
    let state = &mut ctx.accounts.state;
    require!(
        state.rebase_manager != new_rebase_manager,
        SetRebaseManagerErrorCode::NoChange
    );

    let old_rebase_manager = state.rebase_manager;
    state.rebase_manager = new_rebase_manager;

    emit!(RebaseManagerSetEvent {
        old_rebase_manager,
        new_rebase_manager
    });

    Ok(())
}

#[error_code]
pub enum SetRebaseManagerErrorCode {
    #[msg("Rebase manager is already set to this address")]
    NoChange,
}
