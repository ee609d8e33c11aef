use crate::constants::seeds;
use crate::state::State;
use anchor_lang::prelude::*;

/// Event emitted when the admin role is reassigned
#[event]
pub struct AdminSetEvent {
    /// The previous admin's public key
    pub old_admin: Pubkey,
    /// The new admin's public key
    pub new_admin: Pubkey,
}

/// Account structure for reassigning the admin role
#[derive(Accounts)]
pub struct SetAdmin<'info> {
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

/// Assigns the admin role to a new account.
///
/// The admin manages the asset registry, oracles, claim timing and pricing
/// staleness, but cannot touch treasury roles or the tax rate.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `new_admin` - Public key to receive the admin role
pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
    let state = &mut ctx.accounts.state;
    require!(state.admin != new_admin, SetAdminErrorCode::NoChange);

    let old_admin = state.admin;
    state.admin = new_admin;

    emit!(AdminSetEvent {
        old_admin,
        new_admin
    });

    Ok(())
}

#[error_code]
pub enum SetAdminErrorCode {
    #[msg("Admin is already set to this address")]
    NoChange,
}
