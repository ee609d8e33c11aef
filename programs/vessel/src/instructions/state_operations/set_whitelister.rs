use crate::constants::seeds;
use crate::state::State;
use anchor_lang::prelude::*;

/// Event emitted when the whitelister role is reassigned
#[event]
pub struct WhitelisterSetEvent {
    /// The previous whitelister's public key
    pub old_whitelister: Pubkey,
    /// The new whitelister's public key
    pub new_whitelister: Pubkey,
}

/// Account structure for reassigning the whitelister role
#[derive(Accounts)]
pub struct SetWhitelister<'info> {
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

/// Assigns the whitelister role to a new account.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `new_whitelister` - Public key to receive the whitelister role
pub fn set_whitelister(ctx: Context<SetWhitelister>, new_whitelister: Pubkey) -> Result<()> {
    let state = &mut ctx.accounts.state;
    require!(
        state.whitelister != new_whitelister,
        SetWhitelisterErrorCode::NoChange
    );

    let old_whitelister = state.whitelister;
    state.whitelister = new_whitelister;

    emit!(WhitelisterSetEvent {
        old_whitelister,
        new_whitelister
    });

    Ok(())
}

#[error_code]
pub enum SetWhitelisterErrorCode {
    #[msg("Whitelister is already set to this address")]
    NoChange,
}
