use crate::constants::seeds;
use crate::state::State;
use anchor_lang::prelude::*;

/// Event emitted when the custodian role is reassigned
#[event]
pub struct CustodianSetEvent {
    /// The previous custodian's public key
    pub old_custodian: Pubkey,
    /// The new custodian's public key
    pub new_custodian: Pubkey,
}

/// Account structure for reassigning the custodian role
#[derive(Accounts)]
pub struct SetCustodian<'info> {
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

/// Assigns the custodian role to a new account.
///
/// The custodian is the only account that may sweep surplus collateral out
/// of the vaults.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `new_custodian` - Public key to receive the custodian role
pub fn set_custodian(ctx: Context<SetCustodian>, new_custodian: Pubkey) -> Result<()> {
    let state = &mut ctx.accounts.state;
    require!(
        state.custodian != new_custodian,
        SetCustodianErrorCode::NoChange
    );

    let old_custodian = state.custodian;
    state.custodian = new_custodian;

    emit!(CustodianSetEvent {
        old_custodian,
        new_custodian
    });

    Ok(())
}

#[error_code]
pub enum SetCustodianErrorCode {
    #[msg("Custodian is already set to this address")]
    NoChange,
}
