use crate::constants::seeds;
use crate::state::State;
use anchor_lang::prelude::*;

/// Event emitted when the oracle staleness bound is changed
#[event]
pub struct MaxPriceAgeSetEvent {
    /// The previous bound in seconds
    pub old_max_price_age: u64,
    /// The new bound in seconds
    pub new_max_price_age: u64,
}

/// Account structure for updating the oracle staleness bound
#[derive(Accounts)]
pub struct SetMaxPriceAge<'info> {
    /// Program state account containing the admin authorization
    #[account(
        mut,
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = admin.key() == state.admin @ SetMaxPriceAgeErrorCode::Unauthorized
    )]
    pub state: Account<'info, State>,

    /// The signer authorizing the update, must be the admin
    pub admin: Signer<'info>,
}

/// Updates how old an oracle price may be before mints and redemption
/// requests reject it.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `new_max_price_age` - Maximum accepted price age in seconds
pub fn set_max_price_age(ctx: Context<SetMaxPriceAge>, new_max_price_age: u64) -> Result<()> {
    require!(new_max_price_age > 0, SetMaxPriceAgeErrorCode::ZeroAge);

    let state = &mut ctx.accounts.state;
    require!(
        state.max_price_age != new_max_price_age,
        SetMaxPriceAgeErrorCode::NoChange
    );

    let old_max_price_age = state.max_price_age;
    state.max_price_age = new_max_price_age;

    emit!(MaxPriceAgeSetEvent {
        old_max_price_age,
        new_max_price_age
    });

    Ok(())
}

#[error_code]
pub enum SetMaxPriceAgeErrorCode {
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Maximum price age cannot be zero")]
    ZeroAge,

    #[msg("Maximum price age is already set to this value")]
    NoChange,
}
