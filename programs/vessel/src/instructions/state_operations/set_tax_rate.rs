use crate::constants::{seeds, ONE};
use crate::state::State;
use anchor_lang::prelude::*;

/// Event emitted when the rebase tax rate is changed
#[event]
pub struct TaxRateSetEvent {
    /// The previous rate, 1e18-scaled
    pub old_tax_rate: u128,
    /// The new rate, 1e18-scaled
    pub new_tax_rate: u128,
}

/// Account structure for updating the rebase tax rate
#[derive(Accounts)]
pub struct SetTaxRate<'info> {
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

/// Updates the fraction of each rebase gain diverted to the fee collector.
///
/// Takes effect on the next rebase; the rate is sampled when an index update
/// is applied, not when the rate is set.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `new_tax_rate` - 1e18-scaled fraction in [0, 1e18]
pub fn set_tax_rate(ctx: Context<SetTaxRate>, new_tax_rate: u128) -> Result<()> {
    require!(new_tax_rate <= ONE, SetTaxRateErrorCode::RateTooHigh);

    let state = &mut ctx.accounts.state;
    require!(state.tax_rate != new_tax_rate, SetTaxRateErrorCode::NoChange);

    let old_tax_rate = state.tax_rate;
    state.tax_rate = new_tax_rate;

    emit!(TaxRateSetEvent {
        old_tax_rate,
        new_tax_rate
    });

    Ok(())
}

#[error_code]
pub enum SetTaxRateErrorCode {
    #[msg("Tax rate cannot exceed 100%")]
    RateTooHigh,

    #[msg("Tax rate is already set to this value")]
    NoChange,
}
