use crate::constants::seeds;
use crate::instructions::whitelist::WhitelistEntry;
use crate::state::State;
use anchor_lang::prelude::*;

/// Event emitted when a user's whitelist status changes
#[event]
pub struct WhitelistStatusSetEvent {
    /// The user whose status changed
    pub user: Pubkey,
    /// The new status
    pub whitelisted: bool,
}

/// Account structure for updating a user's whitelist entry
///
/// The entry PDA is created on first use so the whitelister never has to
/// pre-provision accounts for new users.
#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct SetWhitelistStatus<'info> {
    /// Program state account containing the whitelister authorization
    #[account(
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = whitelister.key() == state.whitelister @ SetWhitelistStatusErrorCode::Unauthorized
    )]
    pub state: Box<Account<'info, State>>,

    /// Whitelist entry PDA for the user, created if it does not exist
    #[account(
        init_if_needed,
        payer = whitelister,
        space = 8 + WhitelistEntry::INIT_SPACE,
        seeds = [seeds::WHITELIST_ENTRY, user.as_ref()],
        bump
    )]
    pub whitelist_entry: Box<Account<'info, WhitelistEntry>>,

    /// The signer authorizing the update, must be the whitelister
    #[account(mut)]
    pub whitelister: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Sets a user's whitelist status.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `user` - The user whose minting access is being set
/// * `whitelisted` - Whether the user may mint
///
/// # Errors
/// Returns [`SetWhitelistStatusErrorCode::NoChange`] if the status already
/// matches for an existing entry.
pub fn set_whitelist_status(
    ctx: Context<SetWhitelistStatus>,
    user: Pubkey,
    whitelisted: bool,
) -> Result<()> {
    let entry = &mut ctx.accounts.whitelist_entry;
    if entry.user == Pubkey::default() {
        entry.user = user;
        entry.bump = ctx.bumps.whitelist_entry;
    } else {
        require!(
            entry.whitelisted != whitelisted,
            SetWhitelistStatusErrorCode::NoChange
        );
    }
    entry.whitelisted = whitelisted;

    msg!("Whitelist status for {} set to {}", user, whitelisted);
    emit!(WhitelistStatusSetEvent { user, whitelisted });

    Ok(())
}

#[error_code]
pub enum SetWhitelistStatusErrorCode {
    #[msg("Unauthorized: whitelister signature required")]
    Unauthorized,

    #[msg("Whitelist status is already set to this value")]
    NoChange,
}
