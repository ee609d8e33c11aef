use anchor_lang::prelude::*;

use crate::constants::seeds;
use crate::state::State;

/// Event emitted when the kill switch state is changed
#[event]
pub struct KillSwitchToggledEvent {
    /// Whether the kill switch was enabled (true) or disabled (false)
    pub enabled: bool,
    /// The account that toggled the kill switch
    pub signer: Pubkey,
}

/// Account structure for toggling the emergency kill switch
#[derive(Accounts)]
pub struct SetKillSwitch<'info> {
    /// Program state holding the `is_killed` flag; mints and new redemption
    /// requests check it before creating obligations
    #[account(
        mut,
        seeds = [seeds::STATE],
        bump = state.bump,
    )]
    pub state: Box<Account<'info, State>>,

    /// The account attempting the toggle; authorization is checked in the
    /// handler because it differs by direction
    pub signer: Signer<'info>,
}

/// Toggles the emergency kill switch.
///
/// When enabled, `mint_tokens` and `request_tokens` reject; claims of
/// existing requests and custodial withdrawals stay open so obligations
/// remain serviceable during an incident. Authorization is asymmetric so an
/// operational responder can halt the program quickly, while bringing it
/// back requires the top authority:
///
/// - Enable: boss or admin
/// - Disable: boss only
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `enable` - The target kill switch state
pub fn set_kill_switch(ctx: Context<SetKillSwitch>, enable: bool) -> Result<()> {
    let state = &mut ctx.accounts.state;
    let signer_key = ctx.accounts.signer.key();

    let is_boss = signer_key == state.boss;
    let is_admin = signer_key == state.admin;

    if enable {
        require!(
            is_boss || is_admin,
            SetKillSwitchErrorCode::UnauthorizedToEnable
        );
    } else {
        require!(is_boss, SetKillSwitchErrorCode::OnlyBossCanDisable);
    }
    state.is_killed = enable;

    msg!("Kill switch set to {} by {}", enable, signer_key);
    emit!(KillSwitchToggledEvent {
        enabled: enable,
        signer: signer_key,
    });

    Ok(())
}

#[error_code]
pub enum SetKillSwitchErrorCode {
    #[msg("Only boss can disable the kill switch")]
    OnlyBossCanDisable,

    #[msg("Unauthorized to enable the kill switch")]
    UnauthorizedToEnable,
}
