use crate::constants::seeds;
use crate::state::{CollateralVaultAuthority, State};
use anchor_lang::prelude::*;

/// Account structure for initializing the collateral vault authority.
#[derive(Accounts)]
pub struct InitializeVaultAuthority<'info> {
    /// Program state, ensures `boss` is authorized.
    #[account(seeds = [seeds::STATE], bump = state.bump, has_one = boss)]
    pub state: Account<'info, State>,

    /// The vault authority PDA that will own all collateral token accounts.
    #[account(
        init,
        payer = boss,
        space = 8 + CollateralVaultAuthority::INIT_SPACE,
        seeds = [seeds::COLLATERAL_VAULT_AUTHORITY],
        bump
    )]
    pub vault_authority: Account<'info, CollateralVaultAuthority>,

    /// The signer funding and authorizing the initialization, must be the boss.
    #[account(mut)]
    pub boss: Signer<'info>,

    /// Solana System program for account creation and rent payment.
    pub system_program: Program<'info, System>,
}

/// Initializes the collateral vault authority PDA. One authority controls the
/// vault token accounts of every supported asset.
pub fn initialize_vault_authority(ctx: Context<InitializeVaultAuthority>) -> Result<()> {
    ctx.accounts.vault_authority.bump = ctx.bumps.vault_authority;
    Ok(())
}
