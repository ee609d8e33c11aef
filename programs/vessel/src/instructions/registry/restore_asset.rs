use crate::constants::seeds;
use crate::instructions::registry::AssetConfig;
use crate::state::State;
use anchor_lang::prelude::*;

#[event]
pub struct AssetRestoredEvent {
    pub mint: Pubkey,
}

/// Account structure for restoring a previously removed asset.
#[derive(Accounts)]
pub struct RestoreAsset<'info> {
    /// Program state account containing the admin authorization
    #[account(
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = admin.key() == state.admin @ RestoreAssetErrorCode::Unauthorized
    )]
    pub state: Account<'info, State>,

    /// The registry entry to restore
    #[account(
        mut,
        seeds = [seeds::ASSET_CONFIG, asset_config.mint.as_ref()],
        bump = asset_config.bump
    )]
    pub asset_config: Account<'info, AssetConfig>,

    /// The signer authorizing the restoration, must be the admin
    pub admin: Signer<'info>,
}

/// Restores a removed asset, re-enabling mints and redemption requests.
pub fn restore_asset(ctx: Context<RestoreAsset>) -> Result<()> {
    let asset_config = &mut ctx.accounts.asset_config;
    require!(asset_config.removed, RestoreAssetErrorCode::NotRemoved);
    asset_config.removed = false;

    msg!("Asset restored: {}", asset_config.mint);
    emit!(AssetRestoredEvent {
        mint: asset_config.mint,
    });

    Ok(())
}

#[error_code]
pub enum RestoreAssetErrorCode {
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Asset is not removed")]
    NotRemoved,
}
