use crate::constants::seeds;
use crate::instructions::registry::AssetConfig;
use crate::state::State;
use anchor_lang::prelude::*;

#[event]
pub struct SupportedAssetRemovedEvent {
    pub mint: Pubkey,
}

/// Account structure for marking a collateral asset as removed.
///
/// The entry is flagged, never deleted: in-flight redemption requests against
/// the asset must remain claimable.
#[derive(Accounts)]
pub struct RemoveSupportedAsset<'info> {
    /// Program state account containing the admin authorization
    #[account(
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = admin.key() == state.admin @ RemoveSupportedAssetErrorCode::Unauthorized
    )]
    pub state: Account<'info, State>,

    /// The registry entry to flag
    #[account(
        mut,
        seeds = [seeds::ASSET_CONFIG, asset_config.mint.as_ref()],
        bump = asset_config.bump
    )]
    pub asset_config: Account<'info, AssetConfig>,

    /// The signer authorizing the removal, must be the admin
    pub admin: Signer<'info>,
}

/// Marks an asset as removed, rejecting it for new mints and requests while
/// leaving existing obligations claimable.
pub fn remove_supported_asset(ctx: Context<RemoveSupportedAsset>) -> Result<()> {
    let asset_config = &mut ctx.accounts.asset_config;
    require!(
        !asset_config.removed,
        RemoveSupportedAssetErrorCode::AlreadyRemoved
    );
    asset_config.removed = true;

    msg!("Supported asset removed: {}", asset_config.mint);
    emit!(SupportedAssetRemovedEvent {
        mint: asset_config.mint,
    });

    Ok(())
}

#[error_code]
pub enum RemoveSupportedAssetErrorCode {
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Asset is already removed")]
    AlreadyRemoved,
}
