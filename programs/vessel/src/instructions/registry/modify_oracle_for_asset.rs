use crate::constants::seeds;
use crate::instructions::oracle::OracleAdapter;
use crate::instructions::registry::AssetConfig;
use crate::state::State;
use anchor_lang::prelude::*;

#[event]
pub struct OracleModifiedEvent {
    pub mint: Pubkey,
    pub old_oracle: Pubkey,
    pub new_oracle: Pubkey,
}

/// Account structure for swapping the oracle adapter of a registered asset.
#[derive(Accounts)]
pub struct ModifyOracleForAsset<'info> {
    /// Program state account containing the admin authorization
    #[account(
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = admin.key() == state.admin @ ModifyOracleForAssetErrorCode::Unauthorized
    )]
    pub state: Account<'info, State>,

    /// The registry entry whose oracle is swapped
    #[account(
        mut,
        seeds = [seeds::ASSET_CONFIG, asset_config.mint.as_ref()],
        bump = asset_config.bump
    )]
    pub asset_config: Account<'info, AssetConfig>,

    /// The replacement oracle adapter; must price the same asset
    #[account(
        constraint = new_oracle_adapter.asset_mint == asset_config.mint
            @ ModifyOracleForAssetErrorCode::OracleAssetMismatch
    )]
    pub new_oracle_adapter: Account<'info, OracleAdapter>,

    /// The signer authorizing the swap, must be the admin
    pub admin: Signer<'info>,
}

/// Swaps the price adapter reference of a registered asset.
///
/// Already-created redemption requests are unaffected: their collateral
/// amounts were fixed at request time.
pub fn modify_oracle_for_asset(ctx: Context<ModifyOracleForAsset>) -> Result<()> {
    let asset_config = &mut ctx.accounts.asset_config;
    let new_oracle = ctx.accounts.new_oracle_adapter.key();
    require!(
        new_oracle != asset_config.oracle,
        ModifyOracleForAssetErrorCode::NoChange
    );

    let old_oracle = asset_config.oracle;
    asset_config.oracle = new_oracle;

    msg!(
        "Oracle modified for {}: {} -> {}",
        asset_config.mint,
        old_oracle,
        new_oracle
    );
    emit!(OracleModifiedEvent {
        mint: asset_config.mint,
        old_oracle,
        new_oracle,
    });

    Ok(())
}

#[error_code]
pub enum ModifyOracleForAssetErrorCode {
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Oracle adapter does not price this asset")]
    OracleAssetMismatch,

    #[msg("No change: oracle adapter is identical to the current one")]
    NoChange,
}
