use crate::constants::seeds;
use crate::instructions::oracle::OracleAdapter;
use crate::instructions::registry::AssetConfig;
use crate::state::State;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

/// Event emitted when a collateral asset is added to the registry
#[event]
pub struct SupportedAssetAddedEvent {
    /// The collateral mint that was added
    pub mint: Pubkey,
    /// Oracle adapter assigned to the asset
    pub oracle: Pubkey,
}

/// Account structure for adding a supported collateral asset
///
/// The registry entry is a PDA derived from the collateral mint, so a second
/// `add` for the same mint fails at account creation time whether the entry is
/// active or removed.
#[derive(Accounts)]
pub struct AddSupportedAsset<'info> {
    /// Program state account containing the admin authorization
    #[account(
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = admin.key() == state.admin @ AddSupportedAssetErrorCode::Unauthorized
    )]
    pub state: Account<'info, State>,

    /// The registry entry for the asset, created here
    #[account(
        init,
        payer = admin,
        space = 8 + AssetConfig::INIT_SPACE,
        seeds = [seeds::ASSET_CONFIG, collateral_mint.key().as_ref()],
        bump
    )]
    pub asset_config: Account<'info, AssetConfig>,

    /// The collateral mint being registered; must be a live mint account,
    /// which rules out the zero address and non-token accounts
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    /// Oracle adapter that prices this asset
    #[account(
        constraint = oracle_adapter.asset_mint == collateral_mint.key()
            @ AddSupportedAssetErrorCode::OracleAssetMismatch
    )]
    pub oracle_adapter: Account<'info, OracleAdapter>,

    /// The signer authorizing the addition, must be the admin
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Solana System program for account creation and rent payment
    pub system_program: Program<'info, System>,
}

/// Adds a collateral asset to the supported-asset registry.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
///
/// # Access Control
/// - Only the admin can call this instruction
///
/// # Effects
/// - Creates the `AssetConfig` PDA for the mint with `removed = false`
/// - Assigns the oracle adapter used to price mints and redemption requests
///
/// # Events
/// * `SupportedAssetAddedEvent` - Emitted with mint and oracle addresses
pub fn add_supported_asset(ctx: Context<AddSupportedAsset>) -> Result<()> {
    let asset_config = &mut ctx.accounts.asset_config;
    asset_config.mint = ctx.accounts.collateral_mint.key();
    asset_config.oracle = ctx.accounts.oracle_adapter.key();
    asset_config.removed = false;
    asset_config.pending_claims = 0;
    asset_config.bump = ctx.bumps.asset_config;

    msg!("Supported asset added: {}", asset_config.mint);
    emit!(SupportedAssetAddedEvent {
        mint: asset_config.mint,
        oracle: asset_config.oracle,
    });

    Ok(())
}

/// Error codes for asset registration
#[error_code]
pub enum AddSupportedAssetErrorCode {
    /// Caller is not the admin
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    /// The oracle adapter prices a different asset
    #[msg("Oracle adapter does not price this asset")]
    OracleAssetMismatch,
}
