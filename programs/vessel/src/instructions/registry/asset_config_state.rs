use anchor_lang::prelude::*;

/// Registry entry for a supported collateral asset
///
/// Never closed: an asset referenced by any unresolved redemption request must
/// remain resolvable even after removal, so removal only flips a flag. Removed
/// assets are rejected for new mints and requests but stay valid for claims
/// and custodial withdrawals.
#[account]
#[derive(InitSpace)]
pub struct AssetConfig {
    /// The collateral mint this entry describes
    pub mint: Pubkey,
    /// Oracle adapter account used to price this asset
    pub oracle: Pubkey,
    /// When true the asset is rejected for new mints and requests
    pub removed: bool,
    /// Collateral obligated to all outstanding redemption requests, base units
    pub pending_claims: u64,
    /// PDA bump seed for account derivation
    pub bump: u8,
}
