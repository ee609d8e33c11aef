use anchor_lang::prelude::*;

/// Global program state containing governance and configuration settings
///
/// Stores the core program authority structure, role assignments, and the
/// economic parameters (claim delay, tax rate, price staleness bound) that
/// govern minting, redemption, and rebase taxation.
#[account]
#[derive(InitSpace)]
pub struct State {
    /// Primary program authority with full control over all operations
    pub boss: Pubkey,
    /// Proposed new boss for two-step ownership transfer
    pub proposed_boss: Pubkey,
    /// Operational admin: asset registry, coverage ratio, claim delay
    pub admin: Pubkey,
    /// Role permitted to sweep collateral surplus beyond pending claims
    pub custodian: Pubkey,
    /// Role permitted to manage the mint/redeem whitelist
    pub whitelister: Pubkey,
    /// Authority permitted to publish rebase index updates
    pub rebase_manager: Pubkey,
    /// Account credited with the tax minted on each rebase increase
    pub fee_collector: Pubkey,
    /// Mandatory delay in seconds between a redemption request and its claim
    pub claim_delay: u64,
    /// Fraction of each rebase increase siphoned to the fee collector (1e18 = 100%)
    pub tax_rate: u128,
    /// Maximum accepted oracle price age in seconds
    pub max_price_age: u64,
    /// Emergency kill switch to halt new mints and redemption requests
    pub is_killed: bool,
    /// PDA bump seed for account derivation
    pub bump: u8,
    /// Reserved space for future program state extensions
    pub reserved: [u8; 56],
}

/// Program-derived authority for controlling collateral vault token accounts
///
/// This PDA owns one associated token account per supported collateral asset
/// and signs outbound transfers for claims and custodial withdrawals.
#[account]
#[derive(InitSpace)]
pub struct CollateralVaultAuthority {
    /// PDA bump seed for account derivation
    pub bump: u8,
}
