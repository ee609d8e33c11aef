use anchor_lang::prelude::*;

/// Price adapter for one collateral asset
///
/// The price feed's internal mechanics are out of scope; the engine consumes
/// the posted price through floor-rounded conversions and rejects prices older
/// than the configured staleness bound (fail-closed, no fallback).
#[account]
#[derive(InitSpace)]
pub struct OracleAdapter {
    /// Collateral mint this adapter prices
    pub asset_mint: Pubkey,
    /// Authority permitted to post price updates
    pub authority: Pubkey,
    /// Value of one whole collateral unit in whole stable tokens, 1e18 precision
    pub price: u128,
    /// Unix timestamp of the last price update
    pub last_updated: i64,
    /// PDA bump seed for account derivation
    pub bump: u8,
}

#[error_code]
pub enum OracleErrorCode {
    #[msg("Oracle price is older than the accepted staleness bound")]
    StalePrice,
}

impl OracleAdapter {
    /// Fails when the posted price is older than `max_age` seconds at `now`.
    pub fn check_staleness(&self, now: i64, max_age: u64) -> Result<()> {
        let age = now.saturating_sub(self.last_updated).max(0) as u64;
        require!(age <= max_age, OracleErrorCode::StalePrice);
        Ok(())
    }
}
