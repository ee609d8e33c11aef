use anchor_lang::prelude::*;

/// Per-user mint/redeem authorization flag, managed by the whitelister role.
#[account]
#[derive(InitSpace)]
pub struct WhitelistEntry {
    /// The wallet this entry describes
    pub user: Pubkey,
    /// Whether the user may mint and request redemptions
    pub whitelisted: bool,
    /// PDA bump seed for account derivation
    pub bump: u8,
}
