/// PDA seeds used throughout the program for account derivation
pub mod seeds {
    /// Seed for the program state account
    pub const STATE: &[u8] = b"state";

    /// Seed for the rebase ledger account
    pub const REBASE_LEDGER: &[u8] = b"rebase_ledger";

    /// Seed for per-account holder accounts of the stable token
    pub const HOLDER: &[u8] = b"holder";

    /// Seed for per-asset registry entries
    pub const ASSET_CONFIG: &[u8] = b"asset_config";

    /// Seed for oracle adapter accounts
    pub const ORACLE_ADAPTER: &[u8] = b"oracle_adapter";

    /// Seed for the coverage ratio checkpoint series
    pub const COVERAGE_TRACKER: &[u8] = b"coverage_tracker";

    /// Seed for per-(user, asset) redemption queues
    pub const REDEMPTION_QUEUE: &[u8] = b"redemption_queue";

    /// Seed for individual redemption request accounts
    pub const REDEMPTION_REQUEST: &[u8] = b"redemption_request";

    /// Seed for the collateral vault authority account
    pub const COLLATERAL_VAULT_AUTHORITY: &[u8] = b"collateral_vault_authority";

    /// Seed for per-user whitelist entries
    pub const WHITELIST_ENTRY: &[u8] = b"whitelist_entry";
}

/// Fixed-point unit: 1e18 represents 100% / a ratio of 1.0
pub const ONE: u128 = 1_000_000_000_000_000_000;

/// Decimals of the stable token tracked by the rebase ledger
pub const STABLE_DECIMALS: u8 = 9;

/// Maximum number of coverage ratio checkpoints the tracker can hold
pub const MAX_CHECKPOINTS: usize = 64;

/// Default bound on oracle price age, in seconds
pub const DEFAULT_MAX_PRICE_AGE: u64 = 3_600;
