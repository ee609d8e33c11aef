pub mod initialize;
pub mod initialize_coverage_tracker;
pub mod initialize_rebase_ledger;
pub mod initialize_vault_authority;

pub use initialize::*;
pub use initialize_coverage_tracker::*;
pub use initialize_rebase_ledger::*;
pub use initialize_vault_authority::*;
