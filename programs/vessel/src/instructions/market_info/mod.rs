pub mod get_balance;
pub mod get_claimable_amount;
pub mod get_rebase_index;

pub use get_balance::*;
pub use get_claimable_amount::*;
pub use get_rebase_index::*;
