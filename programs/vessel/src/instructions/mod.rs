pub mod coverage;
pub mod custody;
pub mod initialization;
pub mod market_info;
pub mod minting;
pub mod oracle;
pub mod rebase;
pub mod redemption;
pub mod registry;
pub mod state_operations;
pub mod whitelist;

pub use coverage::*;
pub use custody::*;
pub use initialization::*;
pub use market_info::*;
pub use minting::*;
pub use oracle::*;
pub use rebase::*;
pub use redemption::*;
pub use registry::*;
pub use state_operations::*;
pub use whitelist::*;
