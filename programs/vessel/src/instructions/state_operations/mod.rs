pub mod accept_boss;
pub mod propose_boss;
pub mod set_admin;
pub mod set_claim_delay;
pub mod set_custodian;
pub mod set_fee_collector;
pub mod set_kill_switch;
pub mod set_max_price_age;
pub mod set_rebase_manager;
pub mod set_tax_rate;
pub mod set_whitelister;

pub use accept_boss::*;
pub use propose_boss::*;
pub use set_admin::*;
pub use set_claim_delay::*;
pub use set_custodian::*;
pub use set_fee_collector::*;
pub use set_kill_switch::*;
pub use set_max_price_age::*;
pub use set_rebase_manager::*;
pub use set_tax_rate::*;
pub use set_whitelister::*;
