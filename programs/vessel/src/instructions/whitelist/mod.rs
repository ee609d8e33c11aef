pub mod set_whitelist_status;
pub mod whitelist_state;

pub use set_whitelist_status::*;
pub use whitelist_state::*;
