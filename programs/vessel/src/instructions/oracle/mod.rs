pub mod initialize_oracle_adapter;
pub mod oracle_state;
pub mod post_price;

pub use initialize_oracle_adapter::*;
pub use oracle_state::*;
pub use post_price::*;
