pub mod disable_rebase;
pub mod rebase_state;
pub mod set_rebase_index;

pub use disable_rebase::*;
pub use rebase_state::*;
pub use set_rebase_index::*;
