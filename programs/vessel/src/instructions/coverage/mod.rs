pub mod compact_coverage_checkpoints;
pub mod coverage_state;
pub mod set_coverage_ratio;

pub use compact_coverage_checkpoints::*;
pub use coverage_state::*;
pub use set_coverage_ratio::*;
