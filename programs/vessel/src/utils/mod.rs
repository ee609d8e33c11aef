pub mod math_utils;
pub mod pricing;
pub mod rebase_math;
pub mod token_utils;

pub use math_utils::*;
pub use pricing::*;
pub use rebase_math::*;
pub use token_utils::*;
