pub mod withdraw_funds;

pub use withdraw_funds::*;
