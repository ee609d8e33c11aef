pub mod mint;

pub use mint::*;
