pub mod claim_tokens;
pub mod extend_claim_timestamp;
pub mod redemption_state;
pub mod request_tokens;

pub use claim_tokens::*;
pub use extend_claim_timestamp::*;
pub use redemption_state::*;
pub use request_tokens::*;
