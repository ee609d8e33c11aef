pub mod add_supported_asset;
pub mod asset_config_state;
pub mod modify_oracle_for_asset;
pub mod remove_supported_asset;
pub mod restore_asset;

pub use add_supported_asset::*;
pub use asset_config_state::*;
pub use modify_oracle_for_asset::*;
pub use remove_supported_asset::*;
pub use restore_asset::*;
