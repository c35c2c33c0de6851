//! Error handling for keyscan.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod contract_error;
pub mod error_code;
pub mod keyscan_error;

pub use config_error::ConfigError;
pub use contract_error::ContractError;
pub use error_code::KeyscanErrorCode;
pub use keyscan_error::{KeyscanError, KeyscanResult};
