//! Top-level error aggregating every subsystem error.

use super::error_code::KeyscanErrorCode;
use super::{ConfigError, ContractError};
use crate::constants::INTERNAL_ERROR_MESSAGE;

/// Errors surfaced by the keyscan crates.
#[derive(Debug, thiserror::Error)]
pub enum KeyscanError {
    #[error("Contract error: {0}")]
    Contract(#[from] ContractError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type KeyscanResult<T> = Result<T, KeyscanError>;

impl KeyscanError {
    /// Message safe to show an end client. Internal contract details are
    /// replaced by a generic text; feedback validation keeps its reason.
    pub fn public_message(&self) -> String {
        match self {
            Self::Contract(ContractError::InvalidFeedback { reason }) => reason.clone(),
            Self::Contract(_) | Self::Config(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl KeyscanErrorCode for KeyscanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Contract(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }

    fn is_retryable(&self) -> bool {
        match self {
            Self::Contract(e) => e.is_retryable(),
            Self::Config(e) => e.is_retryable(),
        }
    }
}
