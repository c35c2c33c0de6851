//! Outbound contract violations.

use super::error_code::{self, KeyscanErrorCode};

/// A value that breaks the analysis contract.
///
/// Raised by construct-or-fail constructors and by the assembler's final
/// check. For analysis results these indicate a bug in the pipeline, never
/// bad user input, and are not retryable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContractError {
    #[error("expected {expected} candidates, got {actual}")]
    CandidateCount { expected: usize, actual: usize },

    #[error("candidate at position {position} has rank {rank}")]
    RankOutOfOrder { position: usize, rank: u8 },

    #[error("rank {rank} outside 1..=3")]
    InvalidRank { rank: i64 },

    #[error("{field} = {value} outside [0, 1]")]
    ConfidenceOutOfRange { field: String, value: f64 },

    #[error("low and high confidence both set for top confidence {confidence:.3}")]
    ConflictingFlags { confidence: f64 },

    #[error("{flag} does not match top confidence {confidence:.3}")]
    FlagMismatch { flag: String, confidence: f64 },

    #[error("should_store_sample set although {reason}")]
    SamplingGateViolated { reason: String },

    #[error("storage probability {value} outside [0, 1]")]
    StorageProbabilityOutOfRange { value: f64 },

    #[error("invalid feedback: {reason}")]
    InvalidFeedback { reason: String },
}

impl KeyscanErrorCode for ContractError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFeedback { .. } => error_code::INVALID_FEEDBACK,
            _ => error_code::CONTRACT_VIOLATION,
        }
    }
}
