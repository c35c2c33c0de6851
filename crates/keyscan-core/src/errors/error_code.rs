//! KeyscanErrorCode trait for the transport boundary.

/// Structured error code for the transport collaborator.
/// Every error enum implements this so the HTTP layer can map failures
/// without matching on variants.
pub trait KeyscanErrorCode {
    /// Returns the error code string (e.g., "CONTRACT_VIOLATION").
    fn error_code(&self) -> &'static str;

    /// Whether the caller may retry the same request.
    fn is_retryable(&self) -> bool {
        false
    }

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the transport boundary.
pub const CONTRACT_VIOLATION: &str = "CONTRACT_VIOLATION";
pub const INVALID_FEEDBACK: &str = "INVALID_FEEDBACK";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
