//! Shared constants for the keyscan decision layer.

/// Keyscan version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Every analysis result carries exactly this many candidates.
pub const RESULT_COUNT: usize = 3;

/// Top confidence at or above which `high_confidence` is set.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.95;

/// Top confidence strictly below which `low_confidence` is set.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.60;

/// Minimum top confidence for an input to be retained as a training sample.
pub const STORAGE_CONFIDENCE_THRESHOLD: f64 = 0.75;

/// Minimum (raw) manufacturer-hint confidence that enables brand re-ranking.
pub const MANUFACTURER_OVERRIDE_THRESHOLD: f64 = 0.85;

/// Category assigned to synthetic filler candidates.
pub const PLACEHOLDER_TYPE: &str = "unknown";

/// Explanation assigned to synthetic filler candidates.
pub const PLACEHOLDER_EXPLAIN_TEXT: &str = "insufficient candidate";

/// Fields the client may correct manually: brand, model, category,
/// orientation, recognized text. Wire values are fixed by the service.
pub const CORRECTABLE_FIELDS: [&str; 5] = ["marca", "modelo", "tipo", "orientacion", "ocr_text"];

/// Generic message shown to end clients when an internal contract check fails.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error";
