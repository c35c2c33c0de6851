//! Confidence flags derived from the top-ranked candidate.

use keyscan_core::models::Confidence;

/// Quality flags reported with every analysis.
///
/// The two flags are independent. Confidence in [0.60, 0.95) sets neither;
/// the thresholds do not overlap, so both are never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfidenceFlags {
    /// Top confidence below 0.60.
    pub low_confidence: bool,
    /// Top confidence at or above 0.95.
    pub high_confidence: bool,
}

/// Classify the top candidate's confidence. Pure and total.
pub fn classify(top_confidence: Confidence) -> ConfidenceFlags {
    ConfidenceFlags {
        low_confidence: top_confidence.is_low(),
        high_confidence: top_confidence.is_high(),
    }
}
