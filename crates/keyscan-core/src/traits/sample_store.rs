use crate::errors::KeyscanResult;
use crate::models::FeedbackRequest;

/// External store tracking retained training samples per candidate class.
///
/// The caller queries it before the pipeline runs and persists after; the
/// pipeline itself never calls it.
pub trait ISampleStore: Send + Sync {
    /// Samples already retained for the given candidate reference.
    fn current_samples(&self, candidate_ref: &str) -> KeyscanResult<u64>;

    /// Record a client correction for a previous analysis.
    fn record_feedback(&self, feedback: &FeedbackRequest) -> KeyscanResult<()>;
}
