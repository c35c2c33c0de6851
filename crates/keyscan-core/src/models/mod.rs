//! Contract data model: permissive inbound types and strict outbound types.

pub mod analysis_result;
pub mod candidate;
pub mod confidence;
pub mod feedback;
pub mod health;
pub mod lenient;
pub mod raw;

pub use analysis_result::{AnalysisResult, CorrectionHint, DebugInfo, ManufacturerHint};
pub use candidate::{Candidate, CropBBox};
pub use confidence::Confidence;
pub use feedback::FeedbackRequest;
pub use health::HealthResponse;
pub use raw::{RawCandidate, RawEngineOutput, RawManufacturerHint};
