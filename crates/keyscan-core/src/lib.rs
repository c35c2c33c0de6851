//! # keyscan-core
//!
//! Foundation crate for the keyscan decision layer.
//! Defines the outbound contract, the permissive inbound types, traits,
//! errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{DecisionSettings, KeyscanConfig};
pub use errors::{ContractError, KeyscanError, KeyscanResult};
pub use models::{
    AnalysisResult, Candidate, Confidence, CropBBox, ManufacturerHint, RawCandidate,
    RawEngineOutput, RawManufacturerHint,
};
pub use traits::{IAnalyzer, ISampleStore, RandomSource};
