//! Seams between the decision pipeline and its collaborators.

pub mod analyzer;
pub mod random_source;
pub mod sample_store;

pub use analyzer::IAnalyzer;
pub use random_source::RandomSource;
pub use sample_store::ISampleStore;
