use crate::errors::KeyscanResult;
use crate::models::{AnalysisResult, RawEngineOutput};
use crate::traits::RandomSource;

/// Raw engine output in, validated analysis contract out.
pub trait IAnalyzer: Send + Sync {
    /// Rank, classify, decide sampling, and assemble one result.
    ///
    /// Fails only on an internal contract violation, which callers must treat
    /// as non-retryable.
    fn analyze(
        &self,
        input_id: &str,
        raw: &RawEngineOutput,
        processing_time_ms: u64,
        rng: &mut dyn RandomSource,
    ) -> KeyscanResult<AnalysisResult>;
}
