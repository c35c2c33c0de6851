//! DecisionEngine: implements IAnalyzer over the assembler.

use keyscan_core::config::{DecisionSettings, KeyscanConfig};
use keyscan_core::errors::{ContractError, KeyscanResult};
use keyscan_core::models::{AnalysisResult, FeedbackRequest, HealthResponse, RawEngineOutput};
use keyscan_core::traits::{IAnalyzer, RandomSource};
use serde_json::Value;
use tracing::{info, info_span};

use crate::assembler;

/// The decision engine.
///
/// Holds only the normalized settings, so one instance can be shared across
/// threads; every call brings its own random source.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    settings: DecisionSettings,
}

impl DecisionEngine {
    pub fn new(settings: DecisionSettings) -> Self {
        Self { settings }
    }

    pub fn from_config(config: &KeyscanConfig) -> Self {
        Self::new(config.decision_settings())
    }

    pub fn settings(&self) -> &DecisionSettings {
        &self.settings
    }

    /// Parse permissive engine JSON, then analyze.
    ///
    /// Invalid JSON or a non-object document degrades to an empty engine
    /// output, so the caller still gets three placeholders flagged
    /// `low_confidence`.
    pub fn analyze_json(
        &self,
        input_id: &str,
        raw_json: &str,
        processing_time_ms: u64,
        rng: &mut dyn RandomSource,
    ) -> KeyscanResult<AnalysisResult> {
        let value: Value = serde_json::from_str(raw_json).unwrap_or(Value::Null);
        let raw = RawEngineOutput::from_value(&value);
        self.analyze(input_id, &raw, processing_time_ms, rng)
    }

    /// Health report carrying the configured model version.
    pub fn health(&self) -> HealthResponse {
        HealthResponse::ok(self.settings.model_version())
    }

    /// Feedback check before the caller forwards it to the sample store.
    pub fn check_feedback(&self, feedback: &FeedbackRequest) -> Result<(), ContractError> {
        feedback.validate()
    }
}

impl IAnalyzer for DecisionEngine {
    fn analyze(
        &self,
        input_id: &str,
        raw: &RawEngineOutput,
        processing_time_ms: u64,
        rng: &mut dyn RandomSource,
    ) -> KeyscanResult<AnalysisResult> {
        let span = info_span!("keyscan.analyze", input_id, raw_candidates = raw.results.len());
        let _guard = span.enter();

        let result = assembler::assemble(input_id, raw, processing_time_ms, &self.settings, rng)?;

        info!(
            top_confidence = result.top_confidence().value(),
            low_confidence = result.low_confidence,
            high_confidence = result.high_confidence,
            should_store_sample = result.should_store_sample,
            processing_time_ms,
            "analysis assembled"
        );
        Ok(result)
    }
}
