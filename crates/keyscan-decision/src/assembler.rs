//! Response assembly: runs ranking, classification, and sampling in order,
//! then checks the finished contract before it leaves the pipeline.

use chrono::{DateTime, Utc};
use keyscan_core::config::DecisionSettings;
use keyscan_core::errors::ContractError;
use keyscan_core::models::{
    AnalysisResult, CorrectionHint, DebugInfo, ManufacturerHint, RawCandidate, RawEngineOutput,
};
use keyscan_core::traits::RandomSource;
use tracing::{debug, error, warn};

use crate::classifier::classify;
use crate::ranking::rank;
use crate::sampling::SamplingDecision;

/// Assemble a result stamped with the current UTC time.
pub fn assemble(
    input_id: &str,
    raw: &RawEngineOutput,
    processing_time_ms: u64,
    settings: &DecisionSettings,
    rng: &mut dyn RandomSource,
) -> Result<AnalysisResult, ContractError> {
    assemble_at(input_id, raw, processing_time_ms, settings, rng, Utc::now())
}

/// Assemble a result with an explicit timestamp.
///
/// Any invariant violation in the finished object is an internal bug: it is
/// logged and returned as `Err`, never as a partial result.
pub fn assemble_at(
    input_id: &str,
    raw: &RawEngineOutput,
    processing_time_ms: u64,
    settings: &DecisionSettings,
    rng: &mut dyn RandomSource,
    timestamp: DateTime<Utc>,
) -> Result<AnalysisResult, ContractError> {
    let ranking = rank(raw.results.iter().cloned(), &raw.manufacturer_hint)?;
    if ranking.manufacturer_override && ranking.top().brand != top_raw_brand(raw) {
        warn!(
            input_id,
            brand = raw.manufacturer_hint.name.as_deref().unwrap_or_default(),
            "manufacturer hint reordered candidates"
        );
    }

    let top = ranking.top().confidence;
    let flags = classify(top);
    let current_samples = raw.current_samples();
    let sampling = SamplingDecision::evaluate(top, current_samples, settings, rng);
    debug!(
        input_id,
        top_confidence = top.value(),
        current_samples,
        draw = sampling.draw,
        should_store_sample = sampling.should_store,
        "sampling decided"
    );

    let result = AnalysisResult {
        input_id: input_id.to_string(),
        timestamp,
        manufacturer_hint: ManufacturerHint::from(&raw.manufacturer_hint),
        results: ranking.candidates,
        low_confidence: flags.low_confidence,
        high_confidence: flags.high_confidence,
        should_store_sample: sampling.should_store,
        storage_probability: sampling.storage_probability,
        current_samples_for_candidate: current_samples,
        manual_correction_hint: CorrectionHint::default(),
        debug: DebugInfo {
            processing_time_ms,
            model_version: settings.model_version().to_string(),
        },
    };

    seal(result, settings)
}

/// Final contract check. A violating result is logged and refused.
fn seal(
    result: AnalysisResult,
    settings: &DecisionSettings,
) -> Result<AnalysisResult, ContractError> {
    if let Err(violation) = result.validate(settings) {
        error!(
            input_id = %result.input_id,
            %violation,
            "assembled result violates the analysis contract"
        );
        return Err(violation);
    }
    Ok(result)
}

/// Brand of the highest-confidence raw candidate, ignoring the hint.
fn top_raw_brand(raw: &RawEngineOutput) -> Option<String> {
    raw.results
        .iter()
        .fold(None::<&RawCandidate>, |best, c| match best {
            Some(b) if b.raw_confidence() >= c.raw_confidence() => Some(b),
            _ => Some(c),
        })
        .and_then(|c| c.brand.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use keyscan_core::models::RawManufacturerHint;

    use crate::sampling::FixedDraws;

    fn raw_output(candidates: Vec<RawCandidate>) -> RawEngineOutput {
        RawEngineOutput {
            results: candidates,
            ..Default::default()
        }
    }

    #[test]
    fn copies_debug_metadata_and_timestamp() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let settings = DecisionSettings::new(0.75, 30, "keynet-4");
        let result = assemble_at(
            "img-9",
            &raw_output(vec![]),
            128,
            &settings,
            &mut FixedDraws::constant(0.5),
            ts,
        )
        .unwrap();
        assert_eq!(result.input_id, "img-9");
        assert_eq!(result.timestamp, ts);
        assert_eq!(result.debug.processing_time_ms, 128);
        assert_eq!(result.debug.model_version, "keynet-4");
        assert_eq!(result.manual_correction_hint, CorrectionHint::default());
    }

    #[test]
    fn reports_effective_storage_probability() {
        let settings = DecisionSettings::new(3.0, 30, "v");
        let result = assemble(
            "img",
            &raw_output(vec![]),
            0,
            &settings,
            &mut FixedDraws::constant(0.0),
        )
        .unwrap();
        assert_eq!(result.storage_probability, 1.0);
    }

    #[test]
    fn echoes_hint_with_clamped_confidence() {
        let raw = RawEngineOutput {
            manufacturer_hint: RawManufacturerHint {
                found: true,
                name: Some("CISA".into()),
                confidence: 1.4,
            },
            ..Default::default()
        };
        let result = assemble(
            "img",
            &raw,
            0,
            &DecisionSettings::default(),
            &mut FixedDraws::constant(0.0),
        )
        .unwrap();
        assert!(result.manufacturer_hint.found);
        assert_eq!(result.manufacturer_hint.confidence.value(), 1.0);
    }

    #[test]
    fn probability_from_deserialized_settings_never_breaks_the_contract() {
        let settings: DecisionSettings = serde_json::from_str(
            r#"{"storage_probability": 5.0, "max_samples_per_candidate": 30}"#,
        )
        .unwrap();
        let raw = raw_output(vec![RawCandidate {
            brand: Some("TESA".into()),
            confidence: Some(0.9),
            ..Default::default()
        }]);
        let result = assemble("img", &raw, 0, &settings, &mut FixedDraws::constant(0.1)).unwrap();
        assert_eq!(result.storage_probability, 1.0);
        assert!(result.should_store_sample);
    }

    #[test]
    fn seal_refuses_a_result_with_inconsistent_flags() {
        let settings = DecisionSettings::default();
        let raw = raw_output(vec![RawCandidate {
            confidence: Some(0.99),
            ..Default::default()
        }]);
        let mut result =
            assemble("img", &raw, 0, &settings, &mut FixedDraws::constant(0.9)).unwrap();
        assert!(result.high_confidence);

        result.high_confidence = false;
        assert!(matches!(
            seal(result, &settings),
            Err(ContractError::FlagMismatch { .. })
        ));
    }

    #[test]
    fn seal_refuses_storage_past_the_cap() {
        let settings = DecisionSettings::new(1.0, 2, "v");
        let raw = RawEngineOutput {
            results: vec![RawCandidate {
                confidence: Some(0.8),
                ..Default::default()
            }],
            current_samples_for_candidate: Some(2),
            ..Default::default()
        };
        let mut result =
            assemble("img", &raw, 0, &settings, &mut FixedDraws::constant(0.0)).unwrap();
        assert!(!result.should_store_sample);

        result.should_store_sample = true;
        assert!(matches!(
            seal(result, &settings),
            Err(ContractError::SamplingGateViolated { .. })
        ));
    }

    #[test]
    fn top_raw_brand_ignores_hint() {
        let raw = raw_output(vec![
            RawCandidate {
                brand: Some("A".into()),
                confidence: Some(0.4),
                ..Default::default()
            },
            RawCandidate {
                brand: Some("B".into()),
                confidence: Some(0.9),
                ..Default::default()
            },
        ]);
        assert_eq!(top_raw_brand(&raw).as_deref(), Some("B"));
        assert_eq!(top_raw_brand(&raw_output(vec![])), None);
    }
}
