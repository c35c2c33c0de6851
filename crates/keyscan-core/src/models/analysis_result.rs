use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Candidate, Confidence, RawManufacturerHint};
use crate::config::DecisionSettings;
use crate::constants::{CORRECTABLE_FIELDS, RESULT_COUNT};
use crate::errors::ContractError;

/// Manufacturer hint as echoed to the client, confidence clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ManufacturerHint {
    pub found: bool,
    pub name: Option<String>,
    pub confidence: Confidence,
}

impl From<&RawManufacturerHint> for ManufacturerHint {
    fn from(raw: &RawManufacturerHint) -> Self {
        Self {
            found: raw.found,
            name: raw.name.clone(),
            confidence: Confidence::new(raw.confidence),
        }
    }
}

/// Fields the client UI offers for manual correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CorrectionHint {
    pub fields: Vec<String>,
}

impl Default for CorrectionHint {
    fn default() -> Self {
        Self {
            fields: CORRECTABLE_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DebugInfo {
    pub processing_time_ms: u64,
    pub model_version: String,
}

/// The outbound analysis contract.
///
/// Invariants (checked by [`AnalysisResult::validate`]):
/// - exactly three results ranked 1, 2, 3 in that order
/// - every confidence inside [0, 1]
/// - `high_confidence` iff top >= 0.95, `low_confidence` iff top < 0.60
/// - `should_store_sample` only when top >= 0.75 and the sample cap is not reached
/// - `storage_probability` inside [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisResult {
    pub input_id: String,
    /// UTC, serialized as RFC 3339 with a `Z` suffix.
    pub timestamp: DateTime<Utc>,
    pub manufacturer_hint: ManufacturerHint,
    pub results: Vec<Candidate>,
    pub low_confidence: bool,
    pub high_confidence: bool,
    pub should_store_sample: bool,
    pub storage_probability: f64,
    pub current_samples_for_candidate: u64,
    pub manual_correction_hint: CorrectionHint,
    pub debug: DebugInfo,
}

impl AnalysisResult {
    /// Confidence of the rank-1 candidate, or zero for an empty list.
    pub fn top_confidence(&self) -> Confidence {
        self.results
            .first()
            .map(|c| c.confidence)
            .unwrap_or(Confidence::ZERO)
    }

    /// The rank-1 candidate, if any.
    pub fn top(&self) -> Option<&Candidate> {
        self.results.first()
    }

    /// Re-check every contract invariant against the settings the result
    /// was produced with.
    pub fn validate(&self, settings: &DecisionSettings) -> Result<(), ContractError> {
        if self.results.len() != RESULT_COUNT {
            return Err(ContractError::CandidateCount {
                expected: RESULT_COUNT,
                actual: self.results.len(),
            });
        }

        for (position, candidate) in self.results.iter().enumerate() {
            if usize::from(candidate.rank) != position + 1 {
                return Err(ContractError::RankOutOfOrder {
                    position: position + 1,
                    rank: candidate.rank,
                });
            }
            check_unit_interval(
                &format!("results[{position}].confidence"),
                candidate.confidence.value(),
            )?;
        }
        check_unit_interval(
            "manufacturer_hint.confidence",
            self.manufacturer_hint.confidence.value(),
        )?;

        if !(0.0..=1.0).contains(&self.storage_probability) {
            return Err(ContractError::StorageProbabilityOutOfRange {
                value: self.storage_probability,
            });
        }

        let top = self.top_confidence();
        if self.low_confidence && self.high_confidence {
            return Err(ContractError::ConflictingFlags {
                confidence: top.value(),
            });
        }
        if self.high_confidence != top.is_high() {
            return Err(ContractError::FlagMismatch {
                flag: "high_confidence".to_string(),
                confidence: top.value(),
            });
        }
        if self.low_confidence != top.is_low() {
            return Err(ContractError::FlagMismatch {
                flag: "low_confidence".to_string(),
                confidence: top.value(),
            });
        }

        if self.should_store_sample {
            if !top.is_storable() {
                return Err(ContractError::SamplingGateViolated {
                    reason: format!("top confidence {top} is below the storage threshold"),
                });
            }
            if !settings.below_sample_cap(self.current_samples_for_candidate) {
                return Err(ContractError::SamplingGateViolated {
                    reason: format!(
                        "{} samples reached the cap of {}",
                        self.current_samples_for_candidate,
                        settings.max_samples_per_candidate()
                    ),
                });
            }
        }

        Ok(())
    }
}

fn check_unit_interval(field: &str, value: f64) -> Result<(), ContractError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ContractError::ConfidenceOutOfRange {
            field: field.to_string(),
            value,
        })
    }
}
