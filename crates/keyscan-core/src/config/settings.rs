use serde::{Deserialize, Deserializer, Serialize};

use super::{defaults, DecisionConfig};

/// Normalized, read-only snapshot of the decision configuration.
///
/// Built once at process start and shared by reference across concurrent
/// invocations. Every value is already inside its valid domain, including
/// after deserialization, which normalizes through [`DecisionConfig`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionSettings {
    storage_probability: f64,
    max_samples_per_candidate: i64,
    model_version: String,
}

impl DecisionSettings {
    /// Build settings, clamping the probability into [0, 1] (NaN -> default).
    pub fn new(
        storage_probability: f64,
        max_samples_per_candidate: i64,
        model_version: impl Into<String>,
    ) -> Self {
        let config = DecisionConfig {
            storage_probability: Some(storage_probability),
            max_samples_per_candidate: Some(max_samples_per_candidate),
            model_version: Some(model_version.into()),
        };
        Self::from(&config)
    }

    pub fn storage_probability(&self) -> f64 {
        self.storage_probability
    }

    pub fn max_samples_per_candidate(&self) -> i64 {
        self.max_samples_per_candidate
    }

    pub fn model_version(&self) -> &str {
        &self.model_version
    }

    /// Whether `current_samples` is still below the per-candidate cap.
    /// Always false for a non-positive cap.
    pub fn below_sample_cap(&self, current_samples: u64) -> bool {
        i64::try_from(current_samples).is_ok_and(|current| current < self.max_samples_per_candidate)
    }
}

impl Default for DecisionSettings {
    fn default() -> Self {
        Self {
            storage_probability: defaults::DEFAULT_STORAGE_PROBABILITY,
            max_samples_per_candidate: defaults::DEFAULT_MAX_SAMPLES_PER_CANDIDATE,
            model_version: defaults::DEFAULT_MODEL_VERSION.to_string(),
        }
    }
}

impl From<&DecisionConfig> for DecisionSettings {
    fn from(config: &DecisionConfig) -> Self {
        Self {
            storage_probability: config.effective_storage_probability(),
            max_samples_per_candidate: config.effective_max_samples(),
            model_version: config.effective_model_version().to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for DecisionSettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DecisionConfig::deserialize(deserializer).map(|config| Self::from(&config))
    }
}
