//! Decision pipeline configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for ranking, sampling, and assembly.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DecisionConfig {
    /// Target rate at which storable inputs are retained. Default: 0.75.
    /// Clamped to [0, 1] at use.
    pub storage_probability: Option<f64>,
    /// Upper bound on retained samples per candidate class. Default: 30.
    /// A non-positive value disables storage.
    pub max_samples_per_candidate: Option<i64>,
    /// Engine/model version echoed in debug metadata. Default: "unknown".
    pub model_version: Option<String>,
}

impl DecisionConfig {
    /// Returns the effective storage probability, always inside [0, 1].
    /// NaN falls back to the default.
    pub fn effective_storage_probability(&self) -> f64 {
        match self.storage_probability {
            Some(p) if p.is_nan() => defaults::DEFAULT_STORAGE_PROBABILITY,
            Some(p) => p.clamp(0.0, 1.0),
            None => defaults::DEFAULT_STORAGE_PROBABILITY,
        }
    }

    /// Returns the effective per-candidate sample cap, defaulting to 30.
    pub fn effective_max_samples(&self) -> i64 {
        self.max_samples_per_candidate
            .unwrap_or(defaults::DEFAULT_MAX_SAMPLES_PER_CANDIDATE)
    }

    /// Returns the effective model version, defaulting to "unknown".
    pub fn effective_model_version(&self) -> &str {
        self.model_version
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults::DEFAULT_MODEL_VERSION)
    }
}
