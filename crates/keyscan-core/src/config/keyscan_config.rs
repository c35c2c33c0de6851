//! Top-level keyscan configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{defaults, DecisionConfig, DecisionSettings, ObservabilityConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`STORAGE_PROBABILITY`, `MAX_SAMPLES_PER_CANDIDATE`,
///    `MODEL_VERSION`, `KEYSCAN_LOG_LEVEL`)
/// 2. Project config (`keyscan.toml` in the service root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeyscanConfig {
    pub decision: DecisionConfig,
    pub observability: ObservabilityConfig,
}

impl KeyscanConfig {
    /// Load configuration with layered resolution.
    ///
    /// A missing `keyscan.toml` is not an error. A present but malformed
    /// one is, since that happens at process start, before any request.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        config.apply_env_overrides_from(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Normalized decision settings for the pipeline.
    pub fn decision_settings(&self) -> DecisionSettings {
        DecisionSettings::from(&self.decision)
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut KeyscanConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: KeyscanConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut KeyscanConfig, other: &KeyscanConfig) {
        if other.decision.storage_probability.is_some() {
            base.decision.storage_probability = other.decision.storage_probability;
        }
        if other.decision.max_samples_per_candidate.is_some() {
            base.decision.max_samples_per_candidate = other.decision.max_samples_per_candidate;
        }
        if other.decision.model_version.is_some() {
            base.decision.model_version = other.decision.model_version.clone();
        }

        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
        if other.observability.json_logs.is_some() {
            base.observability.json_logs = other.observability.json_logs;
        }
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// Unparseable values are logged and skipped, leaving the lower layer in
    /// place.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(defaults::ENV_STORAGE_PROBABILITY) {
            match val.trim().parse::<f64>() {
                Ok(v) => self.decision.storage_probability = Some(v),
                Err(_) => warn!(
                    key = defaults::ENV_STORAGE_PROBABILITY,
                    value = %val,
                    "ignoring unparseable env override"
                ),
            }
        }
        if let Some(val) = lookup(defaults::ENV_MAX_SAMPLES_PER_CANDIDATE) {
            match val.trim().parse::<i64>() {
                Ok(v) => self.decision.max_samples_per_candidate = Some(v),
                Err(_) => warn!(
                    key = defaults::ENV_MAX_SAMPLES_PER_CANDIDATE,
                    value = %val,
                    "ignoring unparseable env override"
                ),
            }
        }
        if let Some(val) = lookup(defaults::ENV_MODEL_VERSION) {
            self.decision.model_version = Some(val);
        }
        if let Some(val) = lookup(defaults::ENV_LOG_LEVEL) {
            self.observability.log_level = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
