//! Logging configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for structured logging.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter directive when `KEYSCAN_LOG` is unset. Default: "info".
    pub log_level: Option<String>,
    /// Emit JSON log lines instead of the human format. Default: false.
    pub json_logs: Option<bool>,
}

impl ObservabilityConfig {
    /// Returns the effective log level, defaulting to "info".
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(defaults::DEFAULT_LOG_LEVEL)
    }

    /// Returns whether JSON logs are enabled, defaulting to false.
    pub fn effective_json_logs(&self) -> bool {
        self.json_logs.unwrap_or(defaults::DEFAULT_JSON_LOGS)
    }
}
