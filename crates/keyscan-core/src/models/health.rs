use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::VERSION;

/// Health payload reported by the service next to the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    #[serde(default)]
    pub model_version: Option<String>,
    #[serde(default)]
    pub labels_count: Option<u64>,
    #[serde(default)]
    pub uptime_s: Option<u64>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub build_sha: Option<String>,
}

impl HealthResponse {
    /// An "ok" report stamped now, carrying the crate version.
    pub fn ok(model_version: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            version: VERSION.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            model_version: Some(model_version.into()),
            labels_count: None,
            uptime_s: None,
            region: None,
            build_sha: None,
        }
    }
}
