// Single source of truth for all default values.

// --- Decision ---
pub const DEFAULT_STORAGE_PROBABILITY: f64 = 0.75;
pub const DEFAULT_MAX_SAMPLES_PER_CANDIDATE: i64 = 30;
pub const DEFAULT_MODEL_VERSION: &str = "unknown";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Files & environment ---
pub const PROJECT_CONFIG_FILENAME: &str = "keyscan.toml";
pub const ENV_STORAGE_PROBABILITY: &str = "STORAGE_PROBABILITY";
pub const ENV_MAX_SAMPLES_PER_CANDIDATE: &str = "MAX_SAMPLES_PER_CANDIDATE";
pub const ENV_MODEL_VERSION: &str = "MODEL_VERSION";
pub const ENV_LOG_LEVEL: &str = "KEYSCAN_LOG_LEVEL";
