//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "KEYSCAN_LOG";

/// Fallback filter when `KEYSCAN_LOG` is not set or is invalid.
pub const DEFAULT_FILTER: &str = "keyscan=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Filter directive for a configured level. A bare level ("debug") is
/// scoped to the keyscan crates; anything else is used as a directive list.
pub fn level_directive(log_level: &str) -> String {
    let level = log_level.trim();
    match level.to_ascii_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => {
            format!("keyscan={}", level.to_ascii_lowercase())
        }
        _ if level.is_empty() => DEFAULT_FILTER.to_string(),
        _ => level.to_string(),
    }
}

/// Initialize logging from configuration.
///
/// `KEYSCAN_LOG` still wins when set; otherwise the configured level is
/// used, falling back to `keyscan=info` for an unparseable directive.
pub fn init_tracing_from(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::try_new(level_directive(config.effective_log_level()))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    });
    let json = config.effective_json_logs();
    INIT.call_once(|| {
        let layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        if json {
            tracing_subscriber::registry()
                .with(layer.json())
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry().with(layer).with(filter).init();
        }
    });
}

/// Initialize human-readable logging.
///
/// Reads `KEYSCAN_LOG` for per-module log levels.
/// Format: `KEYSCAN_LOG=keyscan_decision=debug,keyscan_core=warn`
///
/// Idempotent: only the first call (of either init function) installs a
/// subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(env_filter())
            .init();
    });
}

/// Initialize structured JSON logging, one object per line.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(env_filter())
            .init();
    });
}
