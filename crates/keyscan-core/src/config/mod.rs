//! Configuration system for keyscan.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod decision_config;
pub mod defaults;
pub mod keyscan_config;
pub mod observability_config;
pub mod settings;

pub use decision_config::DecisionConfig;
pub use keyscan_config::KeyscanConfig;
pub use observability_config::ObservabilityConfig;
pub use settings::DecisionSettings;
