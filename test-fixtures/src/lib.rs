//! Test fixture loader for keyscan decision scenarios.
//!
//! Scenario files live under `test-fixtures/scenarios/` and pair a raw engine
//! document with the settings, the random draw, and the expected decision.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Settings block of a scenario, passed to `DecisionSettings::new`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioSettings {
    pub storage_probability: f64,
    pub max_samples_per_candidate: i64,
    pub model_version: String,
}

/// Expected decision for a scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioExpectation {
    /// Brand per rank, `null` for placeholders or brandless entries.
    pub brands: Vec<Option<String>>,
    pub top_confidence: f64,
    pub high_confidence: bool,
    pub low_confidence: bool,
    pub should_store_sample: bool,
    pub placeholders: usize,
}

/// One decision scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub description: String,
    pub settings: ScenarioSettings,
    /// The single random draw the sampling decision consumes.
    pub draw: f64,
    /// Raw engine document, kept untyped so malformed shapes survive loading.
    pub input: serde_json::Value,
    pub expected: ScenarioExpectation,
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a decision scenario.
pub fn load_scenario(relative_path: &str) -> Scenario {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Load every scenario in a subdirectory, paired with its file name.
pub fn load_scenarios(subdir: &str) -> Vec<(String, Scenario)> {
    list_fixtures(subdir)
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let content = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
            let scenario = serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e));
            (name, scenario)
        })
        .collect()
}
