//! Unranked, untrusted output of the recognition engine.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{lenient, CropBBox};
use crate::constants::MANUFACTURER_OVERRIDE_THRESHOLD;

/// One unranked detection. Every field is optional and the confidence is not
/// yet clamped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawCandidate {
    pub id_model_ref: Option<String>,
    #[serde(rename = "type")]
    pub key_type: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub orientation: Option<String>,
    pub head_color: Option<String>,
    pub visual_state: Option<String>,
    pub patentada: Option<bool>,
    pub compatibility_tags: Option<Vec<String>>,
    pub confidence: Option<f64>,
    pub explain_text: Option<String>,
    pub crop_bbox: Option<CropBBox>,
}

impl RawCandidate {
    /// Extract a candidate from a JSON object. Returns `None` for non-objects;
    /// wrongly-typed fields inside an object are treated as absent.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = lenient::object(Some(value))?;
        Some(Self {
            id_model_ref: lenient::string(obj.get("id_model_ref")),
            key_type: lenient::string(obj.get("type")),
            brand: lenient::string(obj.get("brand")),
            model: lenient::string(obj.get("model")),
            orientation: lenient::string(obj.get("orientation")),
            head_color: lenient::string(obj.get("head_color")),
            visual_state: lenient::string(obj.get("visual_state")),
            patentada: lenient::boolean(obj.get("patentada")),
            compatibility_tags: lenient::string_list(obj.get("compatibility_tags")),
            confidence: lenient::number(obj.get("confidence")),
            explain_text: lenient::string(obj.get("explain_text")),
            crop_bbox: lenient::bbox(obj.get("crop_bbox")),
        })
    }

    /// Raw confidence used for ordering; absent counts as 0.0.
    pub fn raw_confidence(&self) -> f64 {
        self.confidence.unwrap_or(0.0)
    }
}

impl<'de> Deserialize<'de> for RawCandidate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value).unwrap_or_default())
    }
}

/// Independently computed brand signal. Confidence is not trusted here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawManufacturerHint {
    pub found: bool,
    pub name: Option<String>,
    pub confidence: f64,
}

impl RawManufacturerHint {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = lenient::object(Some(value)) else {
            return Self::default();
        };
        Self {
            found: lenient::boolean(obj.get("found")).unwrap_or(false),
            name: lenient::string(obj.get("name")),
            confidence: lenient::number(obj.get("confidence")).unwrap_or(0.0),
        }
    }

    /// Strong enough to override confidence ordering: found, a non-empty
    /// name, and raw confidence at or above 0.85.
    pub fn is_strong(&self) -> bool {
        self.found
            && self.confidence >= MANUFACTURER_OVERRIDE_THRESHOLD
            && self.name.as_deref().is_some_and(|n| !n.is_empty())
    }
}

impl<'de> Deserialize<'de> for RawManufacturerHint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Everything the recognition engine hands over for one input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawEngineOutput {
    /// Unordered candidates; may be empty.
    pub results: Vec<RawCandidate>,
    pub manufacturer_hint: RawManufacturerHint,
    /// Samples already retained for the leading candidate class.
    pub current_samples_for_candidate: Option<u64>,
}

impl RawEngineOutput {
    /// Parse permissively. Fails only on invalid JSON syntax or a non-object
    /// top level.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom(
                "engine output must be a JSON object",
            ));
        }
        Ok(Self::from_value(&value))
    }

    /// Extract from an already-parsed value. Never fails: non-object entries
    /// in `results` are dropped, a non-array `results` counts as empty.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = lenient::object(Some(value)) else {
            return Self::default();
        };
        let results = match obj.get("results") {
            Some(Value::Array(items)) => {
                items.iter().filter_map(RawCandidate::from_value).collect()
            }
            _ => Vec::new(),
        };
        Self {
            results,
            manufacturer_hint: obj
                .get("manufacturer_hint")
                .map(RawManufacturerHint::from_value)
                .unwrap_or_default(),
            current_samples_for_candidate: lenient::count(obj.get("current_samples_for_candidate")),
        }
    }

    pub fn current_samples(&self) -> u64 {
        self.current_samples_for_candidate.unwrap_or(0)
    }
}

impl<'de> Deserialize<'de> for RawEngineOutput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_fields_become_absent() {
        let raw = RawCandidate::from_value(&json!({
            "brand": "TESA",
            "confidence": "not a number",
            "compatibility_tags": "T1",
            "crop_bbox": {"x": 1},
            "patentada": "si"
        }))
        .unwrap();
        assert_eq!(raw.brand.as_deref(), Some("TESA"));
        assert_eq!(raw.confidence, None);
        assert_eq!(raw.compatibility_tags, None);
        assert_eq!(raw.crop_bbox, None);
        assert_eq!(raw.patentada, None);
    }

    #[test]
    fn null_results_is_empty() {
        let out = RawEngineOutput::from_json(r#"{"results": null}"#).unwrap();
        assert!(out.results.is_empty());
        assert!(!out.manufacturer_hint.found);
        assert_eq!(out.current_samples(), 0);
    }

    #[test]
    fn non_object_entries_are_dropped() {
        let out = RawEngineOutput::from_value(&json!({
            "results": [{"brand": "A"}, 3, "x", null, {"brand": "B"}]
        }));
        assert_eq!(out.results.len(), 2);
    }

    #[test]
    fn non_object_top_level_is_rejected() {
        assert!(RawEngineOutput::from_json("[1, 2]").is_err());
        assert!(RawEngineOutput::from_json("{not json").is_err());
    }

    #[test]
    fn hint_strength_gate() {
        let strong = RawManufacturerHint {
            found: true,
            name: Some("JMA".into()),
            confidence: 0.85,
        };
        assert!(strong.is_strong());
        assert!(!RawManufacturerHint { confidence: 0.8499, ..strong.clone() }.is_strong());
        assert!(!RawManufacturerHint { name: Some(String::new()), ..strong.clone() }.is_strong());
        assert!(!RawManufacturerHint { found: false, ..strong }.is_strong());
    }

    #[test]
    fn serde_deserialize_is_permissive() {
        let out: RawEngineOutput = serde_json::from_value(json!({
            "results": [{"confidence": 0.9}],
            "manufacturer_hint": "garbage",
            "current_samples_for_candidate": "12"
        }))
        .unwrap();
        assert_eq!(out.results.len(), 1);
        assert_eq!(out.manufacturer_hint, RawManufacturerHint::default());
        assert_eq!(out.current_samples(), 12);
    }
}
