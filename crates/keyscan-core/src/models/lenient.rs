//! Permissive field extraction from untrusted engine JSON.
//!
//! Every helper returns `None` for absent, null, or wrongly-typed values so
//! callers can substitute defaults. Nothing here ever errors.

use serde_json::{Map, Value};

use super::CropBBox;

/// A finite number, or a string that parses as one.
pub fn number(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    // Infinities are still ordered and clamp cleanly; NaN is not a score.
    (!parsed.is_nan()).then_some(parsed)
}

/// A string, or a number rendered as one. Empty strings are kept.
pub fn string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A boolean, a 0/1 number, or a conventional boolean word.
pub fn boolean(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// A non-negative count. Floats truncate, negatives saturate to 0.
pub fn count(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_i64().map(|_| 0))
            .or_else(|| n.as_f64().map(saturating_count)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|v| !v.is_nan()).map(saturating_count))
        }
        _ => None,
    }
}

fn saturating_count(v: f64) -> u64 {
    // Float-to-int `as` saturates and maps negatives to 0.
    v.trunc() as u64
}

/// An ordered list of tags. Non-string entries other than numbers are skipped.
pub fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    match value? {
        Value::Array(items) => Some(items.iter().filter_map(|v| string(Some(v))).collect()),
        _ => None,
    }
}

/// A bounding box with all four coordinates present and numeric.
pub fn bbox(value: Option<&Value>) -> Option<CropBBox> {
    let obj = object(value)?;
    Some(CropBBox {
        x: number(obj.get("x"))?,
        y: number(obj.get("y"))?,
        w: number(obj.get("w"))?,
        h: number(obj.get("h"))?,
    })
}

/// The value as a JSON object, if it is one.
pub fn object(value: Option<&Value>) -> Option<&Map<String, Value>> {
    match value? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
