use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::{
    HIGH_CONFIDENCE_THRESHOLD, LOW_CONFIDENCE_THRESHOLD, STORAGE_CONFIDENCE_THRESHOLD,
};

/// Confidence score clamped to [0.0, 1.0].
/// Out-of-range values saturate; NaN becomes 0.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, TS)]
#[ts(export)]
pub struct Confidence(f64);

impl Confidence {
    pub const ZERO: Self = Self(0.0);

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// At or above the high-confidence threshold (0.95).
    pub fn is_high(self) -> bool {
        self.0 >= HIGH_CONFIDENCE_THRESHOLD
    }

    /// Below the low-confidence threshold (0.60).
    pub fn is_low(self) -> bool {
        self.0 < LOW_CONFIDENCE_THRESHOLD
    }

    /// Confident enough to be retained as a training sample (>= 0.75).
    pub fn is_storable(self) -> bool {
        self.0 >= STORAGE_CONFIDENCE_THRESHOLD
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::new)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}
