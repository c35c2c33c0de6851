//! Decide whether an input is queued for labeling and training.
//!
//! should_store = top >= 0.75 AND current < max AND draw < probability
//!
//! The confidence gate keeps ambiguous inputs out of the training set, the
//! cap bounds labeling cost per class, and the draw subsamples below the cap.

use keyscan_core::config::DecisionSettings;
use keyscan_core::models::Confidence;
use keyscan_core::traits::RandomSource;

use super::random::normalize_draw;

/// Pure sampling rule.
///
/// `storage_probability` is clamped into [0, 1] (NaN counts as 0) and a
/// non-positive `max_samples` never admits a sample.
pub fn decide(
    top_confidence: Confidence,
    current_samples: u64,
    max_samples: i64,
    storage_probability: f64,
    random_draw: f64,
) -> bool {
    let probability = effective_probability(storage_probability);
    let below_cap = i64::try_from(current_samples).is_ok_and(|current| current < max_samples);

    top_confidence.is_storable() && below_cap && random_draw < probability
}

/// Clamp a probability into [0, 1]; NaN counts as 0.
pub fn effective_probability(storage_probability: f64) -> f64 {
    if storage_probability.is_nan() {
        0.0
    } else {
        storage_probability.clamp(0.0, 1.0)
    }
}

/// Sampling outcome together with the inputs that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingDecision {
    pub should_store: bool,
    /// Effective probability after clamping.
    pub storage_probability: f64,
    /// The draw consumed for this decision, in [0, 1).
    pub draw: f64,
}

impl SamplingDecision {
    /// Apply the rule with configured settings.
    ///
    /// Consumes exactly one draw per call, whether or not the gates pass, so
    /// a replayed sequence lines up one-to-one with requests.
    pub fn evaluate(
        top_confidence: Confidence,
        current_samples: u64,
        settings: &DecisionSettings,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let draw = normalize_draw(rng.draw());
        let storage_probability = effective_probability(settings.storage_probability());
        Self {
            should_store: decide(
                top_confidence,
                current_samples,
                settings.max_samples_per_candidate(),
                storage_probability,
                draw,
            ),
            storage_probability,
            draw,
        }
    }
}
