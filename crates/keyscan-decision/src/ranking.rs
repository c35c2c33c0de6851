//! Candidate ranking: order, pad, truncate, normalize.
//!
//! A strong manufacturer hint (found, named, raw confidence >= 0.85) puts
//! every candidate of that brand ahead of every other candidate; confidence
//! breaks ties inside each group. Without one, confidence alone decides.
//! Ties keep the engine's original order.

use std::cmp::Ordering;

use keyscan_core::constants::RESULT_COUNT;
use keyscan_core::errors::ContractError;
use keyscan_core::models::{Candidate, RawCandidate, RawManufacturerHint};
use tracing::debug;

/// Output of the ranking stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Exactly three candidates, ranks 1, 2, 3.
    pub candidates: Vec<Candidate>,
    /// True when the manufacturer hint drove the ordering.
    pub manufacturer_override: bool,
    /// Synthetic fillers appended.
    pub placeholders: usize,
    /// Engine candidates cut after the first three.
    pub dropped: usize,
}

impl Ranking {
    pub fn top(&self) -> &Candidate {
        // Always three entries; see `rank`.
        &self.candidates[0]
    }
}

/// Rank raw candidates into exactly three normalized entries.
///
/// Accepts any iterable of candidates; pass an absent list as an empty
/// iterator (an `Option<Vec<_>>` flattened). Never rejects input; the `Err`
/// arm exists only for the rank constructor and is unreachable for lists
/// built here.
pub fn rank<I>(raw: I, hint: &RawManufacturerHint) -> Result<Ranking, ContractError>
where
    I: IntoIterator<Item = RawCandidate>,
{
    let mut ordered: Vec<RawCandidate> = raw.into_iter().collect();

    let manufacturer_override = hint.is_strong();
    if manufacturer_override {
        let target = hint.name.as_deref();
        ordered.sort_by(|a, b| {
            let a_match = a.brand.as_deref() == target;
            let b_match = b.brand.as_deref() == target;
            b_match
                .cmp(&a_match)
                .then_with(|| by_confidence_desc(a, b))
        });
    } else {
        ordered.sort_by(by_confidence_desc);
    }

    let dropped = ordered.len().saturating_sub(RESULT_COUNT);
    let placeholders = RESULT_COUNT.saturating_sub(ordered.len());
    ordered.truncate(RESULT_COUNT);
    ordered.resize_with(RESULT_COUNT, RawCandidate::default);

    let candidates = ordered
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| Candidate::from_raw(idx + 1, raw))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        manufacturer_override,
        placeholders,
        dropped,
        top_confidence = candidates[0].confidence.value(),
        "candidates ranked"
    );

    Ok(Ranking {
        candidates,
        manufacturer_override,
        placeholders,
        dropped,
    })
}

/// Descending by raw confidence. Absent counts as 0.0; a NaN from a
/// hand-built candidate compares equal to everything.
fn by_confidence_desc(a: &RawCandidate, b: &RawCandidate) -> Ordering {
    let (a, b) = (a.raw_confidence(), b.raw_confidence());
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(brand: &str, confidence: f64) -> RawCandidate {
        RawCandidate {
            brand: Some(brand.to_string()),
            confidence: Some(confidence),
            ..Default::default()
        }
    }

    fn no_hint() -> RawManufacturerHint {
        RawManufacturerHint::default()
    }

    fn hint(name: &str, confidence: f64) -> RawManufacturerHint {
        RawManufacturerHint {
            found: true,
            name: Some(name.to_string()),
            confidence,
        }
    }

    fn brands(r: &Ranking) -> Vec<Option<&str>> {
        r.candidates.iter().map(|c| c.brand.as_deref()).collect()
    }

    #[test]
    fn sorts_by_confidence_without_hint() {
        let r = rank(vec![raw("A", 0.2), raw("B", 0.9), raw("C", 0.5)], &no_hint()).unwrap();
        assert_eq!(brands(&r), vec![Some("B"), Some("C"), Some("A")]);
        assert!(!r.manufacturer_override);
        let ranks: Vec<u8> = r.candidates.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn strong_hint_puts_brand_first() {
        let r = rank(
            vec![raw("A", 0.99), raw("X", 0.30), raw("B", 0.80), raw("X", 0.40)],
            &hint("X", 0.9),
        )
        .unwrap();
        assert_eq!(brands(&r), vec![Some("X"), Some("X"), Some("A")]);
        assert_eq!(r.candidates[0].confidence.value(), 0.40);
        assert!(r.manufacturer_override);
        assert_eq!(r.dropped, 1);
    }

    #[test]
    fn weak_hint_is_ignored() {
        let r = rank(vec![raw("A", 0.9), raw("X", 0.3)], &hint("X", 0.84)).unwrap();
        assert_eq!(r.top().brand.as_deref(), Some("A"));
        assert!(!r.manufacturer_override);
    }

    #[test]
    fn brand_match_is_case_sensitive() {
        let r = rank(vec![raw("x", 0.3), raw("A", 0.9)], &hint("X", 0.95)).unwrap();
        assert_eq!(r.top().brand.as_deref(), Some("A"));
    }

    #[test]
    fn empty_list_yields_three_placeholders() {
        let r = rank(Vec::new(), &no_hint()).unwrap();
        assert_eq!(r.placeholders, 3);
        assert!(r.candidates.iter().all(Candidate::is_placeholder));
    }

    #[test]
    fn absent_list_matches_empty_list() {
        let absent = rank(None::<Vec<RawCandidate>>.into_iter().flatten(), &no_hint()).unwrap();
        let empty = rank(Vec::new(), &no_hint()).unwrap();
        assert_eq!(absent, empty);
    }

    #[test]
    fn pads_short_list_after_real_candidates() {
        let r = rank(vec![raw("A", 0.0)], &no_hint()).unwrap();
        assert_eq!(r.placeholders, 2);
        assert_eq!(r.top().brand.as_deref(), Some("A"));
        assert!(r.candidates[1].is_placeholder());
        assert!(r.candidates[2].is_placeholder());
    }

    #[test]
    fn clamps_after_ordering() {
        let r = rank(vec![raw("A", 1.7), raw("B", -3.0), raw("C", 1.2)], &no_hint()).unwrap();
        assert_eq!(brands(&r), vec![Some("A"), Some("C"), Some("B")]);
        assert_eq!(r.candidates[0].confidence.value(), 1.0);
        assert_eq!(r.candidates[1].confidence.value(), 1.0);
        assert_eq!(r.candidates[2].confidence.value(), 0.0);
    }

    #[test]
    fn ties_keep_engine_order() {
        let r = rank(vec![raw("A", 0.5), raw("B", 0.5), raw("C", 0.5)], &no_hint()).unwrap();
        assert_eq!(brands(&r), vec![Some("A"), Some("B"), Some("C")]);
    }

    #[test]
    fn missing_confidence_sorts_as_zero() {
        let unscored = RawCandidate {
            brand: Some("U".into()),
            ..Default::default()
        };
        let r = rank(vec![unscored, raw("A", 0.1)], &no_hint()).unwrap();
        assert_eq!(brands(&r), vec![Some("A"), Some("U"), None]);
    }
}
