use keyscan_core::config::DecisionSettings;
use keyscan_core::models::{Confidence, RawCandidate, RawEngineOutput, RawManufacturerHint};
use keyscan_core::traits::IAnalyzer;
use keyscan_decision::{classify, decide, rank, DecisionEngine, FixedDraws, SeededRandom};
use proptest::prelude::*;

const BRANDS: [&str; 4] = ["TESA", "CISA", "AZBE", "MCM"];

fn arb_candidate() -> impl Strategy<Value = RawCandidate> {
    (
        proptest::option::of(0..BRANDS.len()),
        proptest::option::of(-1.0f64..2.0),
    )
        .prop_map(|(brand, confidence)| RawCandidate {
            brand: brand.map(|i| BRANDS[i].to_string()),
            confidence,
            ..Default::default()
        })
}

fn arb_hint() -> impl Strategy<Value = RawManufacturerHint> {
    (any::<bool>(), proptest::option::of(0..BRANDS.len()), 0.0f64..1.0).prop_map(
        |(found, name, confidence)| RawManufacturerHint {
            found,
            name: name.map(|i| BRANDS[i].to_string()),
            confidence,
        },
    )
}

fn arb_output() -> impl Strategy<Value = RawEngineOutput> {
    (
        proptest::collection::vec(arb_candidate(), 0..8),
        arb_hint(),
        proptest::option::of(0u64..60),
    )
        .prop_map(|(results, manufacturer_hint, current)| RawEngineOutput {
            results,
            manufacturer_hint,
            current_samples_for_candidate: current,
        })
}

// ── Ranking shape ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn always_three_ranked_candidates(raw in arb_output()) {
        let ranking = rank(raw.results.clone(), &raw.manufacturer_hint).unwrap();
        prop_assert_eq!(ranking.candidates.len(), 3);
        for (idx, c) in ranking.candidates.iter().enumerate() {
            prop_assert_eq!(usize::from(c.rank), idx + 1);
            prop_assert!((0.0..=1.0).contains(&c.confidence.value()));
        }
    }

    #[test]
    fn confidences_never_increase_without_override(results in proptest::collection::vec(arb_candidate(), 0..8)) {
        let ranking = rank(results, &RawManufacturerHint::default()).unwrap();
        prop_assert!(!ranking.manufacturer_override);
        for pair in ranking.candidates.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn strong_hint_brand_precedes_other_brands(
        results in proptest::collection::vec(arb_candidate(), 0..8),
        brand in 0..BRANDS.len(),
        confidence in 0.85f64..1.0,
    ) {
        let target = BRANDS[brand];
        let hint = RawManufacturerHint { found: true, name: Some(target.to_string()), confidence };
        let matching = results.iter().filter(|c| c.brand.as_deref() == Some(target)).count();
        let ranking = rank(results, &hint).unwrap();
        prop_assert!(ranking.manufacturer_override);
        for (idx, c) in ranking.candidates.iter().enumerate() {
            prop_assert_eq!(c.brand.as_deref() == Some(target), idx < matching.min(3));
        }
    }
}

// ── Flags and sampling ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn flags_follow_thresholds(value in -0.5f64..1.5) {
        let confidence = Confidence::new(value);
        let flags = classify(confidence);
        prop_assert_eq!(flags.high_confidence, confidence.value() >= 0.95);
        prop_assert_eq!(flags.low_confidence, confidence.value() < 0.60);
        prop_assert!(!(flags.high_confidence && flags.low_confidence));
    }

    #[test]
    fn gates_closed_never_store(
        value in 0.0f64..1.0,
        current in 0u64..100,
        max in -5i64..60,
        probability in -1.0f64..2.0,
        draw in 0.0f64..1.0,
    ) {
        let stored = decide(Confidence::new(value), current, max, probability, draw);
        if value < 0.75 || (current as i64) >= max {
            prop_assert!(!stored);
        }
        if stored {
            prop_assert!(draw < probability.clamp(0.0, 1.0));
        }
    }

    #[test]
    fn analysis_validates_for_any_input(raw in arb_output(), draw in 0.0f64..1.0, probability in 0.0f64..1.0) {
        let engine = DecisionEngine::new(DecisionSettings::new(probability, 30, "prop"));
        let result = engine.analyze("prop", &raw, 0, &mut FixedDraws::constant(draw)).unwrap();
        prop_assert!(result.validate(engine.settings()).is_ok());
        prop_assert_eq!(result.current_samples_for_candidate, raw.current_samples());
    }

    #[test]
    fn seeded_runs_agree(raw in arb_output(), seed in any::<u64>()) {
        let engine = DecisionEngine::default();
        let mut a = SeededRandom::new(seed);
        let mut b = SeededRandom::new(seed);
        for _ in 0..5 {
            let x = engine.analyze("prop", &raw, 0, &mut a).unwrap();
            let y = engine.analyze("prop", &raw, 0, &mut b).unwrap();
            prop_assert_eq!(x.should_store_sample, y.should_store_sample);
            prop_assert_eq!(x.results, y.results);
        }
    }
}
