use proptest::prelude::*;
use tardisim_analysis::{score, score_breakdown, temperature_penalty};

proptest! {
    #[test]
    fn probability_always_bounded(
        t in -1.0e6f64..1.0e6,
        h in -1.0e6f64..1.0e6,
        r in -1.0e6f64..1.0e6,
    ) {
        let p = score(t, h, r).probability;
        prop_assert!((0.0..=100.0).contains(&p), "probability {} for ({}, {}, {})", p, t, h, r);
    }

    #[test]
    fn probability_bounded_inside_documented_ranges(
        t in -150.0f64..=150.0,
        h in 0.0f64..=100.0,
        r in 0.0f64..=100.0,
    ) {
        let b = score_breakdown(t, h, r);
        prop_assert!((0.0..=1.0).contains(&b.temperature_penalty));
        prop_assert!((0.0..=100.0).contains(&b.probability));
    }

    #[test]
    fn penalty_symmetric_around_optimum(d in 0.0f64..=125.0) {
        let above = temperature_penalty(25.0 + d);
        let below = temperature_penalty(25.0 - d);
        prop_assert!((above - below).abs() < 1e-12, "{} vs {} at d = {}", above, below, d);
    }

    #[test]
    fn penalty_decreases_away_from_optimum(a in 0.0f64..=125.0, b in 0.0f64..=125.0) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(temperature_penalty(25.0 + near) >= temperature_penalty(25.0 + far));
        prop_assert!(temperature_penalty(25.0 - near) >= temperature_penalty(25.0 - far));
    }

    #[test]
    fn optimum_maximizes_temperature_term(h in 0.0f64..=100.0, r in 0.0f64..=100.0) {
        let b = score_breakdown(25.0, h, r);
        prop_assert_eq!(b.temperature_penalty, 1.0);
        prop_assert_eq!(b.temperature_contribution, 0.6);
    }

    #[test]
    fn humidity_helps_and_radiation_hurts(
        t in -150.0f64..=150.0,
        h in 0.0f64..=90.0,
        r in 0.0f64..=90.0,
        step in 0.0f64..=10.0,
    ) {
        let base = score(t, h, r).probability;
        prop_assert!(score(t, h + step, r).probability >= base - 1e-9);
        prop_assert!(score(t, h, r + step).probability <= base + 1e-9);
    }
}
