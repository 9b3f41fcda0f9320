use proptest::prelude::*;
use tardisim_analysis::{sample_distribution, seeded_rng, summarize};
use tardisim_core::SpreadBucket;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn seeded_runs_are_reproducible(seed in any::<u64>(), n in 1usize..300) {
        let a = sample_distribution(n, &mut seeded_rng(Some(seed))).unwrap();
        let b = sample_distribution(n, &mut seeded_rng(Some(seed))).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn summary_is_internally_consistent(seed in any::<u64>(), n in 1usize..300) {
        let s = sample_distribution(n, &mut seeded_rng(Some(seed))).unwrap();
        prop_assert_eq!(s.len(), n);
        prop_assert!(s.std_dev >= 0.0);
        prop_assert!((0.0..=100.0).contains(&s.mean));
        prop_assert!(s.min <= s.median && s.median <= s.max);
        prop_assert!(s.min <= s.p5 && s.p5 <= s.p95 && s.p95 <= s.max);
        prop_assert_eq!(s.bucket, SpreadBucket::from_std_dev(s.std_dev));
        prop_assert_eq!(s.bucket_label.as_str(), s.bucket.label());
    }

    #[test]
    fn std_dev_matches_population_formula(values in prop::collection::vec(0.0f64..=100.0, 1..200)) {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let expected = (values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();

        let s = summarize(values).unwrap();
        prop_assert!((s.mean - mean).abs() < 1e-9);
        prop_assert!((s.std_dev - expected).abs() < 1e-9);
    }
}
