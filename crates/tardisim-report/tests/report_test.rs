//! Report assembly and rendering tests.

use tardisim_analysis::seeded_rng;
use tardisim_core::config::ReportFormat;
use tardisim_core::{EnvironmentSample, ReportError, SamplingError};
use tardisim_report::{
    render_json, render_report, render_text, ReportOptions, SimulationReport, SurvivalSplit,
};

fn build(inputs: EnvironmentSample, seed: u64) -> SimulationReport {
    let mut rng = seeded_rng(Some(seed));
    SimulationReport::build(inputs, &ReportOptions::default(), &mut rng).unwrap()
}

#[test]
fn default_inputs_report() {
    let report = build(EnvironmentSample::default(), 7);

    assert!((report.score.probability - 88.0).abs() < 1e-9);
    assert!((report.survival.survival - 88.0).abs() < 1e-9);
    assert!((report.survival.risk - 12.0).abs() < 1e-9);
    assert_eq!(report.distribution.len(), 1000);
    assert_eq!(report.histogram.bins.len(), 20);
    assert_eq!(report.histogram.total(), 1000);
    assert_eq!(report.breakdown.probability, report.score.probability);
}

#[test]
fn survival_split_sums_to_hundred() {
    for p in [0.0, 33.3, 50.0, 100.0] {
        let split = SurvivalSplit::from_probability(p);
        assert!((split.survival + split.risk - 100.0).abs() < 1e-12);
    }
}

#[test]
fn zero_samples_is_rejected() {
    let options = ReportOptions {
        samples: 0,
        ..ReportOptions::default()
    };
    let mut rng = seeded_rng(Some(1));
    let err =
        SimulationReport::build(EnvironmentSample::default(), &options, &mut rng).unwrap_err();
    assert!(matches!(err, ReportError::Sampling(SamplingError::EmptySampleCount)));
}

#[test]
fn same_seed_same_text() {
    let a = render_text(&build(EnvironmentSample::default(), 42), 40);
    let b = render_text(&build(EnvironmentSample::default(), 42), 40);
    assert_eq!(a, b);
}

#[test]
fn text_contains_every_section() {
    let text = render_text(&build(EnvironmentSample::default(), 3), 40);

    for section in [
        "Tardigrade Survival Simulator",
        "Simulation Parameters",
        "Parameter Chart",
        "Variable Explanation",
        "Survival Chart",
        "Probability Distribution (1000 samples)",
        "Histogram Explanation",
        "Final Conclusion",
    ] {
        assert!(text.contains(section), "missing section {section}");
    }
    assert!(text.contains("Survival probability: 88.00%"));
    assert!(text.contains("Survival 88.0%"));
    assert!(text.contains("Risk 12.0%"));
    assert!(text.contains("optimal for active metabolism"));
    assert!(text.contains("adequate for active metabolism"));
    assert!(text.contains("safe"));
}

#[test]
fn negative_temperature_draws_left_bar() {
    let inputs = EnvironmentSample::new(-100.0, 50.0, 10.0).unwrap();
    let text = render_text(&build(inputs, 3), 40);
    assert!(text.contains("▓"));
    assert!(text.contains("too low, induces cryptobiosis"));
}

#[test]
fn histogram_explanation_uses_two_decimals() {
    let report = build(EnvironmentSample::default(), 11);
    let text = render_text(&report, 40);
    assert!(text.contains(&format!("Mean: {:.2}%", report.distribution.mean)));
    assert!(text.contains(&format!("Standard deviation: {:.2}", report.distribution.std_dev)));
    assert!(text.contains(report.distribution.bucket.explanation()));
}

#[test]
fn json_round_trips_through_serde_value() {
    let report = build(EnvironmentSample::default(), 5);
    let json = render_json(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["inputs"]["temperature"], 25.0);
    assert_eq!(value["score"]["probability"], report.score.probability);
    assert_eq!(value["distribution"]["samples"].as_array().unwrap().len(), 1000);
    assert_eq!(value["interpretations"]["radiation"]["level"], "low");
}

#[test]
fn render_report_dispatches_on_format() {
    let report = build(EnvironmentSample::default(), 9);
    let text = render_report(&report, ReportFormat::Text, 40).unwrap();
    let json = render_report(&report, ReportFormat::Json, 40).unwrap();
    assert!(text.starts_with("Tardigrade Survival Simulator"));
    assert!(json.trim_start().starts_with('{'));
}
