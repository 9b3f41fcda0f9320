//! Interpretation ladders, including exact boundary values.

use tardisim_analysis::interpretation::{interpret_parameter, thresholds};
use tardisim_analysis::{interpret, score};
use tardisim_core::{InterpretationLevel, Parameter};

#[test]
fn temperature_ladder() {
    let cases = [
        (-150.0, "too low, induces cryptobiosis"),
        (20.0, "too low, induces cryptobiosis"),
        (20.5, "optimal for active metabolism"),
        (50.0, "optimal for active metabolism"),
        (50.01, "too high, causes irreversible cell damage"),
        (150.0, "too high, causes irreversible cell damage"),
    ];
    for (value, expected) in cases {
        assert_eq!(
            interpret_parameter(Parameter::Temperature, value).note,
            expected,
            "temperature {value}"
        );
    }
}

#[test]
fn humidity_ladder() {
    let cases = [
        (0.0, "too low, may induce cryptobiosis"),
        (30.0, "too low, may induce cryptobiosis"),
        (30.1, "adequate for active metabolism"),
        (70.0, "adequate for active metabolism"),
        (70.1, "excessive, impairs respiration"),
    ];
    for (value, expected) in cases {
        assert_eq!(interpret_parameter(Parameter::Humidity, value).note, expected);
    }
}

#[test]
fn radiation_ladder() {
    let cases = [
        (0.0, "safe"),
        (30.0, "safe"),
        (31.0, "moderate, minimal impact"),
        (70.0, "moderate, minimal impact"),
        (71.0, "dangerous, may damage DNA"),
    ];
    for (value, expected) in cases {
        assert_eq!(interpret_parameter(Parameter::Radiation, value).note, expected);
    }
}

#[test]
fn boundary_values_fall_into_lower_bucket() {
    for parameter in Parameter::ALL {
        let (low, high) = thresholds(parameter);
        assert_eq!(interpret_parameter(parameter, low).level, InterpretationLevel::Low);
        assert_eq!(
            interpret_parameter(parameter, high).level,
            InterpretationLevel::Moderate
        );
    }
}

#[test]
fn ladders_are_independent() {
    let set = interpret(100.0, 10.0, 50.0);
    assert_eq!(set.temperature.level, InterpretationLevel::High);
    assert_eq!(set.humidity.level, InterpretationLevel::Low);
    assert_eq!(set.radiation.level, InterpretationLevel::Moderate);
    assert_eq!(set.get(Parameter::Humidity), set.humidity);

    let order: Vec<Parameter> = set.as_array().iter().map(|i| i.parameter).collect();
    assert_eq!(order, Parameter::ALL.to_vec());
}

#[test]
fn score_carries_the_same_notes() {
    let result = score(-80.0, 90.0, 85.0);
    let set = interpret(-80.0, 90.0, 85.0);
    assert_eq!(result.temperature_note, set.temperature.note);
    assert_eq!(result.humidity_note, set.humidity.note);
    assert_eq!(result.radiation_note, set.radiation.note);
    assert_eq!(result.note(Parameter::Radiation), "dangerous, may damage DNA");
}
