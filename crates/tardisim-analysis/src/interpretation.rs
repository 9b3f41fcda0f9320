//! Threshold ladders that turn each input into a human-readable note.
//!
//! Each ladder is independent: `value ≤ low`, `low < value ≤ high`,
//! `value > high`.

use serde::Serialize;
use tardisim_core::constants::{
    HUMIDITY_HIGH_THRESHOLD, HUMIDITY_LOW_THRESHOLD, RADIATION_HIGH_THRESHOLD,
    RADIATION_LOW_THRESHOLD, TEMPERATURE_HIGH_THRESHOLD, TEMPERATURE_LOW_THRESHOLD,
};
use tardisim_core::{InterpretationLevel, Parameter};

/// Ladder position and note for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub parameter: Parameter,
    pub level: InterpretationLevel,
    pub note: &'static str,
}

/// Interpretations of all three parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterpretationSet {
    pub temperature: Interpretation,
    pub humidity: Interpretation,
    pub radiation: Interpretation,
}

impl InterpretationSet {
    /// Interpretations in display order.
    pub fn as_array(&self) -> [Interpretation; 3] {
        [self.temperature, self.humidity, self.radiation]
    }

    pub fn get(&self, parameter: Parameter) -> Interpretation {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::Humidity => self.humidity,
            Parameter::Radiation => self.radiation,
        }
    }
}

/// Interpret all three inputs.
pub fn interpret(temperature: f64, humidity: f64, radiation: f64) -> InterpretationSet {
    InterpretationSet {
        temperature: interpret_parameter(Parameter::Temperature, temperature),
        humidity: interpret_parameter(Parameter::Humidity, humidity),
        radiation: interpret_parameter(Parameter::Radiation, radiation),
    }
}

/// Interpret a single input against its ladder.
pub fn interpret_parameter(parameter: Parameter, value: f64) -> Interpretation {
    let (low, high) = thresholds(parameter);
    let level = InterpretationLevel::classify(value, low, high);
    Interpretation {
        parameter,
        level,
        note: note(parameter, level),
    }
}

/// Inclusive (low, high) thresholds of a ladder.
pub fn thresholds(parameter: Parameter) -> (f64, f64) {
    match parameter {
        Parameter::Temperature => (TEMPERATURE_LOW_THRESHOLD, TEMPERATURE_HIGH_THRESHOLD),
        Parameter::Humidity => (HUMIDITY_LOW_THRESHOLD, HUMIDITY_HIGH_THRESHOLD),
        Parameter::Radiation => (RADIATION_LOW_THRESHOLD, RADIATION_HIGH_THRESHOLD),
    }
}

fn note(parameter: Parameter, level: InterpretationLevel) -> &'static str {
    use InterpretationLevel::{High, Low, Moderate};

    match (parameter, level) {
        (Parameter::Temperature, Low) => "too low, induces cryptobiosis",
        (Parameter::Temperature, Moderate) => "optimal for active metabolism",
        (Parameter::Temperature, High) => "too high, causes irreversible cell damage",
        (Parameter::Humidity, Low) => "too low, may induce cryptobiosis",
        (Parameter::Humidity, Moderate) => "adequate for active metabolism",
        (Parameter::Humidity, High) => "excessive, impairs respiration",
        (Parameter::Radiation, Low) => "safe",
        (Parameter::Radiation, Moderate) => "moderate, minimal impact",
        (Parameter::Radiation, High) => "dangerous, may damage DNA",
    }
}
