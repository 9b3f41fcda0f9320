use serde::Serialize;

use super::Parameter;
use crate::errors::InputError;

/// A (temperature, humidity, radiation) triple inside the documented bounds.
///
/// Fields are private so every instance has gone through one of the
/// constructors below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnvironmentSample {
    temperature: f64,
    humidity: f64,
    radiation: f64,
}

/// A value that had to be moved into bounds by [`EnvironmentSample::clamp_with_report`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClampAdjustment {
    pub parameter: Parameter,
    pub requested: f64,
    pub applied: f64,
}

impl EnvironmentSample {
    /// Strict constructor: rejects non-finite and out-of-range values.
    pub fn new(temperature: f64, humidity: f64, radiation: f64) -> Result<Self, InputError> {
        for (parameter, value) in [
            (Parameter::Temperature, temperature),
            (Parameter::Humidity, humidity),
            (Parameter::Radiation, radiation),
        ] {
            validate(parameter, value)?;
        }
        Ok(Self {
            temperature,
            humidity,
            radiation,
        })
    }

    /// Clamp each value into its bounds. Non-finite values fall back to the
    /// parameter default.
    pub fn clamped(temperature: f64, humidity: f64, radiation: f64) -> Self {
        Self::clamp_with_report(temperature, humidity, radiation).0
    }

    /// Like [`Self::clamped`], also returning every value that changed.
    pub fn clamp_with_report(
        temperature: f64,
        humidity: f64,
        radiation: f64,
    ) -> (Self, Vec<ClampAdjustment>) {
        let mut adjustments = Vec::new();
        let mut fit = |parameter: Parameter, requested: f64| {
            let applied = clamp_to_bounds(parameter, requested);
            // NaN != NaN, so a NaN request is always reported.
            if applied != requested {
                adjustments.push(ClampAdjustment {
                    parameter,
                    requested,
                    applied,
                });
            }
            applied
        };
        let sample = Self {
            temperature: fit(Parameter::Temperature, temperature),
            humidity: fit(Parameter::Humidity, humidity),
            radiation: fit(Parameter::Radiation, radiation),
        };
        (sample, adjustments)
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    pub fn radiation(&self) -> f64 {
        self.radiation
    }

    /// Value of a single parameter.
    pub fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::Humidity => self.humidity,
            Parameter::Radiation => self.radiation,
        }
    }
}

impl Default for EnvironmentSample {
    fn default() -> Self {
        Self {
            temperature: Parameter::Temperature.default_value(),
            humidity: Parameter::Humidity.default_value(),
            radiation: Parameter::Radiation.default_value(),
        }
    }
}

fn validate(parameter: Parameter, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFinite { parameter, value });
    }
    let (min, max) = parameter.bounds();
    if value < min || value > max {
        return Err(InputError::OutOfRange {
            parameter,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn clamp_to_bounds(parameter: Parameter, value: f64) -> f64 {
    if value.is_nan() {
        return parameter.default_value();
    }
    let (min, max) = parameter.bounds();
    value.clamp(min, max)
}
