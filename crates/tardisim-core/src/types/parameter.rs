use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::constants::{
    HUMIDITY_MAX, HUMIDITY_MIN, RADIATION_MAX, RADIATION_MIN, TEMPERATURE_MAX, TEMPERATURE_MIN,
};

/// One of the three environmental inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Temperature,
    Humidity,
    Radiation,
}

impl Parameter {
    /// All parameters in display order.
    pub const ALL: [Parameter; 3] = [Self::Temperature, Self::Humidity, Self::Radiation];

    /// Lowercase identifier, also used for config keys.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Radiation => "radiation",
        }
    }

    /// Human-facing label including the unit.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Temperature => "Temperature (°C)",
            Self::Humidity => "Humidity (%)",
            Self::Radiation => "Radiation (%)",
        }
    }

    /// Inclusive (min, max) bounds accepted at the input boundary.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Self::Temperature => (TEMPERATURE_MIN, TEMPERATURE_MAX),
            Self::Humidity => (HUMIDITY_MIN, HUMIDITY_MAX),
            Self::Radiation => (RADIATION_MIN, RADIATION_MAX),
        }
    }

    /// Value used when the caller supplies nothing.
    pub fn default_value(&self) -> f64 {
        match self {
            Self::Temperature => defaults::DEFAULT_TEMPERATURE,
            Self::Humidity => defaults::DEFAULT_HUMIDITY,
            Self::Radiation => defaults::DEFAULT_RADIATION,
        }
    }

    /// Whether `value` is finite and inside [`Self::bounds`].
    pub fn contains(&self, value: f64) -> bool {
        let (min, max) = self.bounds();
        value.is_finite() && (min..=max).contains(&value)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
