//! Default environmental inputs.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Values used when the caller does not pass an input explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputsConfig {
    /// Temperature in °C. Default: 25.
    pub temperature: Option<f64>,
    /// Relative humidity in %. Default: 50.
    pub humidity: Option<f64>,
    /// Radiation in %. Default: 10.
    pub radiation: Option<f64>,
}

impl InputsConfig {
    pub fn effective_temperature(&self) -> f64 {
        self.temperature.unwrap_or(defaults::DEFAULT_TEMPERATURE)
    }

    pub fn effective_humidity(&self) -> f64 {
        self.humidity.unwrap_or(defaults::DEFAULT_HUMIDITY)
    }

    pub fn effective_radiation(&self) -> f64 {
        self.radiation.unwrap_or(defaults::DEFAULT_RADIATION)
    }
}
