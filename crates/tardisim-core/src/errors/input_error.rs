//! Input validation errors at the environment-sample boundary.

use super::error_code::{self, TardisimErrorCode};
use crate::types::Parameter;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{parameter} must be a finite number, got {value}")]
    NonFinite { parameter: Parameter, value: f64 },

    #[error("{parameter} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        parameter: Parameter,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl InputError {
    /// The offending parameter.
    pub fn parameter(&self) -> Parameter {
        match self {
            Self::NonFinite { parameter, .. } | Self::OutOfRange { parameter, .. } => *parameter,
        }
    }
}

impl TardisimErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
