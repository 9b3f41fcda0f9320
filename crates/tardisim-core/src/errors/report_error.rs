//! Report assembly errors.
//! Aggregates subsystem errors via `From` conversions.

use super::error_code::{self, TardisimErrorCode};
use super::SamplingError;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TardisimErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Sampling(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}
