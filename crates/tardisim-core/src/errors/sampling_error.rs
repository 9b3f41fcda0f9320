//! Distribution sampling errors.

use super::error_code::{self, TardisimErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SamplingError {
    #[error("sample count must be at least 1")]
    EmptySampleCount,

    #[error("histogram bin count must be at least 1, got {bins}")]
    InvalidBinCount { bins: usize },
}

impl TardisimErrorCode for SamplingError {
    fn error_code(&self) -> &'static str {
        error_code::SAMPLING_ERROR
    }
}
