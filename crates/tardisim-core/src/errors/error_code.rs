//! TardisimErrorCode trait for machine-readable error output.

/// Every error enum implements this to provide a stable error code string.
/// The CLI prefixes its exit message with it.
pub trait TardisimErrorCode {
    /// Returns the error code string (e.g., "SAMPLING_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const SAMPLING_ERROR: &str = "SAMPLING_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
