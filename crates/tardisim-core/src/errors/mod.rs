//! Error handling for tardisim.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod report_error;
pub mod sampling_error;

pub use config_error::ConfigError;
pub use error_code::TardisimErrorCode;
pub use input_error::InputError;
pub use report_error::ReportError;
pub use sampling_error::SamplingError;
