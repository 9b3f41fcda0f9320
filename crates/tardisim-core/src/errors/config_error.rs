//! Errors raised while resolving the layered tardisim configuration.

use super::error_code::{self, TardisimErrorCode};

/// `path` is the file of the failing layer; `field` is a dotted TOML key
/// such as `sampling.samples`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read tardisim config {path}")]
    FileNotFound { path: String },

    #[error("{path} is not valid tardisim TOML: {message}")]
    ParseError { path: String, message: String },

    #[error("tardisim config key {field} rejected: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("tardisim config key {field} has an unsupported value: {message}")]
    InvalidValue { field: String, message: String },
}

impl TardisimErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
