//! Exit messages for failed commands.

use std::error::Error;

use tardisim_core::{ConfigError, InputError, ReportError, SamplingError, TardisimErrorCode};

/// Context lines joined down to the first typed error, which is printed as
/// `[CODE] message`. Errors with no typed cause fall back to `{err:#}`.
pub fn error_message(err: &anyhow::Error) -> String {
    let mut parts = Vec::new();
    for cause in err.chain() {
        if let Some(coded) = coded_string(cause) {
            parts.push(coded);
            return parts.join(": ");
        }
        parts.push(cause.to_string());
    }
    format!("{err:#}")
}

fn coded_string(cause: &(dyn Error + 'static)) -> Option<String> {
    if let Some(e) = cause.downcast_ref::<ConfigError>() {
        return Some(e.coded_string());
    }
    if let Some(e) = cause.downcast_ref::<ReportError>() {
        return Some(e.coded_string());
    }
    if let Some(e) = cause.downcast_ref::<SamplingError>() {
        return Some(e.coded_string());
    }
    cause.downcast_ref::<InputError>().map(|e| e.coded_string())
}
