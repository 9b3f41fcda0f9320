//! Report rendering configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Output format of the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                field: "report.format".to_string(),
                message: format!("unknown format '{other}', expected 'text' or 'json'"),
            }),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Width in characters of the longest chart bar. Default: 40.
    pub chart_width: Option<usize>,
    /// "text" or "json". Default: "text".
    pub format: Option<String>,
}

impl ReportConfig {
    pub fn effective_chart_width(&self) -> usize {
        self.chart_width.unwrap_or(defaults::DEFAULT_CHART_WIDTH)
    }

    /// Parsed output format. Unknown strings are rejected by validation, so
    /// this only falls back to text for a config that skipped validation.
    pub fn effective_format(&self) -> ReportFormat {
        self.format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }
}
