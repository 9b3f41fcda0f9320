//! Top-level tardisim configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    defaults, InputsConfig, ObservabilityConfig, ReportConfig, ReportFormat, SamplingConfig,
};
use crate::errors::ConfigError;
use crate::types::Parameter;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TARDISIM_*`)
/// 3. Project config (`tardisim.toml`)
/// 4. User config (`~/.tardisim/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TardisimConfig {
    pub inputs: InputsConfig,
    pub sampling: SamplingConfig,
    pub report: ReportConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
///
/// Environmental inputs are not overridden here: the CLI clamps them into
/// bounds itself, while config-file defaults must already be in bounds.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub samples: Option<usize>,
    pub seed: Option<u64>,
    pub histogram_bins: Option<usize>,
    pub chart_width: Option<usize>,
    pub format: Option<String>,
    pub log_level: Option<String>,
}

impl TardisimConfig {
    /// Load configuration using `tardisim.toml` in `root` as the project layer.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::load_file(&root.join(defaults::PROJECT_CONFIG_FILENAME), cli_overrides)
    }

    /// Load configuration with an explicit project config path.
    ///
    /// A missing project file is not an error; the layer is skipped.
    pub fn load_file(
        project_config_path: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        // Unreadable user config is not fatal.
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "skipping user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(
            samples = config.sampling.effective_samples(),
            bins = config.sampling.effective_histogram_bins(),
            seeded = config.sampling.seed.is_some(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &TardisimConfig) -> Result<(), ConfigError> {
        for (parameter, value) in [
            (Parameter::Temperature, config.inputs.temperature),
            (Parameter::Humidity, config.inputs.humidity),
            (Parameter::Radiation, config.inputs.radiation),
        ] {
            if let Some(v) = value {
                if !parameter.contains(v) {
                    let (min, max) = parameter.bounds();
                    return Err(ConfigError::ValidationFailed {
                        field: format!("inputs.{}", parameter.name()),
                        message: format!("must be between {min} and {max}"),
                    });
                }
            }
        }
        if config.sampling.samples == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "sampling.samples".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.sampling.histogram_bins == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "sampling.histogram_bins".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(width) = config.report.chart_width {
            if width < defaults::MIN_CHART_WIDTH {
                return Err(ConfigError::ValidationFailed {
                    field: "report.chart_width".to_string(),
                    message: format!("must be at least {}", defaults::MIN_CHART_WIDTH),
                });
            }
        }
        if let Some(ref format) = config.report.format {
            format.parse::<ReportFormat>()?;
        }
        if let Some(ref level) = config.observability.log_level {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "observability.log_level".to_string(),
                    message: format!("unknown level '{level}'"),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.tardisim/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(defaults::USER_CONFIG_DIRNAME).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut TardisimConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TardisimConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut TardisimConfig, other: &TardisimConfig) {
        // Inputs
        if other.inputs.temperature.is_some() {
            base.inputs.temperature = other.inputs.temperature;
        }
        if other.inputs.humidity.is_some() {
            base.inputs.humidity = other.inputs.humidity;
        }
        if other.inputs.radiation.is_some() {
            base.inputs.radiation = other.inputs.radiation;
        }

        // Sampling
        if other.sampling.samples.is_some() {
            base.sampling.samples = other.sampling.samples;
        }
        if other.sampling.seed.is_some() {
            base.sampling.seed = other.sampling.seed;
        }
        if other.sampling.histogram_bins.is_some() {
            base.sampling.histogram_bins = other.sampling.histogram_bins;
        }

        // Report
        if other.report.chart_width.is_some() {
            base.report.chart_width = other.report.chart_width;
        }
        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }

        // Observability
        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TARDISIM_SAMPLES`, `TARDISIM_SEED`, etc. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut TardisimConfig) {
        if let Ok(val) = std::env::var("TARDISIM_SAMPLES") {
            if let Ok(v) = val.parse::<usize>() {
                config.sampling.samples = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TARDISIM_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.sampling.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TARDISIM_HISTOGRAM_BINS") {
            if let Ok(v) = val.parse::<usize>() {
                config.sampling.histogram_bins = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TARDISIM_CHART_WIDTH") {
            if let Ok(v) = val.parse::<usize>() {
                config.report.chart_width = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TARDISIM_LOG_LEVEL") {
            config.observability.log_level = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut TardisimConfig, cli: &CliOverrides) {
        if let Some(v) = cli.samples {
            config.sampling.samples = Some(v);
        }
        if let Some(v) = cli.seed {
            config.sampling.seed = Some(v);
        }
        if let Some(v) = cli.histogram_bins {
            config.sampling.histogram_bins = Some(v);
        }
        if let Some(v) = cli.chart_width {
            config.report.chart_width = Some(v);
        }
        if let Some(ref v) = cli.format {
            config.report.format = Some(v.clone());
        }
        if let Some(ref v) = cli.log_level {
            config.observability.log_level = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
