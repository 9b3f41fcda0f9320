//! Configuration system for tardisim.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod defaults;
pub mod inputs_config;
pub mod observability_config;
pub mod report_config;
pub mod sampling_config;
pub mod tardisim_config;

pub use inputs_config::InputsConfig;
pub use observability_config::ObservabilityConfig;
pub use report_config::{ReportConfig, ReportFormat};
pub use sampling_config::SamplingConfig;
pub use tardisim_config::{CliOverrides, TardisimConfig};
