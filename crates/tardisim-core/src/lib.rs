//! # tardisim-core
//!
//! Foundation crate for the tardigrade survival simulator.
//! Defines the value types, constants, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::TardisimConfig;
pub use errors::{ConfigError, InputError, ReportError, SamplingError, TardisimErrorCode};
pub use types::{
    ClampAdjustment, DistributionSummary, EnvironmentSample, InterpretationLevel, Parameter,
    ScoreResult, SpreadBucket,
};
