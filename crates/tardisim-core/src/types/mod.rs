//! Transient value types passed between the scorer, the sampler, and the
//! presentation layer. Nothing here is persisted.

pub mod environment;
pub mod levels;
pub mod parameter;
pub mod results;

pub use environment::{ClampAdjustment, EnvironmentSample};
pub use levels::{InterpretationLevel, SpreadBucket};
pub use parameter::Parameter;
pub use results::{DistributionSummary, ScoreResult};
