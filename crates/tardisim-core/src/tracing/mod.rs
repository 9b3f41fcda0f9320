//! Observability system for tardisim.
//! `tracing` crate with `EnvFilter`, per-crate log levels.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with_level, with_bootstrap_tracing};
