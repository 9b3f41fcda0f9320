//! # tardisim-report
//!
//! Presentation layer: assembles one simulation run into a
//! [`SimulationReport`] and renders it as plain text or JSON.

pub mod model;
pub mod render;

pub use model::{ReportOptions, SimulationReport, SurvivalSplit};
pub use render::{render_json, render_report, render_text};
