//! Report rendering: plain text with character charts, or JSON.

pub mod charts;
pub mod text;

use tardisim_core::config::ReportFormat;
use tardisim_core::ReportError;

use crate::model::SimulationReport;

pub use text::render_text;

/// Render in the requested format.
pub fn render_report(
    report: &SimulationReport,
    format: ReportFormat,
    chart_width: usize,
) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => Ok(render_text(report, chart_width)),
        ReportFormat::Json => render_json(report),
    }
}

/// Pretty-printed JSON of the whole report, samples included.
pub fn render_json(report: &SimulationReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}
