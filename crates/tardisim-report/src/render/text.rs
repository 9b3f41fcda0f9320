//! Plain-text report: the sections of the simulator screen, top to bottom.

use tardisim_core::Parameter;

use super::charts::{bar_chart, histogram_chart, survival_strip};
use crate::model::SimulationReport;

const TITLE: &str = "Tardigrade Survival Simulator";

const CONCLUSION: &str = "The simulator analysed the temperature, humidity and radiation \
provided and produced a visual and descriptive picture of the tardigrade survival probability. \
Tardigrades are remarkably resilient organisms, but their tolerances still have clear limits.";

/// Render the full report. `chart_width` is the length of the longest bar.
pub fn render_text(report: &SimulationReport, chart_width: usize) -> String {
    let mut out = Vec::new();

    heading(&mut out, TITLE, '=');
    out.push(String::new());

    heading(&mut out, "Simulation Parameters", '-');
    for parameter in Parameter::ALL {
        out.push(format!("{}: {}", parameter.label(), report.inputs.value(parameter)));
    }
    out.push(format!("Survival probability: {:.2}%", report.score.probability));
    out.push(String::new());

    heading(&mut out, "Parameter Chart", '-');
    let rows: Vec<(&str, f64)> = Parameter::ALL
        .iter()
        .map(|p| (p.label(), report.inputs.value(*p)))
        .collect();
    out.extend(bar_chart(&rows, chart_width));
    out.push(String::new());

    heading(&mut out, "Variable Explanation", '-');
    out.extend(variable_table(report));
    out.push(String::new());

    heading(&mut out, "Survival Chart", '-');
    out.extend(survival_strip(&report.survival, chart_width));
    out.push(String::new());

    heading(
        &mut out,
        &format!("Probability Distribution ({} samples)", report.distribution.len()),
        '-',
    );
    out.extend(histogram_chart(&report.histogram, chart_width));
    out.push(String::new());

    heading(&mut out, "Histogram Explanation", '-');
    let dist = &report.distribution;
    out.push(format!("Mean: {:.2}%", dist.mean));
    out.push(format!("Standard deviation: {:.2}", dist.std_dev));
    out.push(format!(
        "Median: {:.2}%  (5th percentile {:.2}%, 95th percentile {:.2}%)",
        dist.median, dist.p5, dist.p95
    ));
    out.push(format!("Spread: {}", dist.bucket_label));
    out.push(dist.bucket.explanation().to_string());
    out.push(String::new());

    heading(&mut out, "Final Conclusion", '-');
    out.push(format!(
        "Under the given conditions the estimated survival probability is {:.2}%.",
        report.score.probability
    ));
    out.push(CONCLUSION.to_string());

    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn heading(out: &mut Vec<String>, title: &str, underline: char) {
    out.push(title.to_string());
    out.push(underline.to_string().repeat(title.chars().count()));
}

fn variable_table(report: &SimulationReport) -> Vec<String> {
    let rows: Vec<[String; 3]> = Parameter::ALL
        .iter()
        .map(|p| {
            [
                p.label().to_string(),
                format!("{:.2}", report.inputs.value(*p)),
                report.score.note(*p).to_string(),
            ]
        })
        .collect();

    let header = ["Variable", "Value", "Interpretation"];
    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 3]| {
        format!(
            "{:<w0$} | {:>w1$} | {:<w2$}",
            cells[0],
            cells[1],
            cells[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        )
        .trim_end()
        .to_string()
    };

    let mut lines = vec![line(header)];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(line([&row[0], &row[1], &row[2]]));
    }
    lines
}
