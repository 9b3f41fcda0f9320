//! Character charts for the text report.

use tardisim_analysis::Histogram;

use crate::model::SurvivalSplit;

pub const FILLED: &str = "█";
pub const NEGATIVE: &str = "▓";
pub const EMPTY: &str = "░";

/// Bar length for `magnitude` scaled so that `max` fills `width`.
pub fn bar_length(magnitude: f64, max: f64, width: usize) -> usize {
    if max.is_nan() || max <= 0.0 || !magnitude.is_finite() {
        return 0;
    }
    let scaled = (magnitude / max * width as f64).round();
    (scaled.max(0.0) as usize).min(width)
}

/// Horizontal bar chart of labelled values.
///
/// When any value is negative a left half is reserved and negative bars grow
/// leftwards from the axis.
pub fn bar_chart(rows: &[(&str, f64)], width: usize) -> Vec<String> {
    let label_width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max_abs = rows.iter().map(|(_, v)| v.abs()).fold(0.0, f64::max);
    let has_negative = rows.iter().any(|(_, v)| *v < 0.0);

    rows.iter()
        .map(|(label, value)| {
            let len = bar_length(value.abs(), max_abs, width);
            let (left, right) = if *value < 0.0 {
                (NEGATIVE.repeat(len), String::new())
            } else {
                (String::new(), FILLED.repeat(len))
            };
            let left = if has_negative {
                format!("{left:>width$}")
            } else {
                String::new()
            };
            format!("{label:<label_width$} {left}|{right:<width$} {value:>8.2}")
        })
        .collect()
}

/// Survival share drawn as one proportional strip, plus its legend.
pub fn survival_strip(split: &SurvivalSplit, width: usize) -> [String; 2] {
    let survival = bar_length(split.survival, 100.0, width);
    let strip = format!("[{}{}]", FILLED.repeat(survival), EMPTY.repeat(width - survival));
    let legend = format!(
        "{FILLED} Survival {:.1}%   {EMPTY} Risk {:.1}%",
        split.survival, split.risk
    );
    [strip, legend]
}

/// One line per bin: range, bar scaled to the fullest bin, count.
pub fn histogram_chart(histogram: &Histogram, width: usize) -> Vec<String> {
    let max = histogram.max_count() as f64;
    histogram
        .bins
        .iter()
        .map(|bin| {
            let bar = FILLED.repeat(bar_length(bin.count as f64, max, width));
            format!(
                "{:>7.2} - {:>7.2} |{bar:<width$} {}",
                bin.start, bin.end, bin.count
            )
        })
        .collect()
}
