// File: crates/xychart-core/src/text.rs
// Summary: Text measurement seam, label formatting and ellipsis fitting.

use chrono::DateTime;

/// Width of a run of text at a given size, in pixels.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, size: f32) -> f32;
}

/// Fixed-advance metrics: every char is `advance * size` wide. Deterministic, used headless.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMetrics {
    pub advance: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMeasure for MonospaceMetrics {
    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.advance
    }
}

pub const ELLIPSIS: &str = "...";

/// Longest prefix of `text` that, followed by "...", fits `width`.
/// Text that already fits is returned as is; when not even one char fits the result is "...".
pub fn fit_text<M: TextMeasure + ?Sized>(text: &str, width: f32, size: f32, measure: &M) -> String {
    if measure.measure_text(text, size) <= width {
        return text.to_string();
    }
    let bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    // lo always fits (the bare ellipsis counts as fitting), hi never does
    let (mut lo, mut hi) = (0usize, bounds.len());
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        let candidate = format!("{}{}", &text[..bounds[mid]], ELLIPSIS);
        if measure.measure_text(&candidate, size) <= width {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    if lo == 0 {
        return ELLIPSIS.to_string();
    }
    format!("{}{}", &text[..bounds[lo]], ELLIPSIS)
}

/// Integral values print without a fraction; others use `decimals` when given.
pub fn format_label(value: f64, decimals: Option<usize>) -> String {
    if value.is_finite() && value == value.round() && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    match decimals {
        Some(d) => format!("{:.*}", d, value),
        None => format!("{}", value),
    }
}

/// Formats an epoch-millisecond value with a chrono format string (UTC).
pub fn format_time_label(millis: f64, fmt: &str) -> String {
    if !millis.is_finite() {
        return String::new();
    }
    DateTime::from_timestamp_millis(millis.round() as i64)
        .map(|dt| dt.format(fmt).to_string())
        .unwrap_or_default()
}

const DAY_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Date format picked from the visible span when none is configured.
pub fn default_time_format(span_millis: f64) -> &'static str {
    if span_millis.abs() > DAY_MS { "%Y-%m-%d" } else { "%H:%M:%S" }
}
