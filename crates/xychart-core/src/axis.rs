// File: crates/xychart-core/src/axis.rs
// Summary: Per-scale axis options and the explicit/derived axis range model.

use crate::theme::Color;
use crate::types::Align;
use crate::view::Window;

/// Per-scale range; `None` bounds are derived from data on every render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisRange {
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}

impl AxisRange {
    pub fn explicit(w: Window) -> Self {
        Self { x_min: Some(w.x_min), x_max: Some(w.x_max), y_min: Some(w.y_min), y_max: Some(w.y_max) }
    }

    pub fn is_explicit(&self) -> bool {
        self.x_min.is_some() && self.x_max.is_some() && self.y_min.is_some() && self.y_max.is_some()
    }

    /// The window when all four bounds are explicit.
    pub fn window(&self) -> Option<Window> {
        Some(Window::new(self.x_min?, self.x_max?, self.y_min?, self.y_max?))
    }

    /// Fills unset bounds from `fallback`.
    pub fn resolve(&self, fallback: &Window) -> Window {
        Window::new(
            self.x_min.unwrap_or(fallback.x_min),
            self.x_max.unwrap_or(fallback.x_max),
            self.y_min.unwrap_or(fallback.y_min),
            self.y_max.unwrap_or(fallback.y_max),
        )
    }
}

/// Options of one value scale: Y title, side, label colours and custom text labels.
#[derive(Clone, Debug, Default)]
pub struct ScaleAxis {
    pub title: String,
    pub align: Align,
    pub labels_align: Option<Align>,
    pub labels_color: Option<Color>,
    pub grid_color: Option<Color>,
    /// Custom Y labels as (value, text), drawn instead of numeric ticks at those values.
    pub text_labels: Vec<(f64, String)>,
    pub label_decimals: Option<usize>,
    pub range: AxisRange,
}

impl ScaleAxis {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn text_label(&self, value: f64) -> Option<&str> {
        self.text_labels.iter().find(|(v, _)| *v == value).map(|(_, t)| t.as_str())
    }

    /// Tick label alignment; right-aligned text on a left axis and vice versa by default.
    pub fn resolved_labels_align(&self) -> Align {
        self.labels_align.unwrap_or(match self.align {
            Align::Right => Align::Left,
            _ => Align::Right,
        })
    }
}
