// File: crates/xychart-core/src/config.rs
// Summary: Renderer configuration (layout, labels, legend, interaction) and per-series styles.

use crate::axis::{AxisRange, ScaleAxis};
use crate::theme::{Color, Theme};
use crate::types::{Align, Margins, Orientation};
use crate::view::Window;

/// Marker drawn at each point of scatter series (and line series that render points).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointStyle {
    X,
    Circle,
    Triangle,
    Square,
    Diamond,
    #[default]
    Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesStyle {
    /// Palette colour of the series index when unset.
    pub color: Option<Color>,
    pub line_width: f32,
    pub dash: Option<[f32; 2]>,
    pub point_style: PointStyle,
    pub fill_points: bool,
    /// Fill between a line and the Y axis baseline.
    pub fill_below: Option<Color>,
    pub display_chart_values: bool,
    pub chart_values_text_size: f32,
    pub chart_values_spacing: f32,
    /// Minimum pixel distance between neighbouring value labels.
    pub chart_values_distance: f32,
    pub chart_values_decimals: Option<usize>,
    pub display_bounding_points: bool,
    pub annotations_color: Option<Color>,
    pub annotations_text_size: f32,
    pub annotations_align: Align,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: None,
            line_width: 1.0,
            dash: None,
            point_style: PointStyle::Point,
            fill_points: false,
            fill_below: None,
            display_chart_values: false,
            chart_values_text_size: 10.0,
            chart_values_spacing: 5.0,
            chart_values_distance: 100.0,
            chart_values_decimals: None,
            display_bounding_points: true,
            annotations_color: None,
            annotations_text_size: 10.0,
            annotations_align: Align::Center,
        }
    }
}

impl SeriesStyle {
    pub fn with_color(color: Color) -> Self {
        Self { color: Some(color), ..Self::default() }
    }
}

#[derive(Clone, Debug)]
pub struct RendererConfig {
    pub theme: Theme,
    pub chart_title: String,
    pub chart_title_text_size: f32,
    pub x_title: String,
    pub axis_title_text_size: f32,
    pub labels_text_size: f32,
    pub legend_text_size: f32,
    pub margins: Margins,
    pub apply_background: bool,

    pub show_legend: bool,
    pub fit_legend: bool,
    /// Fixed legend height; 0 means derived.
    pub legend_height: i32,

    pub show_labels: bool,
    pub show_x_labels: bool,
    pub show_y_labels: bool,
    pub show_tick_marks: bool,
    pub show_custom_text_x_labels: bool,
    pub show_custom_text_y_labels: bool,
    pub show_custom_text_grid_x: bool,
    pub show_custom_text_grid_y: bool,
    pub show_grid_x: bool,
    pub show_grid_y: bool,
    pub show_axes: bool,
    pub grid_line_width: f32,

    /// Desired tick counts.
    pub x_labels: usize,
    pub y_labels: usize,
    pub x_labels_angle: f32,
    pub y_labels_angle: f32,
    pub x_labels_padding: f32,
    pub y_labels_padding: f32,
    pub y_labels_vertical_padding: f32,
    pub x_labels_align: Align,
    pub x_labels_color: Option<Color>,
    pub x_label_decimals: Option<usize>,
    /// Custom X labels as (value, text).
    pub x_text_labels: Vec<(f64, String)>,
    /// chrono format for Time charts; picked from the visible span when unset.
    pub x_date_format: Option<String>,

    /// Per-scale axis options; missing entries behave like `ScaleAxis::default()`.
    pub scales: Vec<ScaleAxis>,
    pub orientation: Orientation,

    pub pan_enabled: bool,
    pub pan_x_enabled: bool,
    pub pan_y_enabled: bool,
    pub pan_limits: Option<Window>,
    pub zoom_enabled: bool,
    pub zoom_x_enabled: bool,
    pub zoom_y_enabled: bool,
    pub zoom_limits: Option<Window>,
    pub zoom_rate: f64,
    /// Window restored by fit-to-data; captured from scale 0 at chart creation when fully explicit.
    pub initial_range: Option<Window>,

    pub series_styles: Vec<SeriesStyle>,
    /// Half size of the clickable square around line/scatter points.
    pub selectable_buffer: f32,
    pub antialiasing: bool,
    /// Radius multiplier for round charts.
    pub scale: f32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self::with_theme(Theme::default())
    }
}

impl RendererConfig {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            chart_title: String::new(),
            chart_title_text_size: 15.0,
            x_title: String::new(),
            axis_title_text_size: 12.0,
            labels_text_size: 10.0,
            legend_text_size: 12.0,
            margins: Margins::default(),
            apply_background: true,
            show_legend: true,
            fit_legend: false,
            legend_height: 0,
            show_labels: true,
            show_x_labels: true,
            show_y_labels: true,
            show_tick_marks: true,
            show_custom_text_x_labels: true,
            show_custom_text_y_labels: true,
            show_custom_text_grid_x: false,
            show_custom_text_grid_y: false,
            show_grid_x: false,
            show_grid_y: false,
            show_axes: true,
            grid_line_width: 1.0,
            x_labels: 5,
            y_labels: 5,
            x_labels_angle: 0.0,
            y_labels_angle: 0.0,
            x_labels_padding: 0.0,
            y_labels_padding: 0.0,
            y_labels_vertical_padding: 2.0,
            x_labels_align: Align::Center,
            x_labels_color: None,
            x_label_decimals: None,
            x_text_labels: Vec::new(),
            x_date_format: None,
            scales: Vec::new(),
            orientation: Orientation::Horizontal,
            pan_enabled: true,
            pan_x_enabled: true,
            pan_y_enabled: true,
            pan_limits: None,
            zoom_enabled: true,
            zoom_x_enabled: true,
            zoom_y_enabled: true,
            zoom_limits: None,
            zoom_rate: 1.5,
            initial_range: None,
            series_styles: Vec::new(),
            selectable_buffer: 15.0,
            antialiasing: true,
            scale: 1.0,
        }
    }

    pub fn scale_axis(&self, scale: usize) -> ScaleAxis {
        self.scales.get(scale).cloned().unwrap_or_default()
    }

    /// Mutable per-scale options, growing the list as needed.
    pub fn scale_axis_mut(&mut self, scale: usize) -> &mut ScaleAxis {
        if self.scales.len() <= scale {
            self.scales.resize_with(scale + 1, ScaleAxis::default);
        }
        &mut self.scales[scale]
    }

    pub fn range(&self, scale: usize) -> AxisRange {
        self.scales.get(scale).map(|s| s.range).unwrap_or_default()
    }

    pub fn range_mut(&mut self, scale: usize) -> &mut AxisRange {
        &mut self.scale_axis_mut(scale).range
    }

    pub fn set_x_range(&mut self, scale: usize, min: f64, max: f64) {
        let r = self.range_mut(scale);
        r.x_min = Some(min);
        r.x_max = Some(max);
    }

    pub fn set_y_range(&mut self, scale: usize, min: f64, max: f64) {
        let r = self.range_mut(scale);
        r.y_min = Some(min);
        r.y_max = Some(max);
    }

    pub fn set_window(&mut self, scale: usize, w: Window) {
        *self.range_mut(scale) = AxisRange::explicit(w);
    }

    /// Number of scales the configuration knows about.
    pub fn scales_count(&self) -> usize {
        self.scales.len().max(1)
    }

    pub fn series_style(&self, index: usize) -> SeriesStyle {
        self.series_styles.get(index).cloned().unwrap_or_default()
    }

    /// Style colour, else the theme palette entry for `index`.
    pub fn series_color(&self, index: usize) -> Color {
        self.series_styles
            .get(index)
            .and_then(|s| s.color)
            .unwrap_or_else(|| self.theme.series_color(index))
    }

    pub fn x_text_label(&self, value: f64) -> Option<&str> {
        self.x_text_labels.iter().find(|(v, _)| *v == value).map(|(_, t)| t.as_str())
    }

    pub fn add_x_text_label(&mut self, value: f64, text: impl Into<String>) {
        self.x_text_labels.push((value, text.into()));
    }

    pub fn is_vertical(&self) -> bool {
        self.orientation.is_vertical()
    }
}
