// File: crates/xychart-core/src/kinds/mod.rs
// Summary: Closed set of XY chart kinds and the per-kind drawing dispatch.

use std::fmt;
use std::str::FromStr;

use crate::config::{PointStyle, SeriesStyle};
use crate::error::ChartError;
use crate::geometry::PointF;
use crate::hit::ClickableArea;
use crate::surface::{Paint, Surface};
use crate::theme::Color;

mod bar;
mod line;
mod scatter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    /// Line chart whose X values are epoch milliseconds.
    Time,
    Scatter,
    /// Side-by-side bars.
    Bar,
    StackedBar,
    /// Bars spanning consecutive (min, max) point pairs.
    RangeBar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Line,
        ChartKind::Time,
        ChartKind::Scatter,
        ChartKind::Bar,
        ChartKind::StackedBar,
        ChartKind::RangeBar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Time => "Time",
            ChartKind::Scatter => "Scatter",
            ChartKind::Bar => "Bar",
            ChartKind::StackedBar => "StackedBar",
            ChartKind::RangeBar => "RangeBar",
        }
    }

    pub fn is_bar(self) -> bool {
        matches!(self, ChartKind::Bar | ChartKind::StackedBar | ChartKind::RangeBar)
    }

    /// Bars draw null values as zero; lines and scatter break at them.
    pub fn render_null_values(self) -> bool {
        self.is_bar()
    }

    /// Lower bound folded into the Y range by fit-to-data.
    pub fn default_minimum(self) -> Option<f64> {
        self.is_bar().then_some(0.0)
    }

    pub fn legend_shape_width(self) -> f32 {
        match self {
            ChartKind::Line | ChartKind::Time => line::SHAPE_WIDTH,
            ChartKind::Scatter => scatter::SHAPE_WIDTH,
            ChartKind::Bar | ChartKind::StackedBar | ChartKind::RangeBar => bar::SHAPE_WIDTH,
        }
    }

    /// Whether point markers are drawn on top of the series.
    pub fn renders_points(self, style: &SeriesStyle) -> bool {
        match self {
            ChartKind::Line | ChartKind::Time => style.point_style != PointStyle::Point,
            ChartKind::Scatter => true,
            _ => false,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ChartKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ChartError::UnknownChartType(s.to_string()))
    }
}

/// What a kind needs to know about the series being drawn.
#[derive(Clone, Copy, Debug)]
pub struct SeriesContext<'a> {
    pub series_index: usize,
    pub style: &'a SeriesStyle,
    pub color: Color,
    /// Number of series in the layer and this series' position in it.
    pub layer_len: usize,
    pub layer_pos: usize,
    /// Pixel row of the Y axis baseline (bars grow from it, fills close on it).
    pub y_axis_value: f32,
    /// Point index of `points[0]` within the series.
    pub start_index: usize,
    pub selectable_buffer: f32,
    pub antialias: bool,
}

impl SeriesContext<'_> {
    pub(crate) fn stroke(&self) -> Paint {
        let mut p = Paint::stroke(self.color, self.style.line_width);
        p.dash = self.style.dash;
        p.anti_alias = self.antialias;
        p
    }

    pub(crate) fn fill(&self) -> Paint {
        let mut p = Paint::fill(self.color);
        p.anti_alias = self.antialias;
        p
    }
}

/// Draws one contiguous run of screen points.
pub fn draw_series(surface: &mut dyn Surface, kind: ChartKind, ctx: &SeriesContext<'_>, points: &[PointF]) {
    if points.is_empty() {
        return;
    }
    match kind {
        ChartKind::Line | ChartKind::Time => line::draw(surface, ctx, points),
        ChartKind::Scatter => scatter::draw(surface, ctx, points),
        ChartKind::Bar => bar::draw(surface, ctx, points, false),
        ChartKind::StackedBar => bar::draw(surface, ctx, points, true),
        ChartKind::RangeBar => bar::draw_range(surface, ctx, points),
    }
    if kind.renders_points(ctx.style) && kind != ChartKind::Scatter {
        scatter::draw(surface, ctx, points);
    }
}

/// One area per point, aligned with `points`/`values`.
pub fn clickable_areas_for_points(
    kind: ChartKind,
    ctx: &SeriesContext<'_>,
    points: &[PointF],
    values: &[(f64, f64)],
) -> Vec<Option<ClickableArea>> {
    match kind {
        ChartKind::Line | ChartKind::Time | ChartKind::Scatter => line::clickable_areas(ctx, points, values),
        ChartKind::Bar => bar::clickable_areas(ctx, points, values, false),
        ChartKind::StackedBar => bar::clickable_areas(ctx, points, values, true),
        ChartKind::RangeBar => bar::clickable_range_areas(ctx, points, values),
    }
}

/// Legend swatch with its left edge at `at.x`, vertically centred on `at.y`.
pub fn draw_legend_shape(surface: &mut dyn Surface, kind: ChartKind, style: &SeriesStyle, at: PointF, paint: &Paint) {
    match kind {
        ChartKind::Line | ChartKind::Time => {
            surface.draw_line(at, PointF::new(at.x + line::SHAPE_WIDTH, at.y), &Paint { stroke_width: style.line_width, ..*paint });
            if kind.renders_points(style) {
                scatter::draw_legend_shape(surface, style, PointF::new(at.x + 5.0, at.y), paint);
            }
        }
        ChartKind::Scatter => scatter::draw_legend_shape(surface, style, at, paint),
        ChartKind::Bar | ChartKind::StackedBar | ChartKind::RangeBar => bar::draw_legend_shape(surface, at, paint),
    }
}

/// Value labels above the points of one run.
pub fn draw_chart_values(
    surface: &mut dyn Surface,
    kind: ChartKind,
    ctx: &SeriesContext<'_>,
    points: &[PointF],
    values: &[(f64, f64)],
) {
    match kind {
        ChartKind::Line | ChartKind::Time | ChartKind::Scatter => line::draw_values(surface, ctx, points, values),
        ChartKind::Bar => bar::draw_values(surface, ctx, points, values, false),
        ChartKind::StackedBar => bar::draw_values(surface, ctx, points, values, true),
        ChartKind::RangeBar => bar::draw_range_values(surface, ctx, points, values),
    }
}
