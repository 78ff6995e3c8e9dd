// File: crates/xychart-core/src/render.rs
// Summary: One XY render pass: legend fit, transform, grid, series + hit areas, margins, labels, axes.

use crate::axis::ScaleAxis;
use crate::chart::Layer;
use crate::config::RendererConfig;
use crate::dataset::Dataset;
use crate::geometry::{Point, PointF, RectI32};
use crate::grid::tick_values;
use crate::hit::HitIndex;
use crate::kinds::{self, ChartKind, SeriesContext};
use crate::layout::{self, LegendFrame, LegendItem};
use crate::series::Series;
use crate::surface::{Paint, Surface};
use crate::text::{default_time_format, format_label, format_time_label};
use crate::theme::Color;
use crate::transform::{OrientationTransform, ScaleTransform, TransformEngine};
use crate::types::{Align, Orientation};

/// Length of a Y tick mark; points outwards from the axis.
const TICK_LEN: f32 = 4.0;

/// Mutable state a pass rewrites.
pub(crate) struct PassState<'a> {
    pub engine: &'a mut TransformEngine,
    pub hits: &'a mut HitIndex,
}

/// Kind a series is drawn with: the first layer that lists it.
pub(crate) fn kind_for(layers: &[Layer], series_index: usize, series_count: usize) -> ChartKind {
    layers
        .iter()
        .find(|l| l.contains(series_index, series_count))
        .or(layers.first())
        .map_or(ChartKind::Line, |l| l.kind)
}

struct Frame {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

struct Pass<'a> {
    cfg: &'a RendererConfig,
    dataset: &'a Dataset,
    layers: &'a [Layer],
    f: Frame,
    orientation: Orientation,
    time_axis: bool,
}

/// Draws text rotated by `extra` degrees, compensating the chart's own orientation.
fn draw_text(surface: &mut dyn Surface, orientation: Orientation, text: &str, at: PointF, paint: &Paint, extra: f32) {
    if text.is_empty() {
        return;
    }
    let angle = -orientation.angle() + extra;
    if angle != 0.0 {
        surface.rotate(angle, at);
    }
    surface.draw_text(text, at, paint);
    if angle != 0.0 {
        surface.rotate(-angle, at);
    }
}

pub(crate) fn render(
    surface: &mut dyn Surface,
    area: RectI32,
    dataset: &Dataset,
    cfg: &RendererConfig,
    layers: &[Layer],
    state: PassState<'_>,
) -> OrientationTransform {
    let (x, y, width, height) = (area.left, area.top, area.width(), area.height());
    let m = cfg.margins;
    let left = x + m.left;
    let top = y + m.top;
    let mut right = x + width - m.right;
    let vertical = cfg.is_vertical();

    let titles = dataset.titles();
    let count = dataset.len();
    let series_kinds: Vec<ChartKind> = (0..count).map(|i| kind_for(layers, i, count)).collect();
    let items: Vec<LegendItem<'_>> = titles
        .iter()
        .zip(&series_kinds)
        .map(|(t, k)| LegendItem { title: t.as_str(), shape_width: k.legend_shape_width() })
        .collect();

    let legend_frame = |right: i32, y_anchor: i32, legend_size: i32| LegendFrame {
        left,
        right,
        y: y_anchor,
        width,
        height,
        legend_size,
        text_size: cfg.legend_text_size,
        vertical,
    };
    let mut legend_size = layout::legend_size(cfg, height / 5, cfg.axis_title_text_size);
    if cfg.fit_legend && cfg.show_legend {
        legend_size = layout::reserve_legend_space(&items, &legend_frame(right, y, legend_size), &*surface);
    }
    let mut bottom = y + height - m.bottom - legend_size;

    if cfg.apply_background {
        surface.draw_rect(area.to_rect_f(), &Paint::fill(cfg.theme.background));
    }
    if vertical {
        right -= legend_size;
        bottom += legend_size - 20;
    }

    let orientation = OrientationTransform::new(cfg.orientation, x, y, width, height);
    let rotate = !orientation.is_identity();
    if rotate {
        orientation.apply(surface);
    }

    let screen = RectI32::from_ltrb(left, top, right, bottom);
    state.engine.compute(screen, dataset, cfg);
    let engine = &*state.engine;

    let pass = Pass {
        cfg,
        dataset,
        layers,
        f: Frame { x, y, width, height, left, top, right, bottom },
        orientation: cfg.orientation,
        time_axis: layers.first().is_some_and(|l| l.kind == ChartKind::Time),
    };

    if cfg.show_grid_x || cfg.show_grid_y {
        pass.draw_grid(surface, engine);
    }

    state.hits.clear();
    let drawn = pass.draw_all_series(surface, engine, state.hits);

    pass.draw_margins(surface);

    let has_values = dataset.has_values();
    if cfg.show_x_labels && has_values {
        pass.draw_x_labels(surface, engine);
    }
    if cfg.show_custom_text_x_labels {
        pass.draw_x_text_labels(surface, engine);
    }
    if cfg.show_y_labels && has_values {
        pass.draw_y_labels(surface, engine);
    }
    if cfg.show_custom_text_y_labels {
        pass.draw_y_text_labels(surface, engine);
    }
    if cfg.show_labels && has_values {
        pass.draw_chart_title(surface);
    }

    if cfg.show_legend {
        let frame = legend_frame(right, y + cfg.x_labels_padding as i32, legend_size);
        let shape = |s: &mut dyn Surface, i: usize, at: PointF, paint: &Paint| {
            kinds::draw_legend_shape(s, series_kinds[i], &cfg.series_style(i), at, paint);
        };
        if rotate {
            orientation.revert(surface);
            layout::draw_legend(surface, &items, &frame, |i| cfg.series_color(i), shape);
            orientation.apply(surface);
        } else {
            layout::draw_legend(surface, &items, &frame, |i| cfg.series_color(i), shape);
        }
    }

    if cfg.show_axes {
        pass.draw_axes(surface, engine);
    }
    if rotate {
        orientation.revert(surface);
    }

    tracing::debug!(
        left, top, right, bottom,
        scales = engine.scale_count(),
        legend_size,
        series_drawn = drawn,
        "xy render pass complete"
    );
    orientation
}

impl Pass<'_> {
    fn x_labels_color(&self) -> Color {
        self.cfg.x_labels_color.unwrap_or(self.cfg.theme.axis_label)
    }

    fn grid_paint(&self, axis: &ScaleAxis) -> Paint {
        let mut p = Paint::stroke(axis.grid_color.unwrap_or(self.cfg.theme.grid), self.cfg.grid_line_width);
        p.anti_alias = self.cfg.antialiasing;
        p
    }

    fn x_label_text(&self, value: f64, st: &ScaleTransform) -> String {
        if self.time_axis {
            let fmt = self
                .cfg
                .x_date_format
                .clone()
                .unwrap_or_else(|| default_time_format(st.x.max - st.x.min).to_string());
            format_time_label(value, &fmt)
        } else {
            format_label(value, self.cfg.x_label_decimals)
        }
    }

    fn draw_grid(&self, surface: &mut dyn Surface, engine: &TransformEngine) {
        let f = &self.f;
        let Some(st0) = engine.scale(0) else { return };
        if self.cfg.show_grid_x {
            let paint = self.grid_paint(&self.cfg.scale_axis(0));
            for v in tick_values(st0.x.min, st0.x.max, self.cfg.x_labels) {
                let px = st0.x.to_px(v) as f32;
                surface.draw_path(&[PointF::new(px, f.bottom as f32), PointF::new(px, f.top as f32)], false, &paint);
            }
        }
        if self.cfg.show_grid_y {
            for i in 0..engine.scale_count() {
                let Some(st) = engine.scale(i) else { continue };
                let paint = self.grid_paint(&self.cfg.scale_axis(i));
                for v in tick_values(st.y.min, st.y.max, self.cfg.y_labels) {
                    let py = st.y.to_px(v) as f32;
                    surface.draw_path(&[PointF::new(f.left as f32, py), PointF::new(f.right as f32, py)], false, &paint);
                }
            }
        }
    }

    /// Draws every layer's series in order; returns how many series runs were drawn.
    fn draw_all_series(&self, surface: &mut dyn Surface, engine: &TransformEngine, hits: &mut HitIndex) -> usize {
        let count = self.dataset.len();
        let mut drawn = 0;
        for layer in self.layers {
            let members = layer.indices(count);
            let layer_len = members.len();
            for (layer_pos, &si) in members.iter().enumerate() {
                let Some(series) = self.dataset.series_at(si) else { continue };
                if series.is_empty() {
                    continue;
                }
                let Some(st) = engine.scale(series.scale()) else { continue };
                let style = self.cfg.series_style(si);
                let ctx = SeriesContext {
                    series_index: si,
                    style: &style,
                    color: self.cfg.series_color(si),
                    layer_len,
                    layer_pos,
                    y_axis_value: (self.f.bottom as f64).min(st.y.to_px(0.0)) as f32,
                    start_index: 0,
                    selectable_buffer: self.cfg.selectable_buffer,
                    antialias: self.cfg.antialiasing,
                };
                hits.begin_series(si);
                self.draw_one_series(surface, layer.kind, ctx, series, st, hits);
                drawn += 1;
            }
        }
        drawn
    }

    fn draw_one_series(
        &self,
        surface: &mut dyn Surface,
        kind: ChartKind,
        mut ctx: SeriesContext<'_>,
        series: &Series,
        st: &ScaleTransform,
        hits: &mut HitIndex,
    ) {
        let mut points: Vec<PointF> = Vec::new();
        let mut values: Vec<(f64, f64)> = Vec::new();
        let range = series.range(st.x.min, st.x.max, ctx.style.display_bounding_points);
        for idx in range {
            let (xv, yv) = series.points()[idx];
            let y = match yv {
                Some(v) => v,
                None if kind.render_null_values() => 0.0,
                None => {
                    flush_run(&mut *surface, kind, &ctx, &mut points, &mut values, hits);
                    hits.push_gap();
                    continue;
                }
            };
            if points.is_empty() {
                ctx.start_index = idx;
            }
            let p = st.to_screen(Point::new(xv, y));
            points.push(PointF::new(p.x as f32, p.y as f32));
            values.push((xv, y));
        }
        flush_run(&mut *surface, kind, &ctx, &mut points, &mut values, hits);

        self.draw_annotations(surface, &ctx, series, st);
    }

    fn draw_annotations(&self, surface: &mut dyn Surface, ctx: &SeriesContext<'_>, series: &Series, st: &ScaleTransform) {
        let color = ctx.style.annotations_color.unwrap_or(self.cfg.theme.annotations);
        let paint = Paint::text(color, ctx.style.annotations_text_size, ctx.style.annotations_align);
        let frame_bottom = (self.f.y + self.f.height) as f64;
        for a in series.annotations() {
            let p = st.to_screen(Point::new(a.x, a.y));
            if a.text.is_empty() || p.y >= frame_bottom {
                continue;
            }
            surface.draw_text(&a.text, PointF::new(p.x as f32, p.y as f32), &paint);
        }
    }

    /// Paints the margins over anything the series drew outside the plot rectangle.
    fn draw_margins(&self, surface: &mut dyn Surface) {
        let f = &self.f;
        let paint = Paint::fill(self.cfg.theme.margins);
        let (x0, y0, x1, y1) = (f.x, f.y, f.x + f.width, f.y + f.height);
        let strips = [
            RectI32::from_ltrb(x0, f.bottom, x1, y1),
            RectI32::from_ltrb(x0, y0, x1, y0 + self.cfg.margins.top),
            RectI32::from_ltrb(x0, y0, f.left, y1),
            RectI32::from_ltrb(f.right, y0, x1, y1),
        ];
        for r in strips {
            if r.width() > 0 && r.height() > 0 {
                surface.draw_rect(r.to_rect_f(), &paint);
            }
        }
    }

    fn draw_x_labels(&self, surface: &mut dyn Surface, engine: &TransformEngine) {
        let (cfg, f) = (self.cfg, &self.f);
        let Some(st0) = engine.scale(0) else { return };
        let color = self.x_labels_color();
        let tick = Paint::stroke(color, 1.0);
        let text = Paint::text(color, cfg.labels_text_size, cfg.x_labels_align);
        let label_y = f.bottom as f32 + cfg.labels_text_size * 4.0 / 3.0 + cfg.x_labels_padding;
        for v in tick_values(st0.x.min, st0.x.max, cfg.x_labels) {
            let px = st0.x.to_px(v) as f32;
            if cfg.show_tick_marks {
                surface.draw_line(
                    PointF::new(px, f.bottom as f32),
                    PointF::new(px, f.bottom as f32 + cfg.labels_text_size / 3.0),
                    &tick,
                );
            }
            draw_text(surface, self.orientation, &self.x_label_text(v, st0), PointF::new(px, label_y), &text, cfg.x_labels_angle);
        }

        let size = cfg.axis_title_text_size;
        let title = Paint::text(cfg.theme.labels, size, Align::Center);
        let cx = (f.x + f.width / 2) as f32;
        match self.orientation {
            Orientation::Horizontal => {
                let ty = f.bottom as f32 + cfg.labels_text_size * 4.0 / 3.0 + cfg.x_labels_padding + size;
                draw_text(surface, self.orientation, &cfg.x_title, PointF::new(cx, ty), &title, 0.0);
            }
            Orientation::Vertical => {
                let ty = (f.y + f.height) as f32 - size + cfg.x_labels_padding;
                draw_text(surface, self.orientation, &cfg.x_title, PointF::new(cx, ty), &title, -90.0);
            }
        }
    }

    fn draw_x_text_labels(&self, surface: &mut dyn Surface, engine: &TransformEngine) {
        let (cfg, f) = (self.cfg, &self.f);
        let Some(st0) = engine.scale(0) else { return };
        let color = self.x_labels_color();
        let tick = Paint::stroke(color, 1.0);
        let text = Paint::text(color, cfg.labels_text_size, cfg.x_labels_align);
        let grid = self.grid_paint(&cfg.scale_axis(0));
        let label_y = f.bottom as f32 + cfg.labels_text_size * 4.0 / 3.0 + cfg.x_labels_padding;
        for (loc, label) in &cfg.x_text_labels {
            if !(st0.x.min <= *loc && *loc <= st0.x.max) {
                continue;
            }
            let px = st0.x.to_px(*loc) as f32;
            if cfg.show_tick_marks {
                surface.draw_line(
                    PointF::new(px, f.bottom as f32),
                    PointF::new(px, f.bottom as f32 + cfg.labels_text_size / 3.0),
                    &tick,
                );
            }
            draw_text(surface, self.orientation, label, PointF::new(px, label_y), &text, cfg.x_labels_angle);
            if cfg.show_custom_text_grid_x {
                let solid = Paint { dash: None, ..grid };
                let paint = if *loc == st0.x.min { &solid } else { &grid };
                surface.draw_path(&[PointF::new(px, f.bottom as f32), PointF::new(px, f.top as f32)], false, paint);
            }
        }
    }

    fn draw_y_labels(&self, surface: &mut dyn Surface, engine: &TransformEngine) {
        let (cfg, f) = (self.cfg, &self.f);
        for i in 0..engine.scale_count() {
            let Some(st) = engine.scale(i) else { continue };
            let axis = cfg.scale_axis(i);
            let color = axis.labels_color.unwrap_or(cfg.theme.axis_label);
            let tick = Paint::stroke(color, 1.0);
            let text = Paint::text(color, cfg.labels_text_size, axis.resolved_labels_align());
            for v in tick_values(st.y.min, st.y.max, cfg.y_labels) {
                if axis.text_label(v).is_some() {
                    continue;
                }
                let py = st.y.to_px(v) as f32;
                let label = format_label(v, axis.label_decimals);
                let ty = py - cfg.y_labels_vertical_padding;
                let (line, at) = match (self.orientation, axis.align) {
                    (Orientation::Horizontal, Align::Right) => (
                        (PointF::new(f.right as f32, py), PointF::new(f.right as f32 + TICK_LEN, py)),
                        PointF::new(f.right as f32 + cfg.y_labels_padding, ty),
                    ),
                    (Orientation::Horizontal, _) => (
                        (PointF::new(f.left as f32 - TICK_LEN, py), PointF::new(f.left as f32, py)),
                        PointF::new(f.left as f32 - cfg.y_labels_padding, ty),
                    ),
                    (Orientation::Vertical, _) => (
                        (PointF::new(f.right as f32 + TICK_LEN, py), PointF::new(f.right as f32, py)),
                        PointF::new(f.right as f32 + 10.0 + cfg.y_labels_padding, ty),
                    ),
                };
                if cfg.show_tick_marks {
                    surface.draw_line(line.0, line.1, &tick);
                }
                draw_text(surface, self.orientation, &label, at, &text, cfg.y_labels_angle);
            }
        }

        let size = cfg.axis_title_text_size;
        let title = Paint::text(cfg.theme.labels, size, Align::Center);
        let cy = (f.y + f.height / 2) as f32;
        match self.orientation {
            Orientation::Horizontal => {
                for i in 0..engine.scale_count() {
                    let axis = cfg.scale_axis(i);
                    let tx = if axis.align == Align::Right { (f.x + f.width) as f32 } else { f.x as f32 + size };
                    draw_text(surface, self.orientation, &axis.title, PointF::new(tx, cy), &title, -90.0);
                }
            }
            Orientation::Vertical => {
                let axis = cfg.scale_axis(0);
                draw_text(surface, self.orientation, &axis.title, PointF::new(f.right as f32 + 20.0, cy), &title, 0.0);
            }
        }
    }

    fn draw_y_text_labels(&self, surface: &mut dyn Surface, engine: &TransformEngine) {
        let (cfg, f) = (self.cfg, &self.f);
        for i in 0..engine.scale_count() {
            let Some(st) = engine.scale(i) else { continue };
            let axis = cfg.scale_axis(i);
            let color = axis.labels_color.unwrap_or(cfg.theme.axis_label);
            let tick = Paint::stroke(color, 1.0);
            let text = Paint::text(color, cfg.labels_text_size, axis.resolved_labels_align());
            let grid = self.grid_paint(&axis);
            for (loc, label) in &axis.text_labels {
                if !(st.y.min <= *loc && *loc <= st.y.max) {
                    continue;
                }
                let py = st.y.to_px(*loc) as f32;
                let ty = py - cfg.y_labels_vertical_padding;
                let (line, at) = match (self.orientation, axis.align) {
                    (Orientation::Horizontal, Align::Right) => (
                        (PointF::new(f.right as f32, py), PointF::new(f.right as f32 + TICK_LEN, py)),
                        PointF::new(f.right as f32 - cfg.y_labels_padding, ty),
                    ),
                    (Orientation::Horizontal, _) => (
                        (PointF::new(f.left as f32 - TICK_LEN, py), PointF::new(f.left as f32, py)),
                        PointF::new(f.left as f32 - cfg.y_labels_padding, ty),
                    ),
                    (Orientation::Vertical, _) => (
                        (PointF::new(f.right as f32 + TICK_LEN, py), PointF::new(f.right as f32, py)),
                        PointF::new(f.right as f32 + 10.0, ty),
                    ),
                };
                if cfg.show_tick_marks {
                    surface.draw_line(line.0, line.1, &tick);
                }
                draw_text(surface, self.orientation, label, at, &text, cfg.y_labels_angle);
                if cfg.show_custom_text_grid_y {
                    surface.draw_path(&[PointF::new(f.left as f32, py), PointF::new(f.right as f32, py)], false, &grid);
                }
            }
        }
    }

    fn draw_chart_title(&self, surface: &mut dyn Surface) {
        let (cfg, f) = (self.cfg, &self.f);
        let paint = Paint::text(cfg.theme.labels, cfg.chart_title_text_size, Align::Center);
        let at = match self.orientation {
            Orientation::Horizontal => PointF::new((f.x + f.width / 2) as f32, f.y as f32 + cfg.chart_title_text_size),
            Orientation::Vertical => PointF::new(f.x as f32 + cfg.axis_title_text_size, (f.top + f.height / 2) as f32),
        };
        draw_text(surface, self.orientation, &cfg.chart_title, at, &paint, 0.0);
    }

    fn draw_axes(&self, surface: &mut dyn Surface, engine: &TransformEngine) {
        let f = &self.f;
        let paint = Paint::stroke(self.cfg.theme.axis_line, 1.0);
        let (l, t, r, b) = (f.left as f32, f.top as f32, f.right as f32, f.bottom as f32);
        surface.draw_line(PointF::new(l, b), PointF::new(r, b), &paint);
        let right_axis = (0..engine.scale_count()).any(|i| self.cfg.scale_axis(i).align == Align::Right);
        match self.orientation {
            Orientation::Horizontal => {
                surface.draw_line(PointF::new(l, t), PointF::new(l, b), &paint);
                if right_axis {
                    surface.draw_line(PointF::new(r, t), PointF::new(r, b), &paint);
                }
            }
            Orientation::Vertical => surface.draw_line(PointF::new(r, t), PointF::new(r, b), &paint),
        }
    }
}

/// Draws one contiguous run, records its hit areas and empties the buffers.
fn flush_run(
    surface: &mut dyn Surface,
    kind: ChartKind,
    ctx: &SeriesContext<'_>,
    points: &mut Vec<PointF>,
    values: &mut Vec<(f64, f64)>,
    hits: &mut HitIndex,
) {
    if points.is_empty() {
        return;
    }
    kinds::draw_series(surface, kind, ctx, points);
    if ctx.style.display_chart_values {
        kinds::draw_chart_values(surface, kind, ctx, points, values);
    }
    hits.extend(kinds::clickable_areas_for_points(kind, ctx, points, values));
    points.clear();
    values.clear();
}
