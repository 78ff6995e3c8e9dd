// File: crates/xychart-core/src/tools.rs
// Summary: Interaction tools (pan, zoom, fit-to-data) rewriting the per-scale windows of a chart.

use crate::chart::Chart;
use crate::geometry::{Point, PointF};
use crate::view::Window;

/// Window a tool starts from: explicit bounds, unset ones taken from the last pass.
/// `None` when a bound is neither set nor derived yet.
fn current_window(chart: &Chart, scale: usize) -> Option<Window> {
    let range = chart.config().range(scale);
    match chart.engine().calc_range(scale) {
        Some(calc) => Some(range.resolve(&calc)),
        None => range.window(),
    }
}

fn scale_count(chart: &Chart) -> usize {
    chart.engine().scale_count().max(chart.config().scales_count())
}

/// Moves `[min, max]` by `delta`, re-anchoring on a limit instead of crossing it.
fn shift(min: f64, max: f64, delta: f64, limits: Option<(f64, f64)>) -> (f64, f64) {
    let width = max - min;
    match limits {
        Some((lo, _)) if lo > min + delta => (lo, lo + width),
        Some((_, hi)) if hi < max + delta => (hi - width, hi),
        _ => (min + delta, max + delta),
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Pan;

impl Pan {
    pub fn new() -> Self {
        Self
    }

    /// Translates every scale by the data distance between two logical screen points.
    pub fn apply(&self, chart: &mut Chart, from: PointF, to: PointF) {
        let cfg = chart.config();
        if !cfg.pan_enabled {
            return;
        }
        let (pan_x, pan_y, limits) = (cfg.pan_x_enabled, cfg.pan_y_enabled, cfg.pan_limits);
        for i in 0..scale_count(chart) {
            let (Some(w), Some(st)) = (current_window(chart, i), chart.engine().scale(i).copied()) else {
                tracing::trace!(scale = i, "pan skipped: no resolved window");
                continue;
            };
            let old = st.to_data(Point::from(from));
            let new = st.to_data(Point::from(to));
            // flat axes keep their bounds, explicit or derived
            if pan_x && w.x_span() != 0.0 && !st.x.is_degenerate() {
                let (lo, hi) = shift(w.x_min, w.x_max, old.x - new.x, limits.map(|l| (l.x_min, l.x_max)));
                tracing::trace!(scale = i, lo, hi, "pan X");
                chart.config_mut().set_x_range(i, lo, hi);
            }
            if pan_y && w.y_span() != 0.0 && !st.y.is_degenerate() {
                let (lo, hi) = shift(w.y_min, w.y_max, old.y - new.y, limits.map(|l| (l.y_min, l.y_max)));
                tracing::trace!(scale = i, lo, hi, "pan Y");
                chart.config_mut().set_y_range(i, lo, hi);
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Zoom {
    pub zoom_in: bool,
    pub rate: f64,
}

impl Zoom {
    pub fn new(zoom_in: bool, rate: f64) -> Self {
        Self { zoom_in, rate }
    }

    fn scaled(&self, span: f64) -> f64 {
        if self.zoom_in { span / self.rate } else { span * self.rate }
    }

    /// Scales every window about its centre. An axis whose new bounds would leave the
    /// zoom limits keeps its current bounds.
    pub fn apply(&self, chart: &mut Chart) {
        let cfg = chart.config();
        if !cfg.zoom_enabled || self.rate <= 0.0 {
            return;
        }
        let (zoom_x, zoom_y, limits) = (cfg.zoom_x_enabled, cfg.zoom_y_enabled, cfg.zoom_limits);
        for i in 0..scale_count(chart) {
            let Some(w) = current_window(chart, i) else { continue };
            let (cx, cy) = w.center();
            if zoom_x && w.x_span() != 0.0 {
                let half = self.scaled(w.x_span()) / 2.0;
                let (lo, hi) = (cx - half, cx + half);
                if limits.map_or(true, |l| l.x_min <= lo && hi <= l.x_max) {
                    chart.config_mut().set_x_range(i, lo, hi);
                } else {
                    tracing::trace!(scale = i, lo, hi, "zoom rejected on X: outside limits");
                }
            }
            if zoom_y && w.y_span() != 0.0 {
                let half = self.scaled(w.y_span()) / 2.0;
                let (lo, hi) = (cy - half, cy + half);
                if limits.map_or(true, |l| l.y_min <= lo && hi <= l.y_max) {
                    chart.config_mut().set_y_range(i, lo, hi);
                } else {
                    tracing::trace!(scale = i, lo, hi, "zoom rejected on Y: outside limits");
                }
            }
        }
    }
}

/// Restores the initial window, else frames each scale's data with a 1/40 margin.
#[derive(Clone, Copy, Debug, Default)]
pub struct FitZoom;

impl FitZoom {
    pub fn apply(&self, chart: &mut Chart) {
        if let Some(initial) = chart.config().initial_range {
            tracing::trace!(?initial, "fit: restoring initial range");
            chart.config_mut().set_window(0, initial);
            return;
        }
        let count = chart.dataset().scale_count().max(chart.config().scales_count());
        for scale in 0..count {
            let Some(w) = data_window(chart, scale) else { continue };
            let fitted = w.expand(w.x_span().abs() / 40.0, w.y_span().abs() / 40.0);
            tracing::trace!(scale, ?fitted, "fit to data");
            chart.config_mut().set_window(scale, fitted);
        }
    }
}

/// Union of the extrema of every non-empty series on `scale`, with the kind's default minimum.
fn data_window(chart: &Chart, scale: usize) -> Option<Window> {
    let mut acc: Option<Window> = None;
    for (i, s) in chart.dataset().series().iter().enumerate() {
        if s.scale() != scale {
            continue;
        }
        let Some(e) = s.extrema() else { continue };
        if !e.has_y() {
            continue;
        }
        let mut w = Window::new(e.min_x, e.max_x, e.min_y, e.max_y);
        if let Some(min) = chart.default_minimum(i) {
            w.y_min = w.y_min.min(min);
        }
        acc = Some(acc.map_or(w, |a| a.union(&w)));
    }
    acc
}
