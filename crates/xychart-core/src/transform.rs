// File: crates/xychart-core/src/transform.rs
// Summary: Per-pass data<->screen transform engine (multi-scale) and the vertical orientation transform.

use crate::config::RendererConfig;
use crate::dataset::Dataset;
use crate::geometry::{Point, PointF, RectI32};
use crate::scale::AxisScale;
use crate::surface::Surface;
use crate::types::Orientation;
use crate::view::Window;

/// X and Y scales of one value scale for the last pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTransform {
    pub x: AxisScale,
    pub y: AxisScale,
}

impl ScaleTransform {
    pub fn window(&self) -> Window {
        Window::new(self.x.min, self.x.max, self.y.min, self.y.max)
    }

    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(self.x.to_px(p.x), self.y.to_px(p.y))
    }

    pub fn to_data(&self, p: Point) -> Point {
        Point::new(self.x.from_px(p.x), self.y.from_px(p.y))
    }
}

/// Bounds of one scale while deriving; `None` means unresolved.
#[derive(Clone, Copy, Debug, Default)]
struct PartialWindow {
    x_min: Option<f64>,
    x_max: Option<f64>,
    y_min: Option<f64>,
    y_max: Option<f64>,
}

fn fold_min(acc: Option<f64>, v: f64) -> Option<f64> {
    Some(acc.map_or(v, |a| a.min(v)))
}

fn fold_max(acc: Option<f64>, v: f64) -> Option<f64> {
    Some(acc.map_or(v, |a| a.max(v)))
}

/// A half-resolved axis collapses onto its known bound.
fn bounds(min: Option<f64>, max: Option<f64>) -> (f64, f64) {
    match (min, max) {
        (Some(lo), Some(hi)) => (lo, hi),
        (lo, hi) => {
            let v = lo.or(hi).unwrap_or(0.0);
            (v, v)
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TransformEngine {
    screen: Option<RectI32>,
    scales: Vec<ScaleTransform>,
    calc_range: Vec<Option<Window>>,
}

impl TransformEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives every scale's window for `screen`: explicit bounds win, unset ones come from
    /// the cached extrema of that scale's non-empty series. Scales above 0 share scale 0's X.
    pub fn compute(&mut self, screen: RectI32, dataset: &Dataset, config: &RendererConfig) {
        let count = dataset.scale_count().max(config.scales_count());
        let mut derived = vec![PartialWindow::default(); count];
        for (i, d) in derived.iter_mut().enumerate() {
            let r = config.range(i);
            *d = PartialWindow { x_min: r.x_min, x_max: r.x_max, y_min: r.y_min, y_max: r.y_max };
        }
        let mut data = vec![PartialWindow::default(); count];
        for s in dataset.series() {
            let Some(e) = s.extrema() else { continue };
            let d = &mut data[s.scale()];
            d.x_min = fold_min(d.x_min, e.min_x);
            d.x_max = fold_max(d.x_max, e.max_x);
            if e.has_y() {
                d.y_min = fold_min(d.y_min, e.min_y);
                d.y_max = fold_max(d.y_max, e.max_y);
            }
        }
        for (d, found) in derived.iter_mut().zip(&data) {
            d.x_min = d.x_min.or(found.x_min);
            d.x_max = d.x_max.or(found.x_max);
            d.y_min = d.y_min.or(found.y_min);
            d.y_max = d.y_max.or(found.y_max);
        }

        let (l, t, r, b) = (screen.left as f64, screen.top as f64, screen.right as f64, screen.bottom as f64);
        self.scales.clear();
        self.calc_range.clear();
        for (i, d) in derived.iter().enumerate() {
            let (x0, x1) = bounds(d.x_min, d.x_max);
            let (y0, y1) = bounds(d.y_min, d.y_max);
            let mut x = AxisScale::horizontal(l, r, x0, x1);
            let y = AxisScale::vertical(t, b, y0, y1);
            let mut resolved = d.x_min.is_some() && d.x_max.is_some() && d.y_min.is_some() && d.y_max.is_some();
            if i > 0 {
                x = x.sharing(&self.scales[0].x);
                resolved &= self.calc_range[0].is_some();
            }
            let st = ScaleTransform { x, y };
            self.calc_range.push(resolved.then(|| st.window()));
            self.scales.push(st);
        }
        self.screen = Some(screen);
    }

    /// Plot rectangle of the last pass.
    pub fn screen(&self) -> Option<RectI32> {
        self.screen
    }

    pub fn scale_count(&self) -> usize {
        self.scales.len()
    }

    pub fn scale(&self, scale: usize) -> Option<&ScaleTransform> {
        self.scales.get(scale)
    }

    /// Window in effect for `scale` during the last pass, if every bound resolved.
    pub fn calc_range(&self, scale: usize) -> Option<Window> {
        self.calc_range.get(scale).copied().flatten()
    }

    /// Data to screen for `scale`; the point is returned unchanged before any pass.
    pub fn to_screen(&self, p: Point, scale: usize) -> Point {
        match self.scales.get(scale) {
            Some(st) => st.to_screen(p),
            None => p,
        }
    }

    /// Screen to data for `scale`, the exact inverse of `to_screen`.
    pub fn to_data(&self, p: Point, scale: usize) -> Point {
        match self.scales.get(scale) {
            Some(st) => st.to_data(p),
            None => p,
        }
    }
}

/// Canvas transform that draws a logical horizontal chart rotated into a vertical frame:
/// `rotate(angle, center) * translate(-tx, ty) * scale(s, 1/s)`, where the translation keeps
/// the frame centre fixed under the scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationTransform {
    pub angle: f32,
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub center: PointF,
}

impl OrientationTransform {
    pub fn new(orientation: Orientation, x: i32, y: i32, width: i32, height: i32) -> Self {
        let scale = if width != 0 && height != 0 { height as f32 / width as f32 } else { 1.0 };
        let center = PointF::new(x as f32 + width as f32 / 2.0, y as f32 + height as f32 / 2.0);
        // frames at the origin reduce to t = |width - height| / 2 on both axes
        let translate_x = center.x * (scale - 1.0);
        let translate_y = center.y * (1.0 - 1.0 / scale);
        Self { angle: orientation.angle(), scale, translate_x, translate_y, center }
    }

    pub fn is_identity(&self) -> bool {
        self.angle == 0.0
    }

    pub fn apply(&self, surface: &mut dyn Surface) {
        surface.rotate(self.angle, self.center);
        surface.translate(-self.translate_x, self.translate_y);
        surface.scale(self.scale, 1.0 / self.scale);
    }

    pub fn revert(&self, surface: &mut dyn Surface) {
        surface.scale(1.0 / self.scale, self.scale);
        surface.translate(self.translate_x, -self.translate_y);
        surface.rotate(-self.angle, self.center);
    }

    fn rotate_about(&self, p: (f64, f64), degrees: f64) -> (f64, f64) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let (cx, cy) = (self.center.x as f64, self.center.y as f64);
        let (dx, dy) = (p.0 - cx, p.1 - cy);
        (cx + dx * cos - dy * sin, cy + dx * sin + dy * cos)
    }

    /// Logical (drawing) coordinates to device coordinates.
    pub fn to_physical(&self, p: PointF) -> PointF {
        let (s, tx, ty) = (self.scale as f64, self.translate_x as f64, self.translate_y as f64);
        let scaled = (p.x as f64 * s, p.y as f64 / s);
        let moved = (scaled.0 - tx, scaled.1 + ty);
        let (x, y) = self.rotate_about(moved, self.angle as f64);
        PointF::new(x as f32, y as f32)
    }

    /// Device coordinates back to the logical frame the series were drawn in.
    pub fn to_logical(&self, p: PointF) -> PointF {
        let (s, tx, ty) = (self.scale as f64, self.translate_x as f64, self.translate_y as f64);
        let (rx, ry) = self.rotate_about((p.x as f64, p.y as f64), -(self.angle as f64));
        let moved = (rx + tx, ry - ty);
        PointF::new((moved.0 / s) as f32, (moved.1 * s) as f32)
    }
}
