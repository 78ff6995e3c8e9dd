// File: crates/xychart-core/src/kinds/bar.rs
// Summary: Side-by-side, stacked and range bars with their hit rectangles and value labels.

use super::SeriesContext;
use crate::geometry::{PointF, RectF};
use crate::hit::ClickableArea;
use crate::surface::{Paint, Surface};
use crate::text::format_label;
use crate::types::Align;

pub(super) const SHAPE_WIDTH: f32 = 12.0;

/// Half a bar's width: run extent over twice the point count, 10 px for a single column,
/// split between the layer's series unless stacked.
fn half_diff_x(ctx: &SeriesContext<'_>, points: &[PointF], stacked: bool) -> f32 {
    let (Some(first), Some(last)) = (points.first(), points.last()) else { return 10.0 };
    let mut half = (last.x - first.x) / (2 * points.len()) as f32;
    if half == 0.0 {
        half = 10.0;
    }
    if !stacked {
        half /= ctx.layer_len.max(1) as f32;
    }
    half
}

fn column(ctx: &SeriesContext<'_>, x: f32, half: f32, stacked: bool) -> (f32, f32) {
    if stacked {
        (x - half, x + half)
    } else {
        let start = x - ctx.layer_len as f32 * half + ctx.layer_pos as f32 * 2.0 * half;
        (start, start + 2.0 * half)
    }
}

fn bar_rect(ctx: &SeriesContext<'_>, p: PointF, half: f32, stacked: bool) -> RectF {
    let (l, r) = column(ctx, p.x, half, stacked);
    RectF::from_ltrb(l, p.y.min(ctx.y_axis_value), r, p.y.max(ctx.y_axis_value))
}

fn range_rect(ctx: &SeriesContext<'_>, lo: PointF, hi: PointF, half: f32) -> RectF {
    let (l, r) = column(ctx, lo.x, half, false);
    RectF::from_ltrb(l, hi.y.min(lo.y), r, hi.y.max(lo.y))
}

pub(super) fn draw(surface: &mut dyn Surface, ctx: &SeriesContext<'_>, points: &[PointF], stacked: bool) {
    let paint = ctx.fill();
    let half = half_diff_x(ctx, points, stacked);
    for p in points {
        surface.draw_rect(bar_rect(ctx, *p, half, stacked), &paint);
    }
}

pub(super) fn draw_range(surface: &mut dyn Surface, ctx: &SeriesContext<'_>, points: &[PointF]) {
    let paint = ctx.fill();
    let half = half_diff_x(ctx, points, false);
    for pair in points.chunks_exact(2) {
        surface.draw_rect(range_rect(ctx, pair[0], pair[1], half), &paint);
    }
}

pub(super) fn clickable_areas(
    ctx: &SeriesContext<'_>,
    points: &[PointF],
    values: &[(f64, f64)],
    stacked: bool,
) -> Vec<Option<ClickableArea>> {
    let half = half_diff_x(ctx, points, stacked);
    points
        .iter()
        .zip(values)
        .enumerate()
        .map(|(k, (p, &(x, y)))| {
            Some(ClickableArea { rect: bar_rect(ctx, *p, half, stacked), point_index: ctx.start_index + k, x, y })
        })
        .collect()
}

/// Both points of a (min, max) pair share the pair's rectangle; an odd trailing point gets none.
pub(super) fn clickable_range_areas(ctx: &SeriesContext<'_>, points: &[PointF], values: &[(f64, f64)]) -> Vec<Option<ClickableArea>> {
    let half = half_diff_x(ctx, points, false);
    let mut out = Vec::with_capacity(points.len());
    for (k, pair) in points.chunks(2).enumerate() {
        if let [lo, hi] = pair {
            let rect = range_rect(ctx, *lo, *hi, half);
            for j in 0..2 {
                let i = k * 2 + j;
                out.push(values.get(i).map(|&(x, y)| ClickableArea { rect, point_index: ctx.start_index + i, x, y }));
            }
        } else {
            out.push(None);
        }
    }
    out
}

pub(super) fn draw_legend_shape(surface: &mut dyn Surface, at: PointF, paint: &Paint) {
    let half = SHAPE_WIDTH / 2.0;
    surface.draw_rect(RectF::from_ltrb(at.x, at.y - half, at.x + SHAPE_WIDTH, at.y + half), &Paint::fill(paint.color));
}

fn label_x(ctx: &SeriesContext<'_>, x: f32, half: f32, stacked: bool) -> f32 {
    if stacked {
        x
    } else {
        x + ctx.layer_pos as f32 * 2.0 * half - (ctx.layer_len as f32 - 1.5) * half
    }
}

pub(super) fn draw_values(
    surface: &mut dyn Surface,
    ctx: &SeriesContext<'_>,
    points: &[PointF],
    values: &[(f64, f64)],
    stacked: bool,
) {
    let paint = Paint::text(ctx.color, ctx.style.chart_values_text_size, Align::Center);
    let half = half_diff_x(ctx, points, stacked);
    for (p, &(_, y)) in points.iter().zip(values) {
        let text = format_label(y, ctx.style.chart_values_decimals);
        surface.draw_text(&text, PointF::new(label_x(ctx, p.x, half, stacked), p.y - 3.5), &paint);
    }
}

/// Max value above the bar, min value below it.
pub(super) fn draw_range_values(surface: &mut dyn Surface, ctx: &SeriesContext<'_>, points: &[PointF], values: &[(f64, f64)]) {
    let paint = Paint::text(ctx.color, ctx.style.chart_values_text_size, Align::Center);
    let half = half_diff_x(ctx, points, false);
    for (pair, vals) in points.chunks_exact(2).zip(values.chunks_exact(2)) {
        let x = label_x(ctx, pair[0].x, half, false);
        let decimals = ctx.style.chart_values_decimals;
        surface.draw_text(&format_label(vals[1].1, decimals), PointF::new(x, pair[1].y - 3.0), &paint);
        surface.draw_text(&format_label(vals[0].1, decimals), PointF::new(x, pair[0].y + 7.5), &paint);
    }
}
