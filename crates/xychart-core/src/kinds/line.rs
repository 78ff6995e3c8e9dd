// File: crates/xychart-core/src/kinds/line.rs
// Summary: Line (and Time) series drawing, point hit areas and spaced value labels.

use super::SeriesContext;
use crate::geometry::{PointF, RectF};
use crate::hit::ClickableArea;
use crate::surface::{Paint, Surface};
use crate::text::format_label;
use crate::types::Align;

pub(super) const SHAPE_WIDTH: f32 = 30.0;

pub(super) fn draw(surface: &mut dyn Surface, ctx: &SeriesContext<'_>, points: &[PointF]) {
    if let (Some(fill), Some(first), Some(last)) = (ctx.style.fill_below, points.first(), points.last()) {
        if points.len() > 1 {
            let mut area = points.to_vec();
            area.push(PointF::new(last.x, ctx.y_axis_value));
            area.push(PointF::new(first.x, ctx.y_axis_value));
            let mut paint = Paint::fill(fill);
            paint.anti_alias = ctx.antialias;
            surface.draw_path(&area, true, &paint);
        }
    }
    if points.len() > 1 {
        surface.draw_path(points, false, &ctx.stroke());
    }
}

/// Square of `selectable_buffer` half-size around every point.
pub(super) fn clickable_areas(ctx: &SeriesContext<'_>, points: &[PointF], values: &[(f64, f64)]) -> Vec<Option<ClickableArea>> {
    points
        .iter()
        .zip(values)
        .enumerate()
        .map(|(k, (p, &(x, y)))| {
            Some(ClickableArea { rect: RectF::around(*p, ctx.selectable_buffer), point_index: ctx.start_index + k, x, y })
        })
        .collect()
}

/// Labels each value unless it sits within `chart_values_distance` of the last labelled point.
pub(super) fn draw_values(surface: &mut dyn Surface, ctx: &SeriesContext<'_>, points: &[PointF], values: &[(f64, f64)]) {
    let style = ctx.style;
    let paint = Paint::text(ctx.color, style.chart_values_text_size, Align::Center);
    let label = |surface: &mut dyn Surface, k: usize| {
        let text = format_label(values[k].1, style.chart_values_decimals);
        surface.draw_text(&text, PointF::new(points[k].x, points[k].y - style.chart_values_spacing), &paint);
    };
    let n = points.len().min(values.len());
    if n < 2 {
        for k in 0..n {
            label(&mut *surface, k);
        }
        return;
    }
    let far = |a: PointF, b: PointF| {
        (a.x - b.x).abs() > style.chart_values_distance || (a.y - b.y).abs() > style.chart_values_distance
    };
    let mut previous = points[0];
    if far(points[1], points[0]) {
        label(&mut *surface, 0);
        label(&mut *surface, 1);
        previous = points[1];
    }
    for k in 2..n {
        if far(points[k], previous) {
            label(&mut *surface, k);
            previous = points[k];
        }
    }
}
