// File: crates/xychart-core/src/kinds/scatter.rs
// Summary: Point markers (x, circle, triangle, square, diamond, point) for scatter and line series.

use super::SeriesContext;
use crate::config::{PointStyle, SeriesStyle};
use crate::geometry::{PointF, RectF};
use crate::surface::{Paint, PaintStyle, Surface};

pub(super) const SHAPE_WIDTH: f32 = 10.0;
const SIZE: f32 = 3.0;

pub(super) fn draw(surface: &mut dyn Surface, ctx: &SeriesContext<'_>, points: &[PointF]) {
    let mut paint = ctx.fill();
    paint.stroke_width = ctx.style.line_width;
    paint.style = if ctx.style.fill_points { PaintStyle::Fill } else { PaintStyle::Stroke };
    for p in points {
        draw_marker(surface, ctx.style.point_style, *p, &paint);
    }
}

pub(super) fn draw_legend_shape(surface: &mut dyn Surface, style: &SeriesStyle, at: PointF, paint: &Paint) {
    let paint = Paint {
        style: if style.fill_points { PaintStyle::Fill } else { PaintStyle::Stroke },
        ..*paint
    };
    draw_marker(surface, style.point_style, PointF::new(at.x + SHAPE_WIDTH, at.y), &paint);
}

fn draw_marker(surface: &mut dyn Surface, shape: PointStyle, c: PointF, paint: &Paint) {
    match shape {
        PointStyle::X => {
            surface.draw_line(PointF::new(c.x - SIZE, c.y - SIZE), PointF::new(c.x + SIZE, c.y + SIZE), paint);
            surface.draw_line(PointF::new(c.x + SIZE, c.y - SIZE), PointF::new(c.x - SIZE, c.y + SIZE), paint);
        }
        PointStyle::Circle => surface.draw_circle(c, SIZE, paint),
        PointStyle::Triangle => {
            let tri = [
                PointF::new(c.x, c.y - SIZE - SIZE / 2.0),
                PointF::new(c.x - SIZE, c.y + SIZE),
                PointF::new(c.x + SIZE, c.y + SIZE),
            ];
            surface.draw_path(&tri, true, paint);
        }
        PointStyle::Square => {
            surface.draw_rect(RectF::from_ltrb(c.x - SIZE, c.y - SIZE, c.x + SIZE, c.y + SIZE), paint);
        }
        PointStyle::Diamond => {
            let dia = [
                PointF::new(c.x, c.y - SIZE),
                PointF::new(c.x - SIZE, c.y),
                PointF::new(c.x, c.y + SIZE),
                PointF::new(c.x + SIZE, c.y),
            ];
            surface.draw_path(&dia, true, paint);
        }
        PointStyle::Point => {
            let dot = Paint { style: PaintStyle::Fill, ..*paint };
            surface.draw_circle(c, (paint.stroke_width / 2.0).max(0.5), &dot);
        }
    }
}
