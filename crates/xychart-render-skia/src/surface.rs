// File: crates/xychart-render-skia/src/surface.rs
// Summary: Core `Surface` implemented over a Skia canvas.

use skia_safe as skia;
use xychart_core::geometry::{PointF, RectF};
use xychart_core::{Align, Color, Paint, PaintStyle, Surface, TextMeasure};

use crate::text::TextShaper;

pub(crate) fn to_sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_sk_rect(r: RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn to_sk_paint(p: &Paint) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(to_sk_color(p.color));
    paint.set_anti_alias(p.anti_alias);
    paint.set_stroke_width(p.stroke_width);
    paint.set_style(match p.style {
        PaintStyle::Fill => skia::paint::Style::Fill,
        PaintStyle::Stroke => skia::paint::Style::Stroke,
        PaintStyle::FillAndStroke => skia::paint::Style::StrokeAndFill,
    });
    if let Some([on, off]) = p.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
    }
    paint
}

/// Draws through a borrowed canvas. With `draw_labels` off, text is measured but not painted.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
    pub draw_labels: bool,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper, draw_labels: true }
    }
}

impl TextMeasure for SkiaSurface<'_> {
    fn measure_text(&self, text: &str, size: f32) -> f32 {
        self.shaper.measure_width(text, size)
    }
}

impl Surface for SkiaSurface<'_> {
    fn draw_rect(&mut self, rect: RectF, paint: &Paint) {
        self.canvas.draw_rect(to_sk_rect(rect), &to_sk_paint(paint));
    }

    fn draw_line(&mut self, from: PointF, to: PointF, paint: &Paint) {
        let mut p = to_sk_paint(paint);
        p.set_style(skia::paint::Style::Stroke);
        self.canvas.draw_line((from.x, from.y), (to.x, to.y), &p);
    }

    fn draw_path(&mut self, points: &[PointF], closed: bool, paint: &Paint) {
        let Some((first, rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        if closed {
            path.close();
        }
        self.canvas.draw_path(&path, &to_sk_paint(paint));
    }

    fn draw_circle(&mut self, center: PointF, radius: f32, paint: &Paint) {
        self.canvas.draw_circle((center.x, center.y), radius, &to_sk_paint(paint));
    }

    fn draw_arc(&mut self, oval: RectF, start_deg: f32, sweep_deg: f32, paint: &Paint) {
        self.canvas.draw_arc(to_sk_rect(oval), start_deg, sweep_deg, true, &to_sk_paint(paint));
    }

    fn draw_text(&mut self, text: &str, at: PointF, paint: &Paint) {
        if !self.draw_labels || text.is_empty() {
            return;
        }
        let width = self.shaper.measure_width(text, paint.text_size);
        let x = match paint.text_align {
            Align::Left => at.x,
            Align::Center => at.x - width / 2.0,
            Align::Right => at.x - width,
        };
        self.shaper.draw_left(self.canvas, text, x, at.y, paint.text_size, to_sk_color(paint.color));
    }

    fn save(&mut self) {
        self.canvas.save();
    }

    fn restore(&mut self) {
        self.canvas.restore();
    }

    fn rotate(&mut self, degrees: f32, pivot: PointF) {
        self.canvas.rotate(degrees, Some(skia::Point::new(pivot.x, pivot.y)));
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.canvas.translate((dx, dy));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.canvas.scale((sx, sy));
    }
}
