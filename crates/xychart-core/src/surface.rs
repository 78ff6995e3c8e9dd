// File: crates/xychart-core/src/surface.rs
// Summary: Backend-neutral drawing surface plus a recording implementation for headless use.

use crate::geometry::{PointF, RectF};
use crate::text::{MonospaceMetrics, TextMeasure};
use crate::theme::Color;
use crate::types::Align;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
    FillAndStroke,
}

/// Drawing state handed along with every command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    pub stroke_width: f32,
    pub text_size: f32,
    pub text_align: Align,
    pub anti_alias: bool,
    /// On/off dash intervals in pixels.
    pub dash: Option<[f32; 2]>,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            style: PaintStyle::Fill,
            stroke_width: 1.0,
            text_size: 10.0,
            text_align: Align::Left,
            anti_alias: true,
            dash: None,
        }
    }
}

impl Paint {
    pub fn fill(color: Color) -> Self {
        Self { color, ..Self::default() }
    }

    pub fn stroke(color: Color, width: f32) -> Self {
        Self { color, style: PaintStyle::Stroke, stroke_width: width, ..Self::default() }
    }

    pub fn text(color: Color, size: f32, align: Align) -> Self {
        Self { color, text_size: size, text_align: align, ..Self::default() }
    }
}

/// Minimal canvas the engine draws through. Transform calls compose like a canvas matrix.
pub trait Surface: TextMeasure {
    fn draw_rect(&mut self, rect: RectF, paint: &Paint);
    fn draw_line(&mut self, from: PointF, to: PointF, paint: &Paint);
    /// Polyline through `points`; `closed` joins the last point back to the first.
    fn draw_path(&mut self, points: &[PointF], closed: bool, paint: &Paint);
    fn draw_circle(&mut self, center: PointF, radius: f32, paint: &Paint);
    /// Wedge of `oval` from `start_deg`, sweeping `sweep_deg` clockwise, closed through the centre.
    fn draw_arc(&mut self, oval: RectF, start_deg: f32, sweep_deg: f32, paint: &Paint);
    /// Text whose baseline anchor is `at`, aligned per `paint.text_align`.
    fn draw_text(&mut self, text: &str, at: PointF, paint: &Paint);
    fn save(&mut self);
    fn restore(&mut self);
    fn rotate(&mut self, degrees: f32, pivot: PointF);
    fn translate(&mut self, dx: f32, dy: f32);
    fn scale(&mut self, sx: f32, sy: f32);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect { rect: RectF, paint: Paint },
    Line { from: PointF, to: PointF, paint: Paint },
    Path { points: Vec<PointF>, closed: bool, paint: Paint },
    Circle { center: PointF, radius: f32, paint: Paint },
    Arc { oval: RectF, start_deg: f32, sweep_deg: f32, paint: Paint },
    Text { text: String, at: PointF, paint: Paint },
    Save,
    Restore,
    Rotate { degrees: f32, pivot: PointF },
    Translate { dx: f32, dy: f32 },
    Scale { sx: f32, sy: f32 },
}

/// Surface that stores every call, measuring text with fixed-advance metrics.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    pub metrics: MonospaceMetrics,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text runs in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectF> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { rect, .. } => Some(rect),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &[PointF]> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Path { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }
}

impl TextMeasure for RecordingSurface {
    fn measure_text(&self, text: &str, size: f32) -> f32 {
        self.metrics.measure_text(text, size)
    }
}

impl Surface for RecordingSurface {
    fn draw_rect(&mut self, rect: RectF, paint: &Paint) {
        self.commands.push(DrawCommand::Rect { rect, paint: *paint });
    }
    fn draw_line(&mut self, from: PointF, to: PointF, paint: &Paint) {
        self.commands.push(DrawCommand::Line { from, to, paint: *paint });
    }
    fn draw_path(&mut self, points: &[PointF], closed: bool, paint: &Paint) {
        self.commands.push(DrawCommand::Path { points: points.to_vec(), closed, paint: *paint });
    }
    fn draw_circle(&mut self, center: PointF, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Circle { center, radius, paint: *paint });
    }
    fn draw_arc(&mut self, oval: RectF, start_deg: f32, sweep_deg: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Arc { oval, start_deg, sweep_deg, paint: *paint });
    }
    fn draw_text(&mut self, text: &str, at: PointF, paint: &Paint) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, paint: *paint });
    }
    fn save(&mut self) { self.commands.push(DrawCommand::Save); }
    fn restore(&mut self) { self.commands.push(DrawCommand::Restore); }
    fn rotate(&mut self, degrees: f32, pivot: PointF) {
        self.commands.push(DrawCommand::Rotate { degrees, pivot });
    }
    fn translate(&mut self, dx: f32, dy: f32) {
        self.commands.push(DrawCommand::Translate { dx, dy });
    }
    fn scale(&mut self, sx: f32, sy: f32) {
        self.commands.push(DrawCommand::Scale { sx, sy });
    }
}
