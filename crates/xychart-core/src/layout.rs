// File: crates/xychart-core/src/layout.rs
// Summary: Legend sizing/wrapping/truncation and radial label placement with collision avoidance.

use crate::config::RendererConfig;
use crate::geometry::{PointF, RectF};
use crate::surface::{Paint, Surface};
use crate::text::{fit_text, TextMeasure};
use crate::theme::Color;
use crate::types::Align;

/// Vertical offset of the first legend row below the legend top.
const LEGEND_TOP_PAD: f32 = 32.0;
/// Gap between an entry's shape and its text, plus trailing space.
const LEGEND_SHAPE_GAP: f32 = 10.0;

/// Legend height before fitting: configured height, `height / 5` when shown,
/// or room for the X labels and title when the legend is hidden.
pub fn legend_size(config: &RendererConfig, default_height: i32, extra_height: f32) -> i32 {
    let mut size = config.legend_height;
    if config.show_legend && size == 0 {
        size = default_height;
    }
    if !config.show_legend && config.show_labels {
        size = (config.labels_text_size * 4.0 / 3.0 + extra_height) as i32;
    }
    size
}

#[derive(Clone, Copy, Debug)]
pub struct LegendItem<'a> {
    pub title: &'a str,
    pub shape_width: f32,
}

/// Where the legend lives: the horizontal bounds and the full chart frame it is anchored to.
#[derive(Clone, Copy, Debug)]
pub struct LegendFrame {
    pub left: i32,
    pub right: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub legend_size: i32,
    pub text_size: f32,
    /// Vertical charts wrap against the full width instead of `right`.
    pub vertical: bool,
}

impl LegendFrame {
    fn exceeds(&self, current_width: f32) -> bool {
        if self.vertical {
            current_width > self.width as f32
        } else {
            current_width > self.right as f32
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub index: usize,
    pub shape_at: PointF,
    pub text_at: PointF,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub entries: Vec<LegendEntry>,
    pub height: i32,
}

/// Lays entries out left to right, wrapping to a new row when one passes the limit and
/// truncating with "..." when an entry alone still does not fit its row.
pub fn layout_legend<M: TextMeasure + ?Sized>(items: &[LegendItem<'_>], frame: &LegendFrame, measure: &M) -> LegendLayout {
    let mut size = LEGEND_TOP_PAD;
    let left = frame.left as f32;
    let mut current_x = left;
    let mut current_y = (frame.y + frame.height - frame.legend_size) as f32 + size;
    let mut entries = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let text_width = measure.measure_text(item.title, frame.text_size);
        let extra = item.shape_width + LEGEND_SHAPE_GAP + text_width;
        let mut current_width = current_x + extra;
        if i > 0 && frame.exceeds(current_width) {
            current_x = left;
            current_y += frame.text_size;
            size += frame.text_size;
            current_width = current_x + extra;
        }
        let mut text = item.title.to_string();
        if frame.exceeds(current_width) {
            let limit = (if frame.vertical { frame.width } else { frame.right }) as f32;
            let max_width = limit - current_x - item.shape_width - LEGEND_SHAPE_GAP;
            text = fit_text(item.title, max_width, frame.text_size, measure);
        }
        entries.push(LegendEntry {
            index: i,
            shape_at: PointF::new(current_x, current_y),
            text_at: PointF::new(current_x + item.shape_width + 5.0, current_y + 5.0),
            text,
        });
        current_x += extra;
    }
    LegendLayout { entries, height: (size + frame.text_size).round() as i32 }
}

/// Dry run of the legend layout; the height the legend needs.
pub fn reserve_legend_space<M: TextMeasure + ?Sized>(items: &[LegendItem<'_>], frame: &LegendFrame, measure: &M) -> i32 {
    layout_legend(items, frame, measure).height
}

/// Draws the legend (shape via `draw_shape`, then text) and returns its height.
pub fn draw_legend(
    surface: &mut dyn Surface,
    items: &[LegendItem<'_>],
    frame: &LegendFrame,
    color: impl Fn(usize) -> Color,
    mut draw_shape: impl FnMut(&mut dyn Surface, usize, PointF, &Paint),
) -> i32 {
    let layout = layout_legend(items, frame, &*surface);
    for e in &layout.entries {
        let paint = Paint::text(color(e.index), frame.text_size, Align::Left);
        draw_shape(&mut *surface, e.index, e.shape_at, &paint);
        surface.draw_text(&e.text, e.text_at, &paint);
    }
    layout.height
}

/// Geometry of a wedge label: leader line, elbow and text box.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialLabel {
    pub text: String,
    pub align: Align,
    /// Leader start on the short radius.
    pub from: PointF,
    /// Leader bend on the long radius, moved down with the text.
    pub elbow: PointF,
    /// End of the horizontal tick towards the text.
    pub to: PointF,
    /// Text baseline anchor.
    pub text_at: PointF,
    pub bounds: RectF,
}

#[derive(Clone, Copy, Debug)]
pub struct Wedge {
    pub center: PointF,
    pub short_radius: f32,
    pub long_radius: f32,
    /// Start angle and sweep in degrees.
    pub start: f32,
    pub sweep: f32,
}

/// Places a label on the bisector of `wedge`, fitting it to the space left on its side and
/// pushing it down past every previously placed box it overlaps. `placed` gains the new box.
pub fn place_radial_label<M: TextMeasure + ?Sized>(
    text: &str,
    wedge: &Wedge,
    left: f32,
    right: f32,
    text_size: f32,
    placed: &mut Vec<RectF>,
    measure: &M,
) -> RadialLabel {
    let r_angle = (90.0 - (wedge.start as f64 + wedge.sweep as f64 / 2.0)).to_radians();
    let (sin, cos) = r_angle.sin_cos();
    let (cx, cy) = (wedge.center.x as f64, wedge.center.y as f64);
    let x1 = (cx + wedge.short_radius as f64 * sin).round() as f32;
    let y1 = (cy + wedge.short_radius as f64 * cos).round() as f32;
    let x2 = (cx + wedge.long_radius as f64 * sin).round() as f32;
    let y2 = (cy + wedge.long_radius as f64 * cos).round() as f32;

    let mut extra = (text_size / 2.0).max(10.0);
    let mut align = Align::Left;
    if x1 > x2 {
        extra = -extra;
        align = Align::Right;
    }
    let x_label = x2 + extra;
    let mut y_label = y2;
    let room = if align == Align::Right { x_label - left } else { right - x_label };
    let text = fit_text(text, room, text_size, measure);
    let w = measure.measure_text(&text, text_size);
    let (bx0, bx1) = if align == Align::Right { (x_label - w, x_label) } else { (x_label, x_label + w) };

    loop {
        let candidate = RectF::from_ltrb(bx0, y_label, bx1, y_label + text_size);
        match placed.iter().find(|p| p.intersects(&candidate)) {
            Some(hit) => y_label = y_label.max(hit.bottom),
            None => break,
        }
    }

    let elbow_y = (y_label - text_size / 2.0).trunc();
    let bounds = RectF::from_ltrb(bx0, y_label, bx1, y_label + text_size);
    placed.push(bounds);
    RadialLabel {
        text,
        align,
        from: PointF::new(x1, y1),
        elbow: PointF::new(x2, elbow_y),
        to: PointF::new(x2 + extra, elbow_y),
        text_at: PointF::new(x_label, y_label),
        bounds,
    }
}

/// Draws a placed radial label: leader, tick and text.
pub fn draw_radial_label(surface: &mut dyn Surface, label: &RadialLabel, color: Color, text_size: f32) {
    let line = Paint::stroke(color, 1.0);
    surface.draw_line(label.from, label.elbow, &line);
    surface.draw_line(label.elbow, label.to, &line);
    surface.draw_text(&label.text, label.text_at, &Paint::text(color, text_size, label.align));
}
