// File: crates/xychart-core/src/doughnut.rs
// Summary: Multi-ring doughnut chart over categorised values, labelled with the radial label placer.

use crate::config::RendererConfig;
use crate::geometry::{PointF, RectF};
use crate::layout::{self, LegendFrame, LegendItem, Wedge};
use crate::surface::{Paint, Surface};

const SHAPE_WIDTH: f32 = 10.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Category {
    pub name: String,
    pub values: Vec<f64>,
    pub titles: Vec<String>,
}

/// Categories of titled values; each category becomes one ring, outermost first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipleCategorySeries {
    pub title: String,
    categories: Vec<Category>,
}

impl MultipleCategorySeries {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), categories: Vec::new() }
    }

    /// Adds a category; `titles` and `values` pair up in order, extras are dropped.
    pub fn add(&mut self, name: impl Into<String>, titles: &[&str], values: &[f64]) {
        let n = titles.len().min(values.len());
        self.categories.push(Category {
            name: name.into(),
            values: values[..n].to_vec(),
            titles: titles[..n].iter().map(|t| t.to_string()).collect(),
        });
    }

    pub fn remove(&mut self, index: usize) -> Option<Category> {
        (index < self.categories.len()).then(|| self.categories.remove(index))
    }

    pub fn clear(&mut self) {
        self.categories.clear();
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

pub struct DoughnutChart {
    data: MultipleCategorySeries,
    config: RendererConfig,
    /// Angle the first wedge of every ring starts at, in degrees.
    pub start_angle: f32,
}

impl DoughnutChart {
    pub fn new(data: MultipleCategorySeries, config: RendererConfig) -> Self {
        Self { data, config, start_angle: 0.0 }
    }

    pub fn data(&self) -> &MultipleCategorySeries {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut MultipleCategorySeries {
        &mut self.data
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RendererConfig {
        &mut self.config
    }

    pub fn draw(&self, surface: &mut dyn Surface, x: i32, y: i32, width: i32, height: i32) {
        let cfg = &self.config;
        let (left, top, right) = (x, y, x + width);
        let names: Vec<&str> = self.data.categories.iter().map(|c| c.name.as_str()).collect();
        let items: Vec<LegendItem<'_>> = names.iter().map(|n| LegendItem { title: n, shape_width: SHAPE_WIDTH }).collect();

        let mut legend_size = cfg.legend_height;
        if cfg.show_legend && legend_size == 0 {
            legend_size = height / 5;
        }
        let frame = |legend_size: i32| LegendFrame {
            left,
            right,
            y,
            width,
            height,
            legend_size,
            text_size: cfg.legend_text_size,
            vertical: false,
        };
        if cfg.fit_legend && cfg.show_legend {
            legend_size = layout::reserve_legend_space(&items, &frame(legend_size), &*surface);
        }
        let bottom = y + height - legend_size;

        if cfg.apply_background {
            surface.draw_rect(RectF::from_ltrb(x as f32, y as f32, (x + width) as f32, (y + height) as f32), &Paint::fill(cfg.theme.background));
        }

        let count = self.data.categories.len();
        let m_radius = (right - left).abs().min((bottom - top).abs()) as f64;
        let dec = if count > 0 { 0.2 / count as f64 } else { 0.0 };
        let mut radius = (m_radius * 0.35 * cfg.scale as f64) as i32;
        let center = PointF::new(((left + right) / 2) as f32, ((bottom + top) / 2) as f32);
        let mut short_radius = radius as f32 * 0.9;
        let long_radius = radius as f32 * 1.1;
        let mut placed: Vec<RectF> = Vec::new();

        for category in &self.data.categories {
            let total: f64 = category.values.iter().sum();
            let oval = RectF::around(center, radius as f32);
            let mut angle_at = self.start_angle;
            for (i, (&value, title)) in category.values.iter().zip(&category.titles).enumerate() {
                let sweep = if total != 0.0 { (value / total * 360.0) as f32 } else { 0.0 };
                let mut paint = Paint::fill(cfg.series_color(i));
                paint.anti_alias = cfg.antialiasing;
                surface.draw_arc(oval, angle_at, sweep, &paint);
                if cfg.show_labels {
                    let wedge = Wedge { center, short_radius, long_radius, start: angle_at, sweep };
                    let label = layout::place_radial_label(title, &wedge, left as f32, right as f32, cfg.labels_text_size, &mut placed, &*surface);
                    layout::draw_radial_label(surface, &label, cfg.theme.labels, cfg.labels_text_size);
                }
                angle_at += sweep;
            }
            radius = (radius as f64 - m_radius * dec) as i32;
            short_radius -= (m_radius * dec) as f32 - 2.0;
            surface.draw_arc(RectF::around(center, radius as f32), 0.0, 360.0, &Paint::fill(cfg.theme.background));
            radius -= 1;
        }

        if cfg.show_legend {
            // legend circles shrink from entry to entry
            let mut step = (SHAPE_WIDTH * 0.75).floor();
            layout::draw_legend(surface, &items, &frame(legend_size), |i| cfg.series_color(i), |s, _, at, paint| {
                step -= 1.0;
                s.draw_circle(PointF::new(at.x + SHAPE_WIDTH - step, at.y), step.max(1.0), paint);
            });
        }
        tracing::debug!(rings = count, legend_size, "doughnut render pass complete");
    }
}
