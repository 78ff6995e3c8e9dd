// File: crates/xychart-render-skia/src/raster.rs
// Summary: Headless PNG / RGBA8 rendering pipeline using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;
use xychart_core::types::{HEIGHT, WIDTH};
use xychart_core::{Chart, Color, DoughnutChart, Surface, Theme};

use crate::surface::{to_sk_color, SkiaSurface};
use crate::text::TextShaper;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Canvas clear colour underneath the chart's own background.
    pub background: Color,
    /// Paint text; off gives output independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: Theme::default().background,
            draw_labels: true,
        }
    }
}

/// Anything that can fill a frame of a surface.
pub trait Renderable {
    fn render(&mut self, surface: &mut dyn Surface, x: i32, y: i32, width: i32, height: i32);
}

impl Renderable for Chart {
    fn render(&mut self, surface: &mut dyn Surface, x: i32, y: i32, width: i32, height: i32) {
        self.draw(surface, x, y, width, height);
    }
}

impl Renderable for DoughnutChart {
    fn render(&mut self, surface: &mut dyn Surface, x: i32, y: i32, width: i32, height: i32) {
        self.draw(surface, x, y, width, height);
    }
}

fn rasterize(chart: &mut dyn Renderable, opts: &RenderOptions) -> Result<skia::Surface> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let shaper = TextShaper::new();
    {
        let canvas = surface.canvas();
        canvas.clear(to_sk_color(opts.background));
        let mut target = SkiaSurface::new(canvas, &shaper);
        target.draw_labels = opts.draw_labels;
        chart.render(&mut target, 0, 0, opts.width, opts.height);
    }
    tracing::debug!(width = opts.width, height = opts.height, "rasterized chart");
    Ok(surface)
}

/// Renders to PNG bytes in memory.
pub fn render_to_png_bytes(chart: &mut dyn Renderable, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = rasterize(chart, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Renders the chart to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(chart: &mut dyn Renderable, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(chart, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Renders to unpremultiplied RGBA8: `(pixels, width, height, row_bytes)`.
pub fn render_to_rgba8(chart: &mut dyn Renderable, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = rasterize(chart, opts)?;
    let (w, h) = (opts.width.max(0) as u32, opts.height.max(0) as u32);
    let info = skia::ImageInfo::new((opts.width, opts.height), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        anyhow::bail!("reading {w}x{h} pixels back from the raster surface failed");
    }
    Ok((pixels, w, h, row_bytes))
}
