// File: crates/xychart-render-skia/src/lib.rs
// Summary: Skia raster backend: canvas surface, text shaping and PNG/RGBA output for core charts.

pub mod raster;
pub mod surface;
pub mod text;

pub use raster::{render_to_png, render_to_png_bytes, render_to_rgba8, RenderOptions, Renderable};
pub use surface::SkiaSurface;
pub use text::TextShaper;
