// File: crates/xychart-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use xychart_core::{Chart, ChartKind, Dataset, RendererConfig, Series};
use xychart_render_skia::{render_to_png, render_to_png_bytes, RenderOptions};

#[test]
fn render_smoke_png() {
    // Minimal data: tiny line series
    let ds: Dataset = [Series::with_data("s", vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)])]
        .into_iter()
        .collect();
    let mut chart = Chart::new(ChartKind::Line, ds, RendererConfig::default());

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    render_to_png(&mut chart, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = render_to_png_bytes(&mut chart, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width() as i32, img.height() as i32), (opts.width, opts.height));
}
