// File: crates/xychart-core/tests/tools.rs
// Purpose: Pan clamping against limits, zoom limits and switches, fit-to-data and initial range restore.

use xychart_core::{Chart, ChartKind, Dataset, PointF, RecordingSurface, RendererConfig, Series, Window};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn dataset() -> Dataset {
    [Series::with_data("s", vec![(0.0, 0.0), (5.0, 40.0), (10.0, 100.0)])].into_iter().collect()
}

fn window(chart: &Chart) -> Window {
    chart.config().range(0).window().expect("explicit window")
}

#[test]
fn pan_converges_on_limit() {
    init_tracing();
    let mut cfg = RendererConfig::default();
    cfg.set_window(0, Window::new(2.0, 8.0, 20.0, 80.0));
    cfg.pan_limits = Some(Window::new(0.0, 10.0, 0.0, 100.0));
    let mut chart = Chart::new(ChartKind::Line, dataset(), cfg);
    let mut surface = RecordingSurface::new();

    // dragging right moves the window left, past the lower X limit
    for _ in 0..3 {
        chart.draw(&mut surface, 0, 0, 800, 600);
        chart.pan(PointF::new(100.0, 300.0), PointF::new(700.0, 300.0));
        assert_eq!(window(&chart), Window::new(0.0, 6.0, 20.0, 80.0));
    }
}

#[test]
fn pan_converges_on_upper_y_limit() {
    let mut cfg = RendererConfig::default();
    cfg.set_window(0, Window::new(2.0, 8.0, 20.0, 80.0));
    cfg.pan_limits = Some(Window::new(0.0, 10.0, 0.0, 100.0));
    let mut chart = Chart::new(ChartKind::Line, dataset(), cfg);
    let mut surface = RecordingSurface::new();

    // dragging down moves the window up, past the upper Y limit
    for _ in 0..3 {
        chart.draw(&mut surface, 0, 0, 800, 600);
        chart.pan(PointF::new(400.0, 100.0), PointF::new(400.0, 500.0));
        assert_eq!(window(&chart), Window::new(2.0, 8.0, 40.0, 100.0));
    }
}

#[test]
fn pan_translates_inside_limits() {
    let mut cfg = RendererConfig::default();
    cfg.set_window(0, Window::new(2.0, 8.0, 20.0, 80.0));
    let mut chart = Chart::new(ChartKind::Line, dataset(), cfg);
    chart.draw(&mut RecordingSurface::new(), 0, 0, 800, 600);

    // plot is 750 px for 6 units of X: 125 px per unit
    chart.pan(PointF::new(400.0, 300.0), PointF::new(275.0, 300.0));
    let w = window(&chart);
    assert!((w.x_min - 3.0).abs() < 1e-9 && (w.x_max - 9.0).abs() < 1e-9, "{w:?}");
    assert_eq!((w.y_min, w.y_max), (20.0, 80.0));
}

#[test]
fn pan_respects_switches() {
    let mut cfg = RendererConfig::default();
    cfg.set_window(0, Window::new(2.0, 8.0, 20.0, 80.0));
    cfg.pan_x_enabled = false;
    let mut chart = Chart::new(ChartKind::Line, dataset(), cfg);
    chart.draw(&mut RecordingSurface::new(), 0, 0, 800, 600);
    chart.pan(PointF::new(400.0, 300.0), PointF::new(100.0, 100.0));
    let w = window(&chart);
    assert_eq!((w.x_min, w.x_max), (2.0, 8.0));
    assert!(w.y_min < 20.0);

    chart.config_mut().pan_enabled = false;
    let before = window(&chart);
    chart.pan(PointF::new(400.0, 300.0), PointF::new(100.0, 100.0));
    assert_eq!(window(&chart), before);
}

#[test]
fn zoom_limits_reject_and_accept() {
    init_tracing();
    let mut cfg = RendererConfig::default();
    cfg.set_window(0, Window::new(2.0, 8.0, 2.0, 8.0));
    cfg.zoom_limits = Some(Window::new(0.0, 10.0, 0.0, 10.0));
    cfg.zoom_rate = 2.0;
    let mut chart = Chart::new(ChartKind::Line, dataset(), cfg);

    chart.zoom_out();
    assert_eq!(window(&chart), Window::new(2.0, 8.0, 2.0, 8.0), "zoom out past limits is ignored");

    chart.zoom_in();
    assert_eq!(window(&chart), Window::new(3.5, 6.5, 3.5, 6.5));
}

#[test]
fn zoom_switches() {
    let mut cfg = RendererConfig::default();
    cfg.set_window(0, Window::new(0.0, 8.0, 0.0, 8.0));
    cfg.zoom_rate = 2.0;
    cfg.zoom_y_enabled = false;
    let mut chart = Chart::new(ChartKind::Line, dataset(), cfg);
    chart.zoom_in();
    assert_eq!(window(&chart), Window::new(2.0, 6.0, 0.0, 8.0));

    chart.config_mut().zoom_enabled = false;
    chart.zoom_out();
    assert_eq!(window(&chart), Window::new(2.0, 6.0, 0.0, 8.0));
}

#[test]
fn zoom_uses_derived_window_after_a_pass() {
    let mut chart = Chart::new(ChartKind::Line, dataset(), RendererConfig::default());
    chart.zoom_in();
    assert_eq!(chart.config().range(0).window(), None, "nothing to zoom before the first pass");

    chart.draw(&mut RecordingSurface::new(), 0, 0, 800, 600);
    chart.config_mut().zoom_rate = 2.0;
    chart.zoom_in();
    assert_eq!(window(&chart), Window::new(2.5, 7.5, 25.0, 75.0));
}

#[test]
fn fit_frames_data_with_margin() {
    let ds: Dataset = [Series::with_data("s", vec![(0.0, 0.0), (10.0, 100.0)])].into_iter().collect();
    let mut chart = Chart::new(ChartKind::Line, ds, RendererConfig::default());
    chart.fit_to_data();
    assert_eq!(window(&chart), Window::new(-0.25, 10.25, -2.5, 102.5));
}

#[test]
fn fit_on_bars_includes_zero() {
    let ds: Dataset = [Series::with_data("s", vec![(0.0, 20.0), (10.0, 100.0)])].into_iter().collect();
    let mut chart = Chart::new(ChartKind::Bar, ds, RendererConfig::default());
    assert_eq!(chart.default_minimum(0), Some(0.0));
    chart.fit_to_data();
    assert_eq!(window(&chart), Window::new(-0.25, 10.25, -2.5, 102.5));
}

#[test]
fn fit_restores_initial_range() {
    let mut cfg = RendererConfig::default();
    cfg.set_window(0, Window::new(1.0, 2.0, 3.0, 4.0));
    let mut chart = Chart::new(ChartKind::Line, dataset(), cfg);
    assert_eq!(chart.config().initial_range, Some(Window::new(1.0, 2.0, 3.0, 4.0)));

    chart.config_mut().zoom_rate = 2.0;
    chart.zoom_out();
    assert_ne!(window(&chart), Window::new(1.0, 2.0, 3.0, 4.0));
    chart.fit_to_data();
    assert_eq!(window(&chart), Window::new(1.0, 2.0, 3.0, 4.0));
}
