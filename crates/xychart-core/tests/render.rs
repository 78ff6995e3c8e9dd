// File: crates/xychart-core/tests/render.rs
// Purpose: Headless render passes through RecordingSurface: empty data, labels, titles, kinds and construction errors.

use xychart_core::{
    Chart, ChartError, ChartKind, Dataset, DrawCommand, RecordingSurface, RendererConfig, Series, SeriesStyle, Theme,
};

fn two_series() -> Dataset {
    [
        Series::with_data("alpha", vec![(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)]),
        Series::with_data("beta", vec![(0.0, 2.0), (1.0, 0.5), (2.0, 4.0)]),
    ]
    .into_iter()
    .collect()
}

#[test]
fn empty_dataset_renders_frame_only() {
    let mut chart = Chart::new(ChartKind::Line, Dataset::new(), RendererConfig::default());
    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface, 0, 0, 640, 480);

    let background = Theme::default().background;
    assert!(matches!(surface.commands.first(), Some(DrawCommand::Rect { paint, .. }) if paint.color == background));
    let lines = surface.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. })).count();
    assert!(lines >= 2, "axes are drawn");
    assert_eq!(surface.texts().count(), 0);
    assert!(chart.hit_index().is_empty());
}

#[test]
fn series_without_points_render_like_empty() {
    let ds: Dataset = [Series::new("nothing yet")].into_iter().collect();
    let mut chart = Chart::new(ChartKind::Bar, ds, RendererConfig::default());
    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface, 0, 0, 640, 480);
    assert_eq!(surface.texts().collect::<Vec<_>>(), vec!["nothing yet"]);
}

#[test]
fn draw_is_idempotent() {
    let mut chart = Chart::new(ChartKind::Line, two_series(), RendererConfig::default());
    let mut first = RecordingSurface::new();
    let mut second = RecordingSurface::new();
    chart.draw(&mut first, 0, 0, 640, 480);
    chart.draw(&mut second, 0, 0, 640, 480);
    assert_eq!(first.commands, second.commands);
}

#[test]
fn titles_labels_and_legend_are_drawn() {
    let mut cfg = RendererConfig::default();
    cfg.chart_title = "Readings".into();
    cfg.x_title = "Hour".into();
    cfg.scale_axis_mut(0).title = "Level".into();
    cfg.scale_axis_mut(0).text_labels.push((2.5, "mid".into()));
    cfg.add_x_text_label(1.0, "one");
    let mut chart = Chart::new(ChartKind::Line, two_series(), cfg);
    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface, 0, 0, 800, 600);

    let texts: Vec<&str> = surface.texts().collect();
    for want in ["Readings", "Hour", "Level", "mid", "one", "alpha", "beta"] {
        assert!(texts.contains(&want), "missing {want:?} in {texts:?}");
    }
    // one polyline per series
    assert_eq!(surface.paths().filter(|p| p.len() == 3).count(), 2);
}

#[test]
fn hidden_labels_and_legend() {
    let mut cfg = RendererConfig::default();
    cfg.show_legend = false;
    cfg.show_x_labels = false;
    cfg.show_y_labels = false;
    cfg.show_labels = false;
    let mut chart = Chart::new(ChartKind::Scatter, two_series(), cfg);
    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface, 0, 0, 800, 600);
    assert_eq!(surface.texts().count(), 0);
}

#[test]
fn time_chart_formats_x_labels() {
    let day = 86_400_000.0;
    let ds: Dataset = [Series::with_data("t", vec![(0.0, 1.0), (2.0 * day, 3.0)])].into_iter().collect();
    let mut cfg = RendererConfig::default();
    cfg.x_date_format = Some("%Y-%m-%d".into());
    let mut chart = Chart::new(ChartKind::Time, ds, cfg);
    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface, 0, 0, 800, 600);
    assert!(surface.texts().any(|t| t == "1970-01-01"));
}

#[test]
fn chart_values_and_annotations() {
    let mut s = Series::with_data("v", vec![(0.0, 10.0), (5.0, 20.0), (10.0, 30.0)]);
    s.add_annotation("peak", 10.0, 30.0);
    s.add_annotation("", 5.0, 20.0);
    let ds: Dataset = [s].into_iter().collect();
    let mut cfg = RendererConfig::default();
    cfg.series_styles.push(SeriesStyle { display_chart_values: true, ..SeriesStyle::default() });
    let mut chart = Chart::new(ChartKind::Bar, ds, cfg);
    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface, 0, 0, 800, 600);

    let texts: Vec<&str> = surface.texts().collect();
    for want in ["10", "20", "30", "peak"] {
        assert!(texts.contains(&want), "missing {want:?} in {texts:?}");
    }
}

#[test]
fn vertical_chart_rotates_and_restores() {
    let mut cfg = RendererConfig::default();
    cfg.orientation = xychart_core::Orientation::Vertical;
    let mut chart = Chart::new(ChartKind::Bar, two_series(), cfg);
    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface, 0, 0, 800, 600);

    let net: f32 = surface
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Rotate { degrees, .. } => Some(*degrees),
            _ => None,
        })
        .sum();
    assert!(net.abs() < 1e-3, "rotations balance out, got {net}");
}

#[test]
fn construction_errors() {
    let err = Chart::from_type_name("Bubble", two_series(), RendererConfig::default()).err();
    assert!(matches!(err, Some(ChartError::UnknownChartType(ref n)) if n == "Bubble"));

    let err = Chart::combined(two_series(), RendererConfig::default(), &[("Line", vec![0]), ("Pie", vec![1])]).err();
    assert!(matches!(err, Some(ChartError::UnknownChartType(ref n)) if n == "Pie"));

    let err = Chart::combined(two_series(), RendererConfig::default(), &[]).err();
    assert!(matches!(err, Some(ChartError::EmptyCombination)));

    let err = Chart::combined(two_series(), RendererConfig::default(), &[("Line", vec![0]), ("Bar", vec![5])]).err();
    assert!(matches!(err, Some(ChartError::MissingSeries { layer: 1, series: 5, count: 2 })));
}

#[test]
fn combined_chart_assigns_kinds_per_series() {
    let chart = Chart::combined(two_series(), RendererConfig::default(), &[("bar", vec![0]), ("Line", vec![1])])
        .expect("valid combination");
    assert_eq!(chart.kind_of(0), ChartKind::Bar);
    assert_eq!(chart.kind_of(1), ChartKind::Line);
    assert_eq!(chart.default_minimum(0), Some(0.0));
    assert_eq!(chart.default_minimum(1), None);
    assert_eq!(chart.layers().len(), 2);
}
