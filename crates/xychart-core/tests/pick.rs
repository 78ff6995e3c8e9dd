// File: crates/xychart-core/tests/pick.rs
// Purpose: Hit testing after a pass: topmost series wins, gaps keep point indices aligned, bars and vertical charts.

use xychart_core::{
    Chart, ChartKind, Dataset, Orientation, OrientationTransform, Point, PointF, RecordingSurface, RendererConfig,
    Series, Window,
};

fn config() -> RendererConfig {
    let mut cfg = RendererConfig::default();
    cfg.set_window(0, Window::new(0.0, 10.0, 0.0, 10.0));
    cfg
}

fn screen(chart: &Chart, x: f64, y: f64) -> PointF {
    PointF::from(chart.to_screen(Point::new(x, y), 0))
}

#[test]
fn later_series_wins_on_overlap() {
    let ds: Dataset = [
        Series::with_data("under", vec![(5.0, 5.0)]),
        Series::with_data("over", vec![(5.0, 5.0)]),
    ]
    .into_iter()
    .collect();
    let mut chart = Chart::new(ChartKind::Scatter, ds, config());
    chart.draw(&mut RecordingSurface::new(), 0, 0, 800, 600);

    let hit = chart.pick(screen(&chart, 5.0, 5.0)).expect("hit");
    assert_eq!(hit.series_index, 1);
    assert_eq!(hit.point_index, 0);
    assert_eq!((hit.x, hit.y), (5.0, 5.0));

    assert!(chart.pick(screen(&chart, 1.0, 9.0)).is_none());
}

#[test]
fn null_values_keep_indices_aligned() {
    let mut s = Series::new("gappy");
    s.batch(|s| {
        s.add(1.0, 1.0);
        s.add_null(2.0);
        s.add(3.0, 3.0);
        s.add(4.0, 8.0);
    });
    let ds: Dataset = [s].into_iter().collect();
    let mut chart = Chart::new(ChartKind::Line, ds, config());
    chart.draw(&mut RecordingSurface::new(), 0, 0, 800, 600);

    let hit = chart.pick(screen(&chart, 3.0, 3.0)).expect("hit");
    assert_eq!((hit.series_index, hit.point_index), (0, 2));
    let hit = chart.pick(screen(&chart, 4.0, 8.0)).expect("hit");
    assert_eq!(hit.point_index, 3);

    let gaps = chart.hit_index().areas(0).filter(|a| a.is_none()).count();
    assert_eq!(gaps, 1);
}

#[test]
fn bar_areas_cover_the_column() {
    let ds: Dataset = [Series::with_data("bars", vec![(2.0, 4.0), (6.0, 8.0)])].into_iter().collect();
    let mut chart = Chart::new(ChartKind::Bar, ds, config());
    chart.draw(&mut RecordingSurface::new(), 0, 0, 800, 600);

    // inside the first bar, halfway up
    let hit = chart.pick(screen(&chart, 2.0, 2.0)).expect("hit");
    assert_eq!((hit.point_index, hit.y), (0, 4.0));
    // above the bar top
    assert!(chart.pick(screen(&chart, 2.0, 6.0)).is_none());
}

#[test]
fn combined_layers_pick_in_draw_order() {
    let ds: Dataset = [
        Series::with_data("line", vec![(5.0, 5.0)]),
        Series::with_data("bars", vec![(5.0, 9.0)]),
    ]
    .into_iter()
    .collect();
    // bars (series 1) draw first, the line layer (series 0) lands on top
    let mut chart = Chart::combined(ds, config(), &[("Bar", vec![1]), ("Line", vec![0])]).expect("combined");
    chart.draw(&mut RecordingSurface::new(), 0, 0, 800, 600);
    let hit = chart.pick(screen(&chart, 5.0, 5.0)).expect("hit");
    assert_eq!(hit.series_index, 0);
    let hit = chart.pick(screen(&chart, 5.0, 8.0)).expect("hit");
    assert_eq!(hit.series_index, 1);
}

#[test]
fn vertical_chart_picks_through_rotation() {
    let ds: Dataset = [Series::with_data("s", vec![(3.0, 7.0)])].into_iter().collect();
    let mut cfg = config();
    cfg.orientation = Orientation::Vertical;
    let mut chart = Chart::new(ChartKind::Scatter, ds, cfg);
    chart.draw(&mut RecordingSurface::new(), 0, 0, 800, 600);

    let o = OrientationTransform::new(Orientation::Vertical, 0, 0, 800, 600);
    let device = o.to_physical(screen(&chart, 3.0, 7.0));
    let hit = chart.pick(device).expect("hit");
    assert_eq!((hit.x, hit.y), (3.0, 7.0));
}

#[test]
fn vertical_chart_in_offset_frame_draws_and_picks_inside_it() {
    let ds: Dataset = [Series::with_data("s", vec![(0.0, 0.0), (3.0, 7.0), (10.0, 10.0)])].into_iter().collect();
    let mut cfg = config();
    cfg.orientation = Orientation::Vertical;
    let mut chart = Chart::new(ChartKind::Scatter, ds, cfg);
    chart.draw(&mut RecordingSurface::new(), 600, 0, 400, 600);

    let o = OrientationTransform::new(Orientation::Vertical, 600, 0, 400, 600);
    for (i, (x, y)) in [(0.0, 0.0), (3.0, 7.0), (10.0, 10.0)].into_iter().enumerate() {
        let device = o.to_physical(screen(&chart, x, y));
        assert!((600.0..=1000.0).contains(&device.x) && (0.0..=600.0).contains(&device.y), "({x}, {y}) -> {device:?}");
        let hit = chart.pick(device).expect("hit");
        assert_eq!(hit.point_index, i);
    }
}

#[test]
fn pick_before_draw_finds_nothing() {
    let ds: Dataset = [Series::with_data("s", vec![(3.0, 7.0)])].into_iter().collect();
    let chart = Chart::new(ChartKind::Scatter, ds, config());
    assert!(chart.pick(PointF::new(10.0, 10.0)).is_none());
}
