// File: crates/xychart-core/tests/series.rs
// Purpose: Series extrema stay consistent through add/remove/batch; dataset scale bookkeeping.

use xychart_core::{Dataset, Series};

#[test]
fn extrema_track_mutations() {
    let mut s = Series::new("s");
    assert!(s.extrema().is_none());

    s.add(0.0, 1.0);
    s.add(5.0, -2.0);
    s.add(3.0, 7.0);
    assert_eq!((s.min_x(), s.max_x()), (Some(0.0), Some(5.0)));
    assert_eq!((s.min_y(), s.max_y()), (Some(-2.0), Some(7.0)));

    // removing an edge point recomputes
    let idx = s.index_for_x(3.0).unwrap();
    assert_eq!(s.remove(idx), Some((3.0, Some(7.0))));
    assert_eq!(s.max_y(), Some(1.0));

    // removing an interior point keeps bounds
    s.add(2.0, 0.0);
    s.remove(s.index_for_x(2.0).unwrap());
    assert_eq!((s.min_y(), s.max_y()), (Some(-2.0), Some(1.0)));

    s.clear();
    assert!(s.extrema().is_none());
}

#[test]
fn nulls_do_not_touch_y_bounds() {
    let mut s = Series::new("gaps");
    s.add_null(-4.0);
    assert_eq!(s.min_x(), Some(-4.0));
    assert_eq!(s.min_y(), None);
    s.add(1.0, 3.0);
    s.add_null(9.0);
    assert_eq!((s.min_x(), s.max_x()), (Some(-4.0), Some(9.0)));
    assert_eq!((s.min_y(), s.max_y()), (Some(3.0), Some(3.0)));
    assert_eq!(s.y(0), None);
    assert_eq!(s.y(1), Some(3.0));
}

#[test]
fn batch_defers_recompute_until_done() {
    let mut s = Series::with_data("b", vec![(0.0, 0.0), (10.0, 10.0)]);
    let removed = s.batch(|s| {
        let first = s.remove(0);
        let last = s.remove(s.len() - 1);
        s.add(4.0, 2.0);
        s.add(6.0, 8.0);
        (first, last)
    });
    assert_eq!(removed, (Some((0.0, Some(0.0))), Some((10.0, Some(10.0)))));
    assert_eq!((s.min_x(), s.max_x(), s.min_y(), s.max_y()), (Some(4.0), Some(6.0), Some(2.0), Some(8.0)));
}

#[test]
fn annotations_add_and_remove() {
    let mut s = Series::new("a");
    s.add_annotation("first", 1.0, 2.0);
    s.add_annotation("second", 3.0, 4.0);
    assert_eq!(s.remove_annotation(0).map(|a| a.text), Some("first".to_string()));
    assert_eq!(s.annotations().len(), 1);
    assert!(s.remove_annotation(5).is_none());
}

#[test]
fn dataset_orders_and_counts_scales() {
    let mut ds = Dataset::new();
    assert_eq!(ds.scale_count(), 1);
    assert!(!ds.has_values());

    ds.add_series(Series::new("a"));
    ds.add_series(Series::with_scale("c", 2));
    ds.insert_series(1, Series::with_data("b", vec![(0.0, 1.0)]));
    assert_eq!(ds.titles(), vec!["a", "b", "c"]);
    assert_eq!(ds.scale_count(), 3);
    assert!(ds.has_values());

    assert_eq!(ds.remove_series(2).map(|s| s.title().to_string()), Some("c".to_string()));
    assert_eq!(ds.scale_count(), 1);
    ds.series_at_mut(0).unwrap().set_title("renamed");
    assert_eq!(ds.series_at(0).map(Series::title), Some("renamed"));
}
