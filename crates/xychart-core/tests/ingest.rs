// File: crates/xychart-core/tests/ingest.rs
// Purpose: Record grouping into a dataset and CSV record reading (header lookup, skipped rows, errors).

use xychart_core::ingest::{X_AXIS_INDEX, Y_AXIS_INDEX};
use xychart_core::{read_records, ChartError, DatumRecord, Dataset};

#[test]
fn groups_records_by_axis_then_series() {
    let records = vec![
        DatumRecord::new(Y_AXIS_INDEX, 0, 10.0, "temp"),
        DatumRecord::new(X_AXIS_INDEX, 0, 1.0, "Jan"),
        DatumRecord::new(X_AXIS_INDEX, 1, 1.0, ""),
        DatumRecord::new(X_AXIS_INDEX, 0, 2.0, "Feb"),
        DatumRecord::new(Y_AXIS_INDEX, 0, 20.0, ""),
        DatumRecord::new(Y_AXIS_INDEX, 1, 5.0, ""),
    ];
    let data = Dataset::from_records(&records).expect("valid records");

    assert_eq!(data.dataset.titles(), vec!["temp", "Series 2"]);
    let s0 = data.dataset.series_at(0).unwrap();
    assert_eq!(s0.points(), &[(1.0, Some(10.0)), (2.0, Some(20.0))]);
    let s1 = data.dataset.series_at(1).unwrap();
    assert_eq!(s1.points(), &[(1.0, Some(5.0))]);
    assert_eq!(data.x_labels, vec![(1.0, "Jan".to_string()), (2.0, "Feb".to_string())]);
}

#[test]
fn mismatched_columns_are_rejected() {
    let records = vec![
        DatumRecord::new(X_AXIS_INDEX, 0, 1.0, ""),
        DatumRecord::new(X_AXIS_INDEX, 0, 2.0, ""),
        DatumRecord::new(Y_AXIS_INDEX, 0, 5.0, ""),
    ];
    let err = Dataset::from_records(&records).err();
    assert!(matches!(err, Some(ChartError::LengthMismatch { series: 0, x_len: 2, y_len: 1 })));

    let records = vec![DatumRecord::new(X_AXIS_INDEX, 0, 1.0, ""), DatumRecord::new(7, 0, 1.0, "")];
    let err = Dataset::from_records(&records).err();
    assert!(matches!(err, Some(ChartError::UnknownAxis { record: 1, axis: 7 })));
}

#[test]
fn reads_csv_with_case_insensitive_headers() {
    let csv = "Axis,Series,Value,Label\n0,0,1,Jan\n1,0,10,temp\nx,0,1,\n0,0,2,Feb\n1,0,20,\n";
    let records = read_records(csv.as_bytes()).expect("csv parses");
    assert_eq!(records.len(), 4, "the unparseable row is skipped");
    assert_eq!(records[0], DatumRecord::new(0, 0, 1.0, "Jan"));

    let data = Dataset::from_records(&records).expect("valid records");
    assert_eq!(data.dataset.titles(), vec!["temp"]);
    assert_eq!(data.dataset.series_at(0).map(|s| s.len()), Some(2));
}

#[test]
fn label_column_is_optional() {
    let records = read_records("axis,series,value\n0,0,3\n1,0,4\n".as_bytes()).expect("csv parses");
    assert_eq!(records, vec![DatumRecord::new(0, 0, 3.0, ""), DatumRecord::new(1, 0, 4.0, "")]);
}

#[test]
fn missing_column_is_an_error() {
    let err = read_records("axis,value\n0,1\n".as_bytes()).err();
    assert!(matches!(err, Some(ChartError::MissingColumn("series"))));
}
