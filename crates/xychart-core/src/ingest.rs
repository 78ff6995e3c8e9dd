// File: crates/xychart-core/src/ingest.rs
// Summary: Groups (axis, series, value, label) records into a dataset; CSV reader for such records.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::series::Series;

pub const X_AXIS_INDEX: usize = 0;
pub const Y_AXIS_INDEX: usize = 1;

/// One value of one series on one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct DatumRecord {
    pub axis: usize,
    pub series: usize,
    pub value: f64,
    /// X records: custom X label at `value`. Y records: the first non-empty one titles the series.
    pub label: String,
}

impl DatumRecord {
    pub fn new(axis: usize, series: usize, value: f64, label: impl Into<String>) -> Self {
        Self { axis, series, value, label: label.into() }
    }
}

#[derive(Clone, Debug)]
pub struct IngestedData {
    pub dataset: Dataset,
    /// Custom X labels collected from labelled X records, as (value, text).
    pub x_labels: Vec<(f64, String)>,
}

#[derive(Default)]
struct Columns<'a> {
    x: Vec<f64>,
    y: Vec<f64>,
    title: Option<&'a str>,
}

impl Dataset {
    /// Groups records by axis then series (ties keep input order) and pairs each series'
    /// X and Y values in order. Series are created in ascending series index.
    pub fn from_records(records: &[DatumRecord]) -> Result<IngestedData> {
        let mut order: Vec<(usize, &DatumRecord)> = records.iter().enumerate().collect();
        order.sort_by_key(|(_, r)| (r.axis, r.series));

        let mut columns: BTreeMap<usize, Columns<'_>> = BTreeMap::new();
        let mut x_labels = Vec::new();
        for (i, r) in order {
            let col = columns.entry(r.series).or_default();
            match r.axis {
                X_AXIS_INDEX => {
                    col.x.push(r.value);
                    if !r.label.is_empty() && !x_labels.iter().any(|(v, _)| *v == r.value) {
                        x_labels.push((r.value, r.label.clone()));
                    }
                }
                Y_AXIS_INDEX => {
                    col.y.push(r.value);
                    if col.title.is_none() && !r.label.is_empty() {
                        col.title = Some(&r.label);
                    }
                }
                axis => return Err(ChartError::UnknownAxis { record: i, axis }),
            }
        }

        let mut dataset = Dataset::new();
        for (series, col) in columns {
            if col.x.len() != col.y.len() {
                return Err(ChartError::LengthMismatch { series, x_len: col.x.len(), y_len: col.y.len() });
            }
            let title = col.title.map_or_else(|| format!("Series {}", series + 1), str::to_string);
            dataset.add_series(Series::with_data(title, col.x.into_iter().zip(col.y)));
        }
        tracing::debug!(records = records.len(), series = dataset.len(), "records ingested");
        Ok(IngestedData { dataset, x_labels })
    }
}

/// Reads records from CSV with `axis`, `series`, `value` and optional `label` headers
/// (case-insensitive). Rows whose numbers do not parse are skipped with a warning.
pub fn read_records(reader: impl Read) -> Result<Vec<DatumRecord>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.iter().any(|want| h == want))
    };

    let i_axis = idx(&["axis", "axis_index"]).ok_or(ChartError::MissingColumn("axis"))?;
    let i_series = idx(&["series", "series_index"]).ok_or(ChartError::MissingColumn("series"))?;
    let i_value = idx(&["value", "val"]).ok_or(ChartError::MissingColumn("value"))?;
    let i_label = idx(&["label", "title"]);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let field = |ix: usize| rec.get(ix).map(str::trim);
        let axis = field(i_axis).and_then(|s| s.parse::<usize>().ok());
        let series = field(i_series).and_then(|s| s.parse::<usize>().ok());
        let value = field(i_value).and_then(|s| s.parse::<f64>().ok());
        match (axis, series, value) {
            (Some(axis), Some(series), Some(value)) => {
                let label = i_label.and_then(field).unwrap_or_default();
                out.push(DatumRecord::new(axis, series, value, label));
            }
            _ => tracing::warn!(row, "skipping record with unparseable axis/series/value"),
        }
    }
    Ok(out)
}

pub fn read_records_path(path: impl AsRef<Path>) -> Result<Vec<DatumRecord>> {
    let file = std::fs::File::open(path.as_ref())?;
    read_records(std::io::BufReader::new(file))
}
