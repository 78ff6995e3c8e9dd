// File: crates/xychart-core/src/error.rs
// Summary: Library error type and crate-wide Result alias.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown chart type `{0}` (expected one of Line, Time, Scatter, Bar, StackedBar, RangeBar)")]
    UnknownChartType(String),
    #[error("a combined chart needs at least one layer")]
    EmptyCombination,
    #[error("layer {layer} references series {series}, but the dataset has {count} series")]
    MissingSeries { layer: usize, series: usize, count: usize },
    #[error("series {series}: {x_len} X values but {y_len} Y values")]
    LengthMismatch { series: usize, x_len: usize, y_len: usize },
    #[error("record {record}: unknown axis index {axis} (0 = X, 1 = Y)")]
    UnknownAxis { record: usize, axis: usize },
    #[error("csv input is missing the `{0}` column")]
    MissingColumn(&'static str),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
