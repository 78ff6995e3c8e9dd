// File: crates/xychart-core/src/lib.rs
// Summary: Core library entry point; exports the data model, chart types, tools and surface API.

pub mod axis;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod doughnut;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod hit;
pub mod ingest;
pub mod kinds;
pub mod layout;
mod render;
pub mod scale;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod tools;
pub mod transform;
pub mod types;
pub mod view;

pub use axis::{AxisRange, ScaleAxis};
pub use chart::{Chart, Layer, LayerSeries};
pub use config::{PointStyle, RendererConfig, SeriesStyle};
pub use dataset::Dataset;
pub use doughnut::{DoughnutChart, MultipleCategorySeries};
pub use error::{ChartError, Result};
pub use geometry::{Point, PointF, RectF, RectI32};
pub use hit::{ClickableArea, HitIndex, Selection};
pub use ingest::{read_records, read_records_path, DatumRecord, IngestedData};
pub use kinds::ChartKind;
pub use series::{Annotation, Series};
pub use surface::{DrawCommand, Paint, PaintStyle, RecordingSurface, Surface};
pub use text::{MonospaceMetrics, TextMeasure};
pub use theme::{Color, Theme};
pub use tools::{FitZoom, Pan, Zoom};
pub use transform::{OrientationTransform, TransformEngine};
pub use types::{Align, Margins, Orientation};
pub use view::Window;
