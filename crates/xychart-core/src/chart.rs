// File: crates/xychart-core/src/chart.rs
// Summary: XY chart (single kind or combined layers) owning data, config and the last pass state.

use crate::config::RendererConfig;
use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::geometry::{Point, PointF, RectI32};
use crate::hit::{HitIndex, Selection};
use crate::kinds::ChartKind;
use crate::render::{self, PassState};
use crate::surface::Surface;
use crate::tools::{FitZoom, Pan, Zoom};
use crate::transform::{OrientationTransform, TransformEngine};

/// Which series of the dataset a layer draws.
#[derive(Clone, Debug, PartialEq)]
pub enum LayerSeries {
    All,
    Indices(Vec<usize>),
}

/// One chart kind applied to a set of series.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub kind: ChartKind,
    pub series: LayerSeries,
}

impl Layer {
    pub fn all(kind: ChartKind) -> Self {
        Self { kind, series: LayerSeries::All }
    }

    pub fn contains(&self, series_index: usize, series_count: usize) -> bool {
        match &self.series {
            LayerSeries::All => series_index < series_count,
            LayerSeries::Indices(v) => v.contains(&series_index),
        }
    }

    /// Series drawn by this layer, in layer order, skipping indices past `series_count`.
    pub fn indices(&self, series_count: usize) -> Vec<usize> {
        match &self.series {
            LayerSeries::All => (0..series_count).collect(),
            LayerSeries::Indices(v) => v.iter().copied().filter(|&i| i < series_count).collect(),
        }
    }
}

pub struct Chart {
    dataset: Dataset,
    config: RendererConfig,
    layers: Vec<Layer>,
    engine: TransformEngine,
    hits: HitIndex,
    orientation: Option<OrientationTransform>,
}

impl Chart {
    /// Single-kind chart over every series of `dataset`.
    pub fn new(kind: ChartKind, dataset: Dataset, config: RendererConfig) -> Self {
        Self::with_layers(vec![Layer::all(kind)], dataset, config)
    }

    /// Single-kind chart with the kind given by name ("Line", "Bar", ...).
    pub fn from_type_name(name: &str, dataset: Dataset, config: RendererConfig) -> Result<Self> {
        Ok(Self::new(name.parse()?, dataset, config))
    }

    /// Combined chart: each `(type name, series indices)` pair is one layer, drawn in order.
    pub fn combined(dataset: Dataset, config: RendererConfig, layers: &[(&str, Vec<usize>)]) -> Result<Self> {
        if layers.is_empty() {
            return Err(ChartError::EmptyCombination);
        }
        let count = dataset.len();
        let mut built = Vec::with_capacity(layers.len());
        for (layer, (name, indices)) in layers.iter().enumerate() {
            let kind: ChartKind = name.parse()?;
            if let Some(&series) = indices.iter().find(|&&i| i >= count) {
                return Err(ChartError::MissingSeries { layer, series, count });
            }
            built.push(Layer { kind, series: LayerSeries::Indices(indices.clone()) });
        }
        Ok(Self::with_layers(built, dataset, config))
    }

    fn with_layers(layers: Vec<Layer>, dataset: Dataset, mut config: RendererConfig) -> Self {
        if config.initial_range.is_none() {
            config.initial_range = config.range(0).window();
        }
        tracing::debug!(layers = layers.len(), series = dataset.len(), "chart created");
        Self {
            dataset,
            config,
            layers,
            engine: TransformEngine::new(),
            hits: HitIndex::new(),
            orientation: None,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn dataset_mut(&mut self) -> &mut Dataset {
        &mut self.dataset
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RendererConfig {
        &mut self.config
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Transform state of the last render pass.
    pub fn engine(&self) -> &TransformEngine {
        &self.engine
    }

    pub fn hit_index(&self) -> &HitIndex {
        &self.hits
    }

    /// Kind `series_index` is drawn with (first layer listing it).
    pub fn kind_of(&self, series_index: usize) -> ChartKind {
        render::kind_for(&self.layers, series_index, self.dataset.len())
    }

    /// Lower Y bound fit-to-data folds in for this series; `Some(0.0)` for bars.
    pub fn default_minimum(&self, series_index: usize) -> Option<f64> {
        self.kind_of(series_index).default_minimum()
    }

    /// Renders the chart into the frame `(x, y, width, height)` of `surface`.
    /// Rebuilds the transforms and the clickable areas used by `pick`.
    pub fn draw(&mut self, surface: &mut dyn Surface, x: i32, y: i32, width: i32, height: i32) {
        let area = RectI32::from_ltwh(x, y, width, height);
        let state = PassState { engine: &mut self.engine, hits: &mut self.hits };
        let orientation = render::render(surface, area, &self.dataset, &self.config, &self.layers, state);
        self.orientation = Some(orientation);
    }

    /// Device point to the logical frame series are drawn in.
    pub fn logical_point(&self, p: PointF) -> PointF {
        match self.orientation {
            Some(o) if !o.is_identity() => o.to_logical(p),
            _ => p,
        }
    }

    /// Topmost point whose clickable area contains the device point `p`.
    pub fn pick(&self, p: PointF) -> Option<Selection> {
        self.hits.query(self.logical_point(p))
    }

    pub fn to_screen(&self, p: Point, scale: usize) -> Point {
        self.engine.to_screen(p, scale)
    }

    pub fn to_data(&self, p: Point, scale: usize) -> Point {
        self.engine.to_data(p, scale)
    }

    /// Drags the view so the data under `from` ends up under `to` (device points).
    pub fn pan(&mut self, from: PointF, to: PointF) {
        let (from, to) = (self.logical_point(from), self.logical_point(to));
        Pan::new().apply(self, from, to);
    }

    pub fn zoom_in(&mut self) {
        Zoom::new(true, self.config.zoom_rate).apply(self);
    }

    pub fn zoom_out(&mut self) {
        Zoom::new(false, self.config.zoom_rate).apply(self);
    }

    /// Restores the initial window, or frames all data.
    pub fn fit_to_data(&mut self) {
        FitZoom.apply(self);
    }
}
