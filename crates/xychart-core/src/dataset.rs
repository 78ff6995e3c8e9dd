// File: crates/xychart-core/src/dataset.rs
// Summary: Ordered multi-series dataset; insertion order is draw order and legend order.

use crate::series::Series;

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    series: Vec<Series>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_series(&mut self, series: Series) -> usize {
        self.series.push(series);
        self.series.len() - 1
    }

    pub fn insert_series(&mut self, index: usize, series: Series) {
        let at = index.min(self.series.len());
        self.series.insert(at, series);
    }

    pub fn remove_series(&mut self, index: usize) -> Option<Series> {
        (index < self.series.len()).then(|| self.series.remove(index))
    }

    pub fn clear(&mut self) {
        self.series.clear();
    }

    pub fn len(&self) -> usize { self.series.len() }
    pub fn is_empty(&self) -> bool { self.series.is_empty() }
    pub fn series(&self) -> &[Series] { &self.series }
    pub fn series_at(&self, index: usize) -> Option<&Series> { self.series.get(index) }
    pub fn series_at_mut(&mut self, index: usize) -> Option<&mut Series> { self.series.get_mut(index) }

    pub fn titles(&self) -> Vec<String> {
        self.series.iter().map(|s| s.title().to_string()).collect()
    }

    /// Highest scale index referenced plus one; at least one scale always exists.
    pub fn scale_count(&self) -> usize {
        self.series.iter().map(|s| s.scale() + 1).max().unwrap_or(1)
    }

    /// True when some series holds at least one point.
    pub fn has_values(&self) -> bool {
        self.series.iter().any(|s| !s.is_empty())
    }
}

impl FromIterator<Series> for Dataset {
    fn from_iter<I: IntoIterator<Item = Series>>(iter: I) -> Self {
        Self { series: iter.into_iter().collect() }
    }
}
