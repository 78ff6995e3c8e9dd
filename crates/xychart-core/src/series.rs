// File: crates/xychart-core/src/series.rs
// Summary: Series store: x-ordered (x, y|null) points with cached extrema and text annotations.

use std::ops::Range;

/// Cached bounds of a series. Y bounds are infinite when every y is null.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extrema {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Extrema {
    const EMPTY: Extrema = Extrema {
        min_x: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        min_y: f64::INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    fn include(&mut self, x: f64, y: Option<f64>) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        if let Some(y) = y {
            self.min_y = self.min_y.min(y);
            self.max_y = self.max_y.max(y);
        }
    }

    /// True when at least one non-null y contributed.
    pub fn has_y(&self) -> bool {
        self.min_y <= self.max_y
    }
}

/// Free text drawn at data coordinates alongside a series.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug)]
pub struct Series {
    title: String,
    scale: usize,
    points: Vec<(f64, Option<f64>)>,
    annotations: Vec<Annotation>,
    extrema: Extrema,
    stale: bool,
    in_batch: bool,
}

impl Series {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            scale: 0,
            points: Vec::new(),
            annotations: Vec::new(),
            extrema: Extrema::EMPTY,
            stale: false,
            in_batch: false,
        }
    }

    /// Series attached to value scale `scale`.
    pub fn with_scale(title: impl Into<String>, scale: usize) -> Self {
        let mut s = Self::new(title);
        s.scale = scale;
        s
    }

    /// Builds a series from (x, y) pairs in any order.
    pub fn with_data(title: impl Into<String>, data: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut s = Self::new(title);
        s.batch(|s| {
            for (x, y) in data {
                s.add(x, y);
            }
        });
        s
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn set_title(&mut self, title: impl Into<String>) { self.title = title.into(); }
    pub fn scale(&self) -> usize { self.scale }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn points(&self) -> &[(f64, Option<f64>)] { &self.points }

    pub fn x(&self, index: usize) -> Option<f64> {
        self.points.get(index).map(|p| p.0)
    }

    pub fn y(&self, index: usize) -> Option<f64> {
        self.points.get(index).and_then(|p| p.1)
    }

    /// Adds a point; it lands after any existing point with the same x.
    pub fn add(&mut self, x: f64, y: f64) -> usize {
        self.insert_point(x, Some(y))
    }

    /// Adds a gap at `x`.
    pub fn add_null(&mut self, x: f64) -> usize {
        self.insert_point(x, None)
    }

    pub fn insert_point(&mut self, x: f64, y: Option<f64>) -> usize {
        let at = self.points.partition_point(|p| p.0 <= x);
        self.points.insert(at, (x, y));
        if self.in_batch || self.stale {
            self.stale = true;
        } else {
            self.extrema.include(x, y);
        }
        at
    }

    pub fn remove(&mut self, index: usize) -> Option<(f64, Option<f64>)> {
        if index >= self.points.len() {
            return None;
        }
        let (x, y) = self.points.remove(index);
        let e = self.extrema;
        let on_edge = x == e.min_x || x == e.max_x || y.is_some_and(|y| y == e.min_y || y == e.max_y);
        if on_edge {
            self.stale = true;
        }
        self.refresh();
        Some((x, y))
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.annotations.clear();
        self.extrema = Extrema::EMPTY;
        self.stale = false;
    }

    /// Runs several mutations with one extrema recompute at the end.
    pub fn batch<R>(&mut self, f: impl FnOnce(&mut Series) -> R) -> R {
        let outer = self.in_batch;
        self.in_batch = true;
        let out = f(self);
        self.in_batch = outer;
        self.refresh();
        out
    }

    fn refresh(&mut self) {
        if !self.stale || self.in_batch {
            return;
        }
        let mut e = Extrema::EMPTY;
        for &(x, y) in &self.points {
            e.include(x, y);
        }
        self.extrema = e;
        self.stale = false;
    }

    /// Bounds of the point set, `None` while empty. Stale only inside `batch`.
    pub fn extrema(&self) -> Option<Extrema> {
        if self.points.is_empty() { None } else { Some(self.extrema) }
    }

    pub fn min_x(&self) -> Option<f64> { self.extrema().map(|e| e.min_x) }
    pub fn max_x(&self) -> Option<f64> { self.extrema().map(|e| e.max_x) }
    pub fn min_y(&self) -> Option<f64> { self.extrema().filter(Extrema::has_y).map(|e| e.min_y) }
    pub fn max_y(&self) -> Option<f64> { self.extrema().filter(Extrema::has_y).map(|e| e.max_y) }

    /// Index span of points with `min_x <= x <= max_x`.
    /// With `bounding`, one extra point on each side is included so lines run off the plot edge.
    pub fn range(&self, min_x: f64, max_x: f64, bounding: bool) -> Range<usize> {
        let mut start = self.points.partition_point(|p| p.0 < min_x);
        let mut end = self.points.partition_point(|p| p.0 <= max_x);
        if bounding {
            start = start.saturating_sub(1);
            end = (end + 1).min(self.points.len());
        }
        start..end.max(start)
    }

    /// First index whose x equals `x`.
    pub fn index_for_x(&self, x: f64) -> Option<usize> {
        let i = self.points.partition_point(|p| p.0 < x);
        (self.points.get(i).map(|p| p.0) == Some(x)).then_some(i)
    }

    pub fn add_annotation(&mut self, text: impl Into<String>, x: f64, y: f64) {
        self.annotations.push(Annotation { text: text.into(), x, y });
    }

    pub fn remove_annotation(&mut self, index: usize) -> Option<Annotation> {
        (index < self.annotations.len()).then(|| self.annotations.remove(index))
    }

    pub fn annotations(&self) -> &[Annotation] { &self.annotations }
}
