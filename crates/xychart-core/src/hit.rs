// File: crates/xychart-core/src/hit.rs
// Summary: Clickable areas built during a render pass and the topmost-wins pick query.

use crate::geometry::{PointF, RectF};

/// Screen rectangle mapped back to one data point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickableArea {
    pub rect: RectF,
    pub point_index: usize,
    pub x: f64,
    pub y: f64,
}

/// Result of a pick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub series_index: usize,
    pub point_index: usize,
    pub x: f64,
    pub y: f64,
}

/// Areas per drawn series, in draw order. `None` entries mark gaps (null values).
#[derive(Clone, Debug, Default)]
pub struct HitIndex {
    layers: Vec<(usize, Vec<Option<ClickableArea>>)>,
}

impl HitIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.layers.clear();
    }

    /// Starts the area list of `series_index`; later calls draw on top of earlier ones.
    pub fn begin_series(&mut self, series_index: usize) {
        self.layers.push((series_index, Vec::new()));
    }

    /// Appends to the series started last.
    pub fn extend(&mut self, areas: impl IntoIterator<Item = Option<ClickableArea>>) {
        if let Some((_, list)) = self.layers.last_mut() {
            list.extend(areas);
        }
    }

    pub fn push_gap(&mut self) {
        self.extend([None]);
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|(_, l)| l.is_empty())
    }

    /// Areas recorded for `series_index` (all layers it was drawn in, in draw order).
    pub fn areas(&self, series_index: usize) -> impl Iterator<Item = &Option<ClickableArea>> {
        self.layers
            .iter()
            .filter(move |(s, _)| *s == series_index)
            .flat_map(|(_, l)| l.iter())
    }

    /// Last drawn series first, points in order; the first containing rectangle wins.
    pub fn query(&self, point: PointF) -> Option<Selection> {
        self.layers.iter().rev().find_map(|(series_index, list)| {
            list.iter().flatten().find(|a| a.rect.contains(point)).map(|a| Selection {
                series_index: *series_index,
                point_index: a.point_index,
                x: a.x,
                y: a.y,
            })
        })
    }
}
