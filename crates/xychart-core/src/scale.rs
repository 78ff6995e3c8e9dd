// File: crates/xychart-core/src/scale.rs
// Summary: Linear axis scale mapping data values to device pixels and back.

/// One axis of a render pass: `px = origin +/- px_per_unit * (v - min)`.
/// Horizontal scales grow rightwards from `left`; vertical ones grow upwards from `bottom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    pub origin_px: f64,
    pub min: f64,
    pub max: f64,
    /// Zero when the span is degenerate or unresolved.
    pub px_per_unit: f64,
    pub inverted: bool,
}

impl AxisScale {
    fn new(origin_px: f64, extent_px: f64, min: f64, max: f64, inverted: bool) -> Self {
        let span = max - min;
        let px_per_unit = if span != 0.0 && span.is_finite() { extent_px / span } else { 0.0 };
        Self { origin_px, min, max, px_per_unit, inverted }
    }

    pub fn horizontal(left: f64, right: f64, min: f64, max: f64) -> Self {
        Self::new(left, right - left, min, max, false)
    }

    pub fn vertical(top: f64, bottom: f64, min: f64, max: f64) -> Self {
        Self::new(bottom, bottom - top, min, max, true)
    }

    /// Keeps `origin_px` but adopts another scale's window and density.
    pub fn sharing(&self, other: &AxisScale) -> Self {
        Self { min: other.min, max: other.max, px_per_unit: other.px_per_unit, ..*self }
    }

    pub fn is_degenerate(&self) -> bool {
        self.px_per_unit == 0.0
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let d = self.px_per_unit * (v - self.min);
        if self.inverted { self.origin_px - d } else { self.origin_px + d }
    }

    /// Inverse of `to_px`; a degenerate scale maps every pixel to `min`.
    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        if self.is_degenerate() {
            return self.min;
        }
        let d = if self.inverted { self.origin_px - px } else { px - self.origin_px };
        self.min + d / self.px_per_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_scale_grows_upwards() {
        let s = AxisScale::vertical(0.0, 100.0, 0.0, 10.0);
        assert_eq!(s.to_px(0.0), 100.0);
        assert_eq!(s.to_px(10.0), 0.0);
        assert!((s.from_px(25.0) - 7.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_span_has_no_density() {
        let s = AxisScale::horizontal(10.0, 110.0, 3.0, 3.0);
        assert!(s.is_degenerate());
        assert_eq!(s.to_px(3.0), 10.0);
        assert_eq!(s.to_px(50.0), 10.0);
        assert_eq!(s.from_px(70.0), 3.0);
    }
}
