// File: crates/xychart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (points, integer and float rects).

/// Double precision point, used for data coordinates and exact screen math.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<PointF> for Point {
    fn from(p: PointF) -> Self {
        Self::new(p.x as f64, p.y as f64)
    }
}

/// Device pixel point as handed to a surface.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}

impl From<(f32, f32)> for PointF {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    pub fn to_rect_f(&self) -> RectF {
        RectF::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}

/// Axis-aligned float rectangle (clickable areas, label bounds, shapes).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Square of half-size `radius` centred on `center`.
    pub fn around(center: PointF, radius: f32) -> Self {
        Self::from_ltrb(center.x - radius, center.y - radius, center.x + radius, center.y + radius)
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn is_empty(&self) -> bool { self.left >= self.right || self.top >= self.bottom }

    /// Half-open containment: left/top edges are inside, right/bottom edges are not.
    pub fn contains(&self, p: PointF) -> bool {
        !self.is_empty() && p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }

    /// True when the two rectangles share a non-empty interior.
    pub fn intersects(&self, other: &RectF) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = RectF::from_ltrb(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(PointF::new(0.0, 0.0)));
        assert!(r.contains(PointF::new(9.9, 9.9)));
        assert!(!r.contains(PointF::new(10.0, 5.0)));
        assert!(!RectF::from_ltrb(5.0, 5.0, 5.0, 9.0).contains(PointF::new(5.0, 6.0)));
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = RectF::from_ltrb(0.0, 0.0, 10.0, 10.0);
        let b = RectF::from_ltrb(0.0, 10.0, 10.0, 20.0);
        let c = RectF::from_ltrb(5.0, 9.0, 15.0, 12.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(c.intersects(&b));
    }
}
