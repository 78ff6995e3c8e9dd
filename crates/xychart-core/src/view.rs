// File: crates/xychart-core/src/view.rs
// Summary: Resolved data window (x/y bounds) shared by transforms, tools and limits.

/// Data-space window `[x_min, x_max] x [y_min, y_max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Window {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }
    pub fn center(&self) -> (f64, f64) {
        ((self.x_min + self.x_max) / 2.0, (self.y_min + self.y_max) / 2.0)
    }

    /// Smallest window covering both.
    pub fn union(&self, other: &Window) -> Window {
        Window {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Grows each axis by `dx`/`dy` on both sides.
    pub fn expand(&self, dx: f64, dy: f64) -> Window {
        Window::new(self.x_min - dx, self.x_max + dx, self.y_min - dy, self.y_max + dy)
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.x_min, self.x_max, self.y_min, self.y_max]
    }
}

impl From<[f64; 4]> for Window {
    fn from(r: [f64; 4]) -> Self {
        Window::new(r[0], r[1], r[2], r[3])
    }
}
