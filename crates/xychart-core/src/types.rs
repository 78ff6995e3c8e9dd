// File: crates/xychart-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, orientation, alignment).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Margins {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Margins {
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self { top, left, bottom, right }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20, 30, 10, 20)
    }
}

/// Logical chart orientation. Vertical charts are drawn rotated by 90 degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Rotation applied to the canvas, in degrees.
    pub const fn angle(self) -> f32 {
        match self {
            Orientation::Horizontal => 0.0,
            Orientation::Vertical => 90.0,
        }
    }

    pub const fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }
}

/// Horizontal alignment used for text anchors and Y axis placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}
