// File: crates/xychart-core/src/theme.rs
// Summary: Light/Dark colour defaults handed to the renderer configuration at construction.

/// 8-bit ARGB colour, independent of any drawing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);
    pub const LIGHT_GRAY: Color = Color::from_argb(255, 204, 204, 204);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub margins: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub labels: Color,
    pub annotations: Color,
    pub palette: [Color; 6],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            margins: Color::from_argb(255, 18, 18, 20),
            grid: Color::from_argb(255, 40, 40, 45),
            axis_line: Color::from_argb(255, 180, 180, 190),
            axis_label: Color::from_argb(255, 210, 210, 220),
            labels: Color::LIGHT_GRAY,
            annotations: Color::from_argb(255, 235, 235, 245),
            palette: [
                Color::from_argb(255, 64, 160, 255),
                Color::from_argb(255, 40, 200, 120),
                Color::from_argb(255, 220, 80, 80),
                Color::from_argb(255, 255, 200, 60),
                Color::from_argb(255, 170, 110, 240),
                Color::from_argb(255, 0, 200, 200),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            margins: Color::from_argb(255, 250, 250, 252),
            grid: Color::from_argb(255, 225, 225, 230),
            axis_line: Color::from_argb(255, 60, 60, 70),
            axis_label: Color::from_argb(255, 30, 30, 35),
            labels: Color::from_argb(255, 80, 80, 90),
            annotations: Color::from_argb(255, 30, 30, 35),
            palette: [
                Color::from_argb(255, 33, 111, 219),
                Color::from_argb(255, 24, 160, 88),
                Color::from_argb(255, 200, 56, 56),
                Color::from_argb(255, 214, 150, 20),
                Color::from_argb(255, 128, 72, 200),
                Color::from_argb(255, 0, 150, 150),
            ],
        }
    }

    /// Palette colour for the series at `index`, cycling.
    pub fn series_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
