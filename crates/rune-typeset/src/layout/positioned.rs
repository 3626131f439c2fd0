/// Axis-aligned draw rectangle in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl GlyphRect {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// A character placed by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedChar {
    pub ch: char,
    pub rect: GlyphRect,
    /// Set on the first character of each line only.
    pub line_start: bool,
    /// Index of the line this character belongs to.
    pub line: usize,
}

/// Tight extent of the laid out content, measured from the layout origin.
///
/// `width` follows pen advances rather than glyph boxes, so trailing
/// whitespace counts and overhanging glyph ink does not.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const ZERO: Bounds = Bounds {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum.
    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}
