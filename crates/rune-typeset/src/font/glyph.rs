use hashbrown::HashMap;

/// Pre-rasterized metrics for a single character in a single font at a single size.
///
/// All values are in layout units. Vertical values grow downwards, and
/// `baseline` is measured from the top edge of the glyph box.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Character this glyph renders.
    pub character: char,
    /// Horizontal bearing from the pen position to the left edge of the box.
    pub x_offset: f32,
    /// Vertical bearing from the line top to the top edge of the box.
    pub y_offset: f32,
    /// Horizontal pen advance after this glyph.
    pub x_advance: f32,
    /// Width of the glyph box.
    pub width: f32,
    /// Height of the glyph box.
    pub height: f32,
    /// Distance from the top of the glyph box to its baseline.
    pub baseline: f32,
    /// Extra offsets keyed by the character that follows this glyph.
    kerning: HashMap<char, f32>,
}

impl Glyph {
    /// Create a glyph with no kerning pairs.
    pub fn new(character: char) -> Self {
        Self {
            character,
            x_offset: 0.0,
            y_offset: 0.0,
            x_advance: 0.0,
            width: 0.0,
            height: 0.0,
            baseline: 0.0,
            kerning: HashMap::new(),
        }
    }

    pub fn with_offset(mut self, x_offset: f32, y_offset: f32) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    pub fn with_advance(mut self, x_advance: f32) -> Self {
        self.x_advance = x_advance;
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_baseline(mut self, baseline: f32) -> Self {
        self.baseline = baseline;
        self
    }

    /// Register a kerning adjustment applied when `next` follows this glyph.
    pub fn with_kerning(mut self, next: char, amount: f32) -> Self {
        self.kerning.insert(next, amount);
        self
    }

    /// Additional horizontal offset between this glyph and the one placed after it.
    pub fn kerning(&self, next: &Glyph) -> f32 {
        self.kerning.get(&next.character).copied().unwrap_or(0.0)
    }
}
