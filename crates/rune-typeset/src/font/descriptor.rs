use core::fmt;

use rune_config::TextConfig;

/// Default substitute character for glyphs missing from a font.
pub const DEFAULT_FALLBACK_CHAR: char = '?';

/// Immutable description of the font a layout session uses.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    family: Option<String>,
    weight: String,
    size: f32,
    monospace: bool,
    fallback_char: char,
}

impl FontDescriptor {
    /// Describe a proportional font. `family = None` restricts lookups to
    /// family-agnostic glyph sets.
    pub fn new(family: Option<&str>, size: f32) -> Self {
        Self {
            family: family.map(str::to_owned),
            weight: "Regular".to_string(),
            size,
            monospace: false,
            fallback_char: DEFAULT_FALLBACK_CHAR,
        }
    }

    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    pub fn with_monospace(mut self, monospace: bool) -> Self {
        self.monospace = monospace;
        self
    }

    pub fn with_fallback_char(mut self, fallback_char: char) -> Self {
        self.fallback_char = fallback_char;
        self
    }

    pub fn from_text_config(config: &TextConfig) -> Self {
        Self::new(config.family.as_deref(), config.size)
            .with_weight(config.weight.clone())
            .with_monospace(config.monospace)
            .with_fallback_char(config.fallback_char)
    }

    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    /// Nominal font size in layout units.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn is_monospace(&self) -> bool {
        self.monospace
    }

    pub fn fallback_char(&self) -> char {
        self.fallback_char
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new(None, 16.0)
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}px",
            self.family.as_deref().unwrap_or("*"),
            self.weight,
            self.size
        )
    }
}
