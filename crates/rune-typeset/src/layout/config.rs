use rune_config::TextConfig;

use crate::font::FontDescriptor;

/// Settings fixed for the lifetime of a layout session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutConfig {
    pub font: FontDescriptor,
    /// Extra horizontal space inserted before every character except the
    /// first on a line.
    pub letter_spacing: f32,
    /// Extra vertical space inserted between lines.
    pub line_spacing: f32,
    /// Advance lines by the nominal font size instead of the tallest glyph.
    pub font_size_line_height: bool,
}

impl LayoutConfig {
    pub fn new(font: FontDescriptor) -> Self {
        Self {
            font,
            ..Self::default()
        }
    }

    pub fn with_letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }

    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn with_font_size_line_height(mut self, enabled: bool) -> Self {
        self.font_size_line_height = enabled;
        self
    }

    /// Build a session config from the `[text]` section of `rune.toml`.
    pub fn from_text_config(config: &TextConfig) -> Self {
        Self {
            font: FontDescriptor::from_text_config(config),
            letter_spacing: config.letter_spacing,
            line_spacing: config.line_spacing,
            font_size_line_height: config.font_size_line_height,
        }
    }
}
