//! Rune Draw configuration system
//!
//! This crate provides centralized configuration management for the text
//! layout engine, loading settings from `rune.toml` with environment variable
//! overrides for quick experiments.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "rune.toml";

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for [`RuneConfig`].
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure for Rune Draw
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RuneConfig {
    /// Text layout settings
    pub text: TextConfig,
}

/// Text layout configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    /// Font family to look glyphs up in. `None` uses family-agnostic glyphs only.
    pub family: Option<String>,
    /// Weight label, e.g. "Regular" or "Bold"
    pub weight: String,
    /// Nominal font size in layout units
    pub size: f32,
    /// Lay glyphs out in fixed-width cells
    pub monospace: bool,
    /// Substitute character used when a glyph is missing
    pub fallback_char: char,
    /// Extra horizontal spacing between adjacent characters
    pub letter_spacing: f32,
    /// Extra vertical spacing between lines
    pub line_spacing: f32,
    /// Use the nominal font size as line height instead of the tallest glyph
    pub font_size_line_height: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            family: None,
            weight: "Regular".to_string(),
            size: 16.0,
            monospace: false,
            fallback_char: '?',
            letter_spacing: 0.0,
            line_spacing: 0.0,
            font_size_line_height: false,
        }
    }
}

impl RuneConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the rune.toml configuration file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML source text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from the default location (rune.toml in the current directory)
    /// or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        match Self::load_from_file(DEFAULT_CONFIG_FILE) {
            Ok(config) => config,
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(err) => {
                tracing::warn!("ignoring {}: {}", DEFAULT_CONFIG_FILE, err);
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        self.merge_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Unparseable values are skipped.
    pub fn merge_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let text = &mut self.text;

        if let Some(family) = lookup("RUNE_TEXT_FAMILY") {
            text.family = if family.is_empty() { None } else { Some(family) };
        }
        if let Some(weight) = lookup("RUNE_TEXT_WEIGHT") {
            text.weight = weight;
        }
        if let Some(size) = lookup("RUNE_TEXT_SIZE").and_then(|v| v.parse::<f32>().ok()) {
            text.size = size;
        }
        if let Some(val) = lookup("RUNE_TEXT_MONOSPACE") {
            text.monospace = parse_flag(&val);
        }
        if let Some(ch) = lookup("RUNE_TEXT_FALLBACK").and_then(|v| single_char(&v)) {
            text.fallback_char = ch;
        }
        if let Some(spacing) =
            lookup("RUNE_TEXT_LETTER_SPACING").and_then(|v| v.parse::<f32>().ok())
        {
            text.letter_spacing = spacing;
        }
        if let Some(spacing) = lookup("RUNE_TEXT_LINE_SPACING").and_then(|v| v.parse::<f32>().ok())
        {
            text.line_spacing = spacing;
        }
        if let Some(val) = lookup("RUNE_TEXT_FONT_SIZE_LINE_HEIGHT") {
            text.font_size_line_height = parse_flag(&val);
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from rune.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

fn parse_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

fn single_char(val: &str) -> Option<char> {
    let mut chars = val.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
