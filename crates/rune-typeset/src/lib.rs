//! rune-typeset: incremental glyph layout for pre-rasterized fonts.
//!
//! - `font`: font descriptors, glyph metrics and glyph providers
//! - `fallback`: the four-step glyph fallback chain
//! - `layout`: baseline-aligned line layout with exact undo

pub mod error;
pub mod fallback;
pub mod font;
pub mod layout;

pub use error::{LayoutError, Result};
pub use font::{FontDescriptor, Glyph, GlyphPrefetch, GlyphProvider, GlyphTable};
pub use layout::{Bounds, GlyphLayout, GlyphRect, LayoutConfig, Line, PositionedChar};
