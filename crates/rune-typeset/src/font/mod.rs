pub mod descriptor;
pub mod glyph;
pub mod provider;

pub use descriptor::{DEFAULT_FALLBACK_CHAR, FontDescriptor};
pub use glyph::Glyph;
pub use provider::{GlyphPrefetch, GlyphProvider, GlyphTable};
