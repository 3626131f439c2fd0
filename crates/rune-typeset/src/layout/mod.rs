pub mod config;
pub mod glyph_layout;
pub mod line;
pub mod positioned;
pub mod undo;

pub use config::LayoutConfig;
pub use glyph_layout::{GlyphLayout, MONOSPACE_REFERENCE};
pub use line::Line;
pub use positioned::{Bounds, GlyphRect, PositionedChar};
pub use undo::{AdjustmentLog, BaselineAdjustment};
