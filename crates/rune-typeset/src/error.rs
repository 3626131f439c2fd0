//! Error types for the layout engine.

use thiserror::Error;

/// Result type for layout queries.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised by layout queries. Layout mutations never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The baseline of "the" line was requested while content spans several lines.
    #[error("invalid state: baseline is ambiguous across {lines} non-empty lines")]
    AmbiguousBaseline { lines: usize },
}
