use core::ops::Range;

use crate::layout::undo::{AdjustmentLog, BaselineAdjustment};

/// A single laid out line: a contiguous run of the character arena plus the
/// vertical alignment state needed to place and un-place glyphs on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Arena index range of the characters on this line.
    pub(crate) range: Range<usize>,
    /// Y position of the line top, fixed when the line is opened.
    pub(crate) start_y: f32,
    /// Largest glyph baseline placed on this line so far.
    pub(crate) baseline: Option<f32>,
    pub(crate) adjustments: AdjustmentLog,
}

impl Line {
    pub(crate) fn new(first_index: usize, start_y: f32) -> Self {
        Self {
            range: first_index..first_index,
            start_y,
            baseline: None,
            adjustments: AdjustmentLog::new(),
        }
    }

    /// Arena index range of the characters on this line.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn start_y(&self) -> f32 {
        self.start_y
    }

    /// Baseline-of-record, `None` until the line receives a character.
    pub fn baseline(&self) -> Option<f32> {
        self.baseline
    }

    pub fn adjustments(&self) -> &[BaselineAdjustment] {
        self.adjustments.entries()
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}
