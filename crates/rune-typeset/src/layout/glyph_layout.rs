use crate::error::{LayoutError, Result};
use crate::fallback;
use crate::font::{Glyph, GlyphProvider};
use crate::layout::undo::BaselineAdjustment;
use crate::layout::{Bounds, GlyphRect, LayoutConfig, Line, PositionedChar};

/// Character whose glyph width defines the cell of a monospace font.
pub const MONOSPACE_REFERENCE: char = 'M';

/// Per-character state kept alongside the public records for kerning and undo.
#[derive(Debug, Clone, Copy)]
struct Placement<'p> {
    glyph: &'p Glyph,
    /// Pen position right after this character was placed.
    pen_after: f32,
}

/// Incremental glyph layout with exact undo.
///
/// Characters are appended one at a time and placed left to right on the
/// current line. Lines are aligned to their largest glyph baseline: when a
/// glyph with a lower baseline arrives, every glyph already on the line is
/// moved down to match, and that shift is logged so [`remove_last`] can
/// reverse it.
///
/// Line breaks are explicit; there is no wrapping.
///
/// [`remove_last`]: GlyphLayout::remove_last
#[derive(Debug)]
pub struct GlyphLayout<'p, P: ?Sized> {
    provider: &'p P,
    config: LayoutConfig,
    /// Cell width for monospace fonts, `None` for proportional fonts.
    cell_width: Option<f32>,
    /// Never empty; the last line is the one receiving characters.
    lines: Vec<Line>,
    chars: Vec<PositionedChar>,
    placements: Vec<Placement<'p>>,
    pen_x: f32,
    bounds: Bounds,
}

impl<'p, P: GlyphProvider + ?Sized> GlyphLayout<'p, P> {
    pub fn new(provider: &'p P, config: LayoutConfig) -> Self {
        let cell_width = config.font.is_monospace().then(|| {
            fallback::resolve(provider, &config.font, MONOSPACE_REFERENCE)
                .map_or(config.font.size(), |glyph| glyph.width)
        });

        Self {
            provider,
            config,
            cell_width,
            lines: vec![Line::new(0, 0.0)],
            chars: Vec::new(),
            placements: Vec::new(),
            pen_x: 0.0,
            bounds: Bounds::ZERO,
        }
    }

    /// Lay out `text` in a fresh session and return its bounds.
    pub fn measure(provider: &'p P, config: LayoutConfig, text: &str) -> Bounds {
        let mut layout = Self::new(provider, config);
        layout.layout_text(text);
        layout.bounds()
    }

    /// Place one character at the end of the current line.
    ///
    /// Characters with no glyph anywhere in the fallback chain are dropped.
    pub fn append(&mut self, ch: char) {
        let Some(glyph) = fallback::resolve(self.provider, &self.config.font, ch) else {
            return;
        };

        let index = self.chars.len();
        let line_index = self.lines.len() - 1;
        let line = &mut self.lines[line_index];

        let line_start = line.is_empty();
        if line_start {
            self.pen_x = 0.0;
            line.baseline = Some(glyph.baseline);
        } else {
            let kerning = match self.cell_width {
                Some(_) => 0.0,
                None => self.placements[index - 1].glyph.kerning(glyph),
            };
            self.pen_x += kerning + self.config.letter_spacing;
        }

        let left = match self.cell_width {
            Some(cell_width) => {
                let left = self.pen_x + (cell_width - glyph.width) / 2.0;
                self.pen_x += cell_width;
                left
            }
            None => {
                let left = self.pen_x + glyph.x_offset;
                self.pen_x += glyph.x_advance;
                left
            }
        };

        let mut baseline = line.baseline.unwrap_or(glyph.baseline);
        if glyph.baseline > baseline {
            let delta = glyph.baseline - baseline;
            line.adjustments.push(BaselineAdjustment {
                delta,
                affected: line.len(),
                owner: index,
                previous_baseline: baseline,
            });
            for placed in &mut self.chars[line.range.clone()] {
                placed.rect.top += delta;
                self.bounds.height = self.bounds.height.max(placed.rect.bottom());
            }
            tracing::trace!(
                "line {} baseline {} -> {}, shifted {} chars",
                line_index,
                baseline,
                glyph.baseline,
                line.len()
            );
            baseline = glyph.baseline;
            line.baseline = Some(baseline);
        }

        let rect = GlyphRect {
            left,
            top: line.start_y + glyph.y_offset + (baseline - glyph.baseline),
            width: glyph.width,
            height: glyph.height,
        };
        line.range.end += 1;

        tracing::trace!("placed {:?} at {:?}", ch, rect);
        self.chars.push(PositionedChar {
            ch,
            rect,
            line_start,
            line: line_index,
        });
        self.placements.push(Placement {
            glyph,
            pen_after: self.pen_x,
        });

        self.bounds = self.bounds.union(Bounds::new(self.pen_x, rect.bottom()));
    }

    /// Append every character of `text` in order.
    pub fn append_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.append(ch);
        }
    }

    /// Like [`append_text`](Self::append_text), but `'\n'` starts a new line.
    pub fn layout_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.break_line();
            } else {
                self.append(ch);
            }
        }
    }

    /// Close the current line and open a new one below it.
    ///
    /// The pen is not moved until the new line receives its first character.
    pub fn break_line(&mut self) {
        let current = self.current_line();
        let consumed = if self.config.font_size_line_height {
            self.config.font.size()
        } else {
            self.chars[current.range()]
                .iter()
                .map(|placed| placed.rect.height)
                .fold(0.0, f32::max)
        };
        let start_y = current.start_y + consumed + self.config.line_spacing;
        self.lines.push(Line::new(self.chars.len(), start_y));
    }

    /// Remove the most recently placed character.
    ///
    /// A baseline shift caused by the character is undone and the pen moves
    /// back to where it was before the character was placed. When the
    /// character started a line other than the first, that line is deleted
    /// along with any empty lines opened after it, and the pen moves to the
    /// end of the line that becomes current. Line breaks that follow any
    /// other character are kept. Does nothing when no characters are placed.
    pub fn remove_last(&mut self) {
        let Some(removed) = self.chars.pop() else {
            return;
        };
        self.placements.pop();
        let index = self.chars.len();

        let line = &mut self.lines[removed.line];
        if let Some(adjustment) = line.adjustments.pop_owned_by(index) {
            let start = line.range.start;
            for placed in &mut self.chars[start..start + adjustment.affected] {
                placed.rect.top -= adjustment.delta;
            }
            line.baseline = Some(adjustment.previous_baseline);
        }
        line.range.end -= 1;

        if line.is_empty() {
            line.baseline = None;
            line.adjustments.clear();
        }

        if removed.line_start && removed.line > 0 {
            tracing::debug!(
                "removed line {} and {} empty lines after it",
                removed.line,
                self.lines.len() - removed.line - 1
            );
            self.lines.truncate(removed.line);
            self.pen_x = self.line_end(removed.line - 1);
        } else {
            // Empty lines after the removed character now start at its index.
            for later in &mut self.lines[removed.line + 1..] {
                later.range = index..index;
            }
            self.pen_x = if removed.line_start {
                0.0
            } else {
                self.placements[index - 1].pen_after
            };
        }

        self.bounds = self.rescan_bounds();
    }

    /// Pen position after the last character of a line, 0 for an empty line.
    fn line_end(&self, line_index: usize) -> f32 {
        let line = &self.lines[line_index];
        if line.is_empty() {
            0.0
        } else {
            self.placements[line.range.end - 1].pen_after
        }
    }

    /// Clear all content. Configuration is kept.
    pub fn reset(&mut self) {
        self.lines.clear();
        self.lines.push(Line::new(0, 0.0));
        self.chars.clear();
        self.placements.clear();
        self.pen_x = 0.0;
        self.bounds = Bounds::ZERO;
    }

    fn rescan_bounds(&self) -> Bounds {
        let width = self
            .placements
            .iter()
            .map(|p| p.pen_after)
            .fold(0.0, f32::max);
        let height = self
            .chars
            .iter()
            .map(|placed| placed.rect.bottom())
            .fold(0.0, f32::max);
        Bounds::new(width, height)
    }
}

impl<P: ?Sized> GlyphLayout<'_, P> {
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Baseline-of-record of the last line.
    ///
    /// Only defined while at most one line has content; `Ok(None)` when the
    /// last line is still empty.
    pub fn current_line_baseline(&self) -> Result<Option<f32>> {
        let filled = self.lines.iter().filter(|line| !line.is_empty()).count();
        if filled > 1 {
            return Err(LayoutError::AmbiguousBaseline { lines: filled });
        }
        Ok(self.current_line().baseline)
    }

    pub fn baseline_of_line(&self, index: usize) -> Option<f32> {
        self.lines.get(index)?.baseline
    }

    /// All placed characters in insertion order.
    pub fn characters(&self) -> &[PositionedChar] {
        &self.chars
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Horizontal pen position.
    pub fn cursor(&self) -> f32 {
        self.pen_x
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn cell_width(&self) -> Option<f32> {
        self.cell_width
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    fn current_line(&self) -> &Line {
        &self.lines[self.lines.len() - 1]
    }
}
