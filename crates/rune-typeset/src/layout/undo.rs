//! Baseline adjustment log.
//!
//! Placing a glyph whose baseline sits lower than the line's baseline-of-record
//! pushes every glyph already on the line down. Each such shift is recorded
//! here so removing that glyph can put the line back exactly as it was.

/// One retroactive vertical shift applied to a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineAdjustment {
    /// Amount added to the `top` of each affected character.
    pub delta: f32,
    /// Number of characters on the line that were shifted (the line's
    /// leading characters, in order).
    pub affected: usize,
    /// Arena index of the character whose placement caused the shift.
    pub owner: usize,
    /// Baseline-of-record before the shift.
    pub previous_baseline: f32,
}

/// Chronological stack of shifts applied to a single line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjustmentLog {
    entries: Vec<BaselineAdjustment>,
}

impl AdjustmentLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, adjustment: BaselineAdjustment) {
        self.entries.push(adjustment);
    }

    /// Pop the most recent shift if it was caused by the character at `owner`.
    pub fn pop_owned_by(&mut self, owner: usize) -> Option<BaselineAdjustment> {
        match self.entries.last() {
            Some(top) if top.owner == owner => self.entries.pop(),
            _ => None,
        }
    }

    pub fn last(&self) -> Option<&BaselineAdjustment> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[BaselineAdjustment] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjustment(owner: usize, delta: f32) -> BaselineAdjustment {
        BaselineAdjustment {
            delta,
            affected: owner,
            owner,
            previous_baseline: 0.0,
        }
    }

    #[test]
    fn pops_only_for_matching_owner() {
        let mut log = AdjustmentLog::new();
        log.push(adjustment(1, 2.0));
        log.push(adjustment(3, 4.0));

        assert!(log.pop_owned_by(1).is_none());
        assert_eq!(log.len(), 2);

        let popped = log.pop_owned_by(3).unwrap();
        assert_eq!(popped.delta, 4.0);
        assert_eq!(log.last().map(|a| a.owner), Some(1));
    }

    #[test]
    fn empty_log_pops_nothing() {
        let mut log = AdjustmentLog::new();
        assert!(log.pop_owned_by(0).is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn clear_drops_history() {
        let mut log = AdjustmentLog::new();
        log.push(adjustment(2, 1.0));
        log.clear();
        assert!(log.entries().is_empty());
    }
}
