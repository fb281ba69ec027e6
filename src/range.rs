//! Codepoint range value type.

/// A (start, end) pair of codepoint offsets into a widget's text buffer.
///
/// Empty when `start == end`. The end offset is exclusive. A range is a
/// plain value copied by the caller; nothing owns it beyond the call that
/// produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CharRange {
    pub start: usize,
    pub end: usize,
}

impl CharRange {
    /// Create a new range.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create an empty range at a position.
    #[must_use]
    pub fn empty_at(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of codepoints covered.
    #[must_use]
    pub fn len(&self) -> usize {
        let norm = self.normalized();
        norm.end - norm.start
    }

    /// Get normalized (start <= end) range.
    #[must_use]
    pub fn normalized(&self) -> Self {
        if self.start <= self.end {
            *self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }

    /// Check if a position is within the range (end exclusive).
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        let norm = self.normalized();
        pos >= norm.start && pos < norm.end
    }

    /// Check if two ranges overlap.
    ///
    /// Empty ranges mark no text, so they intersect nothing.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        !a.is_empty() && !b.is_empty() && a.start < b.end && b.start < a.end
    }

    /// Normalize and clamp both offsets to `[0, max]`.
    #[must_use]
    pub fn clamped(&self, max: usize) -> Self {
        let norm = self.normalized();
        Self {
            start: norm.start.min(max),
            end: norm.end.min(max),
        }
    }

    /// Shift both offsets right by `amount`.
    #[must_use]
    pub fn shifted(&self, amount: usize) -> Self {
        Self {
            start: self.start + amount,
            end: self.end + amount,
        }
    }
}
