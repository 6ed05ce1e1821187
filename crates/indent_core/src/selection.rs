//! Text selection representation.

use crate::text::clamp_to_char_boundary;

/// Represents a text selection as a byte range.
///
/// The range is always normalized such that `start <= end`.
/// Both `start` and `end` are byte offsets into a UTF-8 string. Engine
/// functions clamp incoming ranges with [`SelectionRange::clamped`] and always
/// return ranges that lie on character boundaries of the text they produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    /// Start byte offset of the selection (inclusive).
    pub start: usize,
    /// End byte offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range.
    ///
    /// The range is automatically normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A zero-width selection (a caret) at `offset`.
    #[inline]
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns `true` if the selection is empty (zero-width).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the selection in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp both bounds into `value`, snapping each to the preceding
    /// UTF-8 character boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use indent_core::SelectionRange;
    ///
    /// let s = "a€b"; // '€' is 3 bytes
    /// assert_eq!(SelectionRange::new(2, 99).clamped(s), SelectionRange::new(1, 5));
    /// ```
    #[inline]
    pub fn clamped(&self, value: &str) -> Self {
        Self::new(
            clamp_to_char_boundary(value, self.start),
            clamp_to_char_boundary(value, self.end),
        )
    }

    /// Returns the selected substring from the given value.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` are out of bounds or not on character boundaries.
    #[inline]
    pub fn slice<'a>(&self, value: &'a str) -> &'a str {
        &value[self.start..self.end]
    }
}

impl From<(usize, usize)> for SelectionRange {
    #[inline]
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_bounds_are_swapped() {
        let sel = SelectionRange::new(10, 5);
        assert_eq!((sel.start, sel.end), (5, 10));
        assert_eq!(sel.len(), 5);
        assert_eq!(sel, SelectionRange::from((5, 10)));
    }

    #[test]
    fn caret_is_empty() {
        assert!(SelectionRange::caret(3).is_empty());
        assert!(!SelectionRange::new(3, 5).is_empty());
    }

    #[test]
    fn slice_spans_a_line_break() {
        let text = "line1\nline2";
        assert_eq!(SelectionRange::new(3, 8).slice(text), "e1\nli");
    }

    #[test]
    fn clamped_snaps_into_text() {
        let text = "ab";
        assert_eq!(SelectionRange::new(1, 40).clamped(text), SelectionRange::new(1, 2));
        assert_eq!(SelectionRange::new(7, 9).clamped(text), SelectionRange::caret(2));
    }

    #[test]
    fn clamped_snaps_to_char_boundaries() {
        let text = "€€";
        assert_eq!(SelectionRange::new(1, 4).clamped(text), SelectionRange::new(0, 3));
    }
}
