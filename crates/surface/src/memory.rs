//! In-memory editing surface.
//!
//! This surface performs no layout or rendering. It behaves like a plain
//! `<textarea>` value holder: replacing the text collapses the selection to
//! the end and scrolls back to the top, which is exactly the behavior the
//! dispatcher has to undo after every edit.

use crate::id::SurfaceId;
use crate::traits::{EditableSurface, SurfaceKind};
use indent_core::{SelectionRange, clamp_to_char_boundary};
use std::borrow::Cow;

/// A text surface held entirely in memory.
///
/// # Example
///
/// ```
/// use surface::{EditableSurface, MemorySurface};
/// use indent_core::SelectionRange;
///
/// let mut area = MemorySurface::new(1u64, "Hello");
/// area.set_selection(SelectionRange::new(1, 3));
/// assert_eq!(area.selection(), Some(SelectionRange::new(1, 3)));
///
/// area.set_text("Hi".to_string());
/// assert_eq!(area.selection(), Some(SelectionRange::caret(2)));
/// ```
#[derive(Clone, Debug)]
pub struct MemorySurface {
    id: SurfaceId,
    kind: SurfaceKind,

    /// The current text value.
    value: String,

    /// Monotonic revision counter, incremented on any text change.
    value_rev: u64,

    /// `None` when the surface has no selection capability.
    selection: Option<SelectionRange>,

    /// Vertical scroll offset in px.
    scroll_y: f32,
}

impl MemorySurface {
    /// A multi-line surface with the caret at the end of `value`.
    pub fn new(id: impl Into<SurfaceId>, value: impl Into<String>) -> Self {
        let value = value.into();
        let caret = clamp_to_char_boundary(&value, value.len());
        Self {
            id: id.into(),
            kind: SurfaceKind::TextArea,
            value,
            value_rev: 0,
            selection: Some(SelectionRange::caret(caret)),
            scroll_y: 0.0,
        }
    }

    /// A single-line surface; Tab override refuses to enable on it.
    pub fn single_line(id: impl Into<SurfaceId>, value: impl Into<String>) -> Self {
        Self {
            kind: SurfaceKind::SingleLine,
            ..Self::new(id, value)
        }
    }

    /// A surface that cannot report its selection.
    pub fn without_selection(id: impl Into<SurfaceId>, value: impl Into<String>) -> Self {
        Self {
            selection: None,
            ..Self::new(id, value)
        }
    }

    /// Builder-style selection setter.
    pub fn with_selection(mut self, selection: SelectionRange) -> Self {
        self.set_selection(selection);
        self
    }

    /// Builder-style scroll setter.
    pub fn with_scroll_offset(mut self, offset: f32) -> Self {
        self.set_scroll_offset(offset);
        self
    }

    /// Returns the stored value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Monotonic revision counter for the value.
    ///
    /// Increments on any text change. Useful for cache invalidation.
    pub fn value_revision(&self) -> u64 {
        self.value_rev
    }

    pub fn supports_selection(&self) -> bool {
        self.selection.is_some()
    }
}

impl EditableSurface for MemorySurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn kind(&self) -> SurfaceKind {
        self.kind
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.value)
    }

    fn set_text(&mut self, text: String) {
        self.value = text;
        self.value_rev = self.value_rev.wrapping_add(1);
        if self.selection.is_some() {
            self.selection = Some(SelectionRange::caret(self.value.len()));
        }
        self.scroll_y = 0.0;
    }

    fn selection(&self) -> Option<SelectionRange> {
        self.selection
    }

    fn set_selection(&mut self, selection: SelectionRange) {
        if self.selection.is_some() {
            self.selection = Some(selection.clamped(&self.value));
        }
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll_y
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_y = offset.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_has_caret_at_end() {
        let area = MemorySurface::new(1u64, "a€");
        assert_eq!(area.selection(), Some(SelectionRange::caret("a€".len())));
        assert_eq!(area.kind(), SurfaceKind::TextArea);
    }

    #[test]
    fn set_text_bumps_revision_and_resets_view() {
        let mut area = MemorySurface::new(1u64, "abc").with_scroll_offset(40.0);
        area.set_selection(SelectionRange::new(0, 1));

        area.set_text("xy".to_string());
        assert_eq!(area.value(), "xy");
        assert_eq!(area.value_revision(), 1);
        assert_eq!(area.selection(), Some(SelectionRange::caret(2)));
        assert_eq!(area.scroll_offset(), 0.0);
    }

    #[test]
    fn set_selection_clamps_to_char_boundaries() {
        let mut area = MemorySurface::new(1u64, "€");
        area.set_selection(SelectionRange::new(1, 9));
        assert_eq!(area.selection(), Some(SelectionRange::new(0, 3)));
    }

    #[test]
    fn surface_without_selection_stays_without() {
        let mut area = MemorySurface::without_selection(1u64, "abc");
        area.set_selection(SelectionRange::caret(1));
        area.set_text("abcd".to_string());
        assert_eq!(area.selection(), None);
        assert!(!area.supports_selection());
    }

    #[test]
    fn negative_scroll_is_clamped() {
        let mut area = MemorySurface::new(1u64, "");
        area.set_scroll_offset(-5.0);
        assert_eq!(area.scroll_offset(), 0.0);
    }

    #[test]
    fn single_line_surface_reports_kind() {
        let field = MemorySurface::single_line(2u64, "name");
        assert_eq!(field.kind(), SurfaceKind::SingleLine);
        assert_eq!(field.id(), SurfaceId::from_raw(2));
    }
}
