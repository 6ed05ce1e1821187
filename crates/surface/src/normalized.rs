//! Line-ending adapter for hosts that store CRLF or CR text.
//!
//! The engine only understands `\n`. [`NormalizedSurface`] presents any
//! surface as LF-only, translating selection offsets on the way in and
//! re-expanding line breaks (and offsets) on the way out.

use crate::id::SurfaceId;
use crate::traits::{EditableSurface, SurfaceKind};
use indent_core::{
    LineEnding, SelectionRange, expand_newlines, normalize_newlines, normalized_to_raw_offset,
    raw_to_normalized_offset,
};
use std::borrow::Cow;

/// Presents a CRLF/CR surface as an LF-only one.
///
/// # Example
///
/// ```
/// use indent_core::{LineEnding, SelectionRange};
/// use surface::{EditableSurface, MemorySurface, NormalizedSurface};
///
/// let raw = MemorySurface::new(1u64, "a\r\nb").with_selection(SelectionRange::new(0, 4));
/// let mut area = NormalizedSurface::new(raw);
/// assert_eq!(area.line_ending(), LineEnding::CrLf);
/// assert_eq!(area.text(), "a\nb");
/// assert_eq!(area.selection(), Some(SelectionRange::new(0, 3)));
///
/// area.set_text("\ta\n\tb".to_string());
/// assert_eq!(area.inner().value(), "\ta\r\n\tb");
/// ```
#[derive(Clone, Debug)]
pub struct NormalizedSurface<S> {
    inner: S,
    ending: LineEnding,
}

impl<S: EditableSurface> NormalizedSurface<S> {
    /// Wrap `inner`, detecting its line ending from the current text.
    pub fn new(inner: S) -> Self {
        let ending = LineEnding::detect(&inner.text());
        Self { inner, ending }
    }

    /// Wrap `inner` with a known line ending, used whenever the text itself
    /// has no line breaks to detect from.
    pub fn with_line_ending(inner: S, ending: LineEnding) -> Self {
        Self { inner, ending }
    }

    /// Line ending written back by [`EditableSurface::set_text`].
    pub fn line_ending(&self) -> LineEnding {
        self.ending
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: EditableSurface> EditableSurface for NormalizedSurface<S> {
    fn id(&self) -> SurfaceId {
        self.inner.id()
    }

    fn kind(&self) -> SurfaceKind {
        self.inner.kind()
    }

    fn text(&self) -> Cow<'_, str> {
        match self.inner.text() {
            Cow::Borrowed(raw) => normalize_newlines(raw),
            Cow::Owned(raw) => Cow::Owned(normalize_newlines(&raw).into_owned()),
        }
    }

    fn set_text(&mut self, text: String) {
        let current = LineEnding::detect(&self.inner.text());
        if current != LineEnding::Lf {
            self.ending = current;
        }
        let raw = if self.ending == LineEnding::Lf {
            text
        } else {
            expand_newlines(&text, self.ending).into_owned()
        };
        self.inner.set_text(raw);
    }

    fn selection(&self) -> Option<SelectionRange> {
        let sel = self.inner.selection()?;
        let raw = self.inner.text();
        Some(SelectionRange::new(
            raw_to_normalized_offset(&raw, sel.start),
            raw_to_normalized_offset(&raw, sel.end),
        ))
    }

    fn set_selection(&mut self, selection: SelectionRange) {
        let raw_selection = {
            let raw = self.inner.text();
            SelectionRange::new(
                normalized_to_raw_offset(&raw, selection.start),
                normalized_to_raw_offset(&raw, selection.end),
            )
        };
        self.inner.set_selection(raw_selection);
    }

    fn scroll_offset(&self) -> f32 {
        self.inner.scroll_offset()
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.inner.set_scroll_offset(offset);
    }
}
