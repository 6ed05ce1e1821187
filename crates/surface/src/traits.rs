//! Editing surface trait: the capability set the dispatcher consumes.
//!
//! This trait provides a widget-agnostic abstraction over a live text input,
//! allowing real widgets, in-memory surfaces and adapters (such as
//! [`NormalizedSurface`](crate::NormalizedSurface)) to be swapped freely.
//!
//! # Design Principles
//!
//! - Offsets are UTF-8 byte offsets, the same convention `indent_core` uses
//! - Integration layers convert host selection objects (ranges, caret +
//!   anchor pairs, character indices) to [`SelectionRange`] at this boundary
//! - A surface that cannot report its selection returns `None`, and the
//!   dispatcher leaves the key to the host

use crate::id::SurfaceId;
use indent_core::SelectionRange;
use std::borrow::Cow;

/// What kind of text control a surface is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// Multi-line control. The only kind Tab override can be enabled on.
    #[default]
    TextArea,
    /// Single-line input, where Tab keeps moving focus.
    SingleLine,
}

/// A live editing surface.
///
/// # Integration Pattern
///
/// ```ignore
/// impl EditableSurface for MyTextArea {
///     fn id(&self) -> SurfaceId { SurfaceId::from_raw(self.widget_id) }
///     fn text(&self) -> Cow<'_, str> { Cow::Borrowed(&self.value) }
///     // ...
/// }
/// ```
pub trait EditableSurface {
    /// Stable identity used for enable/disable bookkeeping.
    fn id(&self) -> SurfaceId;

    fn kind(&self) -> SurfaceKind {
        SurfaceKind::TextArea
    }

    /// Current text.
    fn text(&self) -> Cow<'_, str>;

    /// Replace the whole text.
    ///
    /// Widgets may move the caret or reset their scroll position as a side
    /// effect; callers restore both afterwards.
    fn set_text(&mut self, text: String);

    /// Current selection, or `None` if the surface cannot report one.
    fn selection(&self) -> Option<SelectionRange>;

    fn set_selection(&mut self, selection: SelectionRange);

    /// Vertical scroll offset in px.
    fn scroll_offset(&self) -> f32;

    fn set_scroll_offset(&mut self, offset: f32);
}

impl<S: EditableSurface + ?Sized> EditableSurface for &mut S {
    #[inline]
    fn id(&self) -> SurfaceId {
        (**self).id()
    }

    #[inline]
    fn kind(&self) -> SurfaceKind {
        (**self).kind()
    }

    #[inline]
    fn text(&self) -> Cow<'_, str> {
        (**self).text()
    }

    #[inline]
    fn set_text(&mut self, text: String) {
        (**self).set_text(text)
    }

    #[inline]
    fn selection(&self) -> Option<SelectionRange> {
        (**self).selection()
    }

    #[inline]
    fn set_selection(&mut self, selection: SelectionRange) {
        (**self).set_selection(selection)
    }

    #[inline]
    fn scroll_offset(&self) -> f32 {
        (**self).scroll_offset()
    }

    #[inline]
    fn set_scroll_offset(&mut self, offset: f32) {
        (**self).set_scroll_offset(offset)
    }
}
