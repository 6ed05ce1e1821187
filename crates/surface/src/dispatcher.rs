//! Tab key dispatch.
//!
//! The dispatcher owns the set of surfaces Tab override is enabled on and
//! runs one read-compute-write cycle per indent key event.

use crate::id::SurfaceId;
use crate::key::{KeyEvent, KeyOutcome, KeyPhase};
use crate::traits::{EditableSurface, SurfaceKind};
use indent_core::{IndentDirection, IndentUnit, apply};
use std::collections::HashSet;

/// Routes Tab/Shift+Tab on enabled surfaces to the indent engine.
///
/// Enabling and disabling are idempotent: the enabled set is keyed by
/// [`SurfaceId`], so repeating either call changes nothing.
///
/// # Example
///
/// ```
/// use indent_core::{IndentUnit, SelectionRange};
/// use surface::{EditableSurface, Key, KeyDispatcher, KeyEvent, MemorySurface, Modifiers};
///
/// let mut area = MemorySurface::new(1u64, "abc").with_selection(SelectionRange::caret(1));
/// let mut dispatcher = KeyDispatcher::new();
/// assert!(dispatcher.enable(&area));
/// assert!(!dispatcher.enable(&area));
///
/// let tab = KeyEvent::down(Key::Tab, Modifiers::NONE);
/// let outcome = dispatcher.handle_key(&mut area, &tab, &IndentUnit::tab());
/// assert!(outcome.is_handled());
/// assert_eq!(area.value(), "a\tbc");
/// assert_eq!(area.selection(), Some(SelectionRange::caret(2)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct KeyDispatcher {
    enabled: HashSet<SurfaceId>,
}

impl KeyDispatcher {
    pub fn new() -> Self {
        Self {
            enabled: HashSet::new(),
        }
    }

    /// Enable Tab override on `surface`.
    ///
    /// Only [`SurfaceKind::TextArea`] surfaces can be enabled. Returns `true`
    /// if the surface was not enabled before.
    pub fn enable<S: EditableSurface + ?Sized>(&mut self, surface: &S) -> bool {
        let id = surface.id();
        if surface.kind() != SurfaceKind::TextArea {
            log::debug!(
                target: "surface::dispatcher",
                "not enabling {id:?}: {:?} surfaces keep default Tab handling",
                surface.kind()
            );
            return false;
        }
        let changed = self.enabled.insert(id);
        if changed {
            log::debug!(target: "surface::dispatcher", "enabled {id:?}");
        }
        changed
    }

    /// Enable every surface in `surfaces`; returns how many were newly enabled.
    pub fn enable_all<'a, S, I>(&mut self, surfaces: I) -> usize
    where
        S: EditableSurface + ?Sized + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        surfaces
            .into_iter()
            .filter(|surface| self.enable(*surface))
            .count()
    }

    /// Disable Tab override on `surface`. Returns `true` if it was enabled.
    pub fn disable<S: EditableSurface + ?Sized>(&mut self, surface: &S) -> bool {
        self.disable_id(surface.id())
    }

    /// Disable by identity, for hosts that no longer hold the surface.
    pub fn disable_id(&mut self, id: SurfaceId) -> bool {
        let changed = self.enabled.remove(&id);
        if changed {
            log::debug!(target: "surface::dispatcher", "disabled {id:?}");
        }
        changed
    }

    /// Disable every surface in `surfaces`; returns how many were enabled.
    pub fn disable_all<'a, S, I>(&mut self, surfaces: I) -> usize
    where
        S: EditableSurface + ?Sized + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        surfaces
            .into_iter()
            .filter(|surface| self.disable(*surface))
            .count()
    }

    pub fn is_enabled(&self, id: SurfaceId) -> bool {
        self.enabled.contains(&id)
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled.len()
    }

    /// Disable every surface at once.
    pub fn clear(&mut self) {
        self.enabled.clear();
    }

    /// Handle one key event for `surface`.
    ///
    /// Tab key-down reads text, selection and scroll offset, indents (or
    /// outdents with shift), writes the result back and restores the scroll
    /// offset. Tab key-press is only suppressed. Anything else, any surface
    /// that is not enabled, and any surface without a selection is
    /// [`KeyOutcome::Ignored`].
    pub fn handle_key<S: EditableSurface + ?Sized>(
        &self,
        surface: &mut S,
        event: &KeyEvent,
        unit: &IndentUnit,
    ) -> KeyOutcome {
        let id = surface.id();
        if !event.is_indent_key() || !self.is_enabled(id) {
            return KeyOutcome::Ignored;
        }

        if event.phase == KeyPhase::Press {
            return KeyOutcome::Handled;
        }

        let Some(selection) = surface.selection() else {
            log::debug!(
                target: "surface::dispatcher",
                "{id:?} cannot report a selection; leaving Tab to the host"
            );
            return KeyOutcome::Ignored;
        };

        let scroll = surface.scroll_offset();
        let direction = IndentDirection::from_shift(event.modifiers.shift);
        let edit = apply(direction, &surface.text(), selection, unit);

        if edit.is_noop() {
            log::trace!(target: "surface::dispatcher", "{id:?}: nothing to outdent");
            return KeyOutcome::Handled;
        }

        let lines_changed = edit.lines_changed;
        surface.set_text(edit.text);
        surface.set_selection(edit.selection);
        surface.set_scroll_offset(scroll);

        log::trace!(
            target: "surface::dispatcher",
            "{id:?}: {direction:?} {lines_changed} lines, selection now {:?}",
            edit.selection
        );
        KeyOutcome::Handled
    }
}
