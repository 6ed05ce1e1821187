//! Minimal keyboard event model.
//!
//! Hosts translate their native events into [`KeyEvent`] before handing them
//! to the [`KeyDispatcher`](crate::KeyDispatcher). Only the Tab key matters
//! here; everything else is [`Key::Other`].

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Tab,
    Other,
}

/// Event phase.
///
/// Some hosts deliver a separate press (character) event after key-down and
/// move focus on it unless it is suppressed too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyPhase {
    Down,
    Press,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Cmd on macOS, Ctrl elsewhere.
    pub command: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        command: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// `true` if any modifier other than shift is held.
    #[inline]
    pub fn is_chorded(&self) -> bool {
        self.ctrl || self.alt || self.command
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub phase: KeyPhase,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn down(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            phase: KeyPhase::Down,
            modifiers,
        }
    }

    pub fn press(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            phase: KeyPhase::Press,
            modifiers,
        }
    }

    /// Plain or shifted Tab; the only events the dispatcher acts on.
    #[inline]
    pub fn is_indent_key(&self) -> bool {
        self.key == Key::Tab && !self.modifiers.is_chorded()
    }
}

/// What the host should do with the event after dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    /// The event was consumed; suppress the host's default action.
    Handled,
    /// Let the host run its default action (usually focus navigation).
    Ignored,
}

impl KeyOutcome {
    #[inline]
    pub fn is_handled(self) -> bool {
        self == KeyOutcome::Handled
    }
}
