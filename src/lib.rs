//! # tab_override
//!
//! Make Tab and Shift+Tab indent and outdent text in plain-text editing
//! surfaces instead of moving focus.
//!
//! [`TabOverride`] bundles the current indentation unit with the set of
//! surfaces the override is enabled on. Hosts implement
//! [`EditableSurface`] for their widget, call [`TabOverride::handle_key`]
//! from their key handler and suppress the default action whenever it
//! returns [`KeyOutcome::Handled`].
//!
//! ```
//! use tab_override::{
//!     EditableSurface, Key, KeyEvent, MemorySurface, Modifiers, SelectionRange, TabOverride,
//! };
//!
//! let mut area =
//!     MemorySurface::new(1u64, "line1\nline2").with_selection(SelectionRange::new(0, 11));
//! let mut tabs = TabOverride::new();
//! tabs.enable(&area);
//!
//! let outcome = tabs.handle_key(&mut area, &KeyEvent::down(Key::Tab, Modifiers::NONE));
//! assert!(outcome.is_handled());
//! assert_eq!(area.value(), "\tline1\n\tline2");
//! assert_eq!(area.selection(), Some(SelectionRange::new(1, 13)));
//! ```

mod settings;

pub use indent_core::{
    IndentConfig, IndentDirection, IndentEdit, IndentUnit, LineEnding, MAX_INDENT_WIDTH,
    RawWidth, SelectionRange, indent, outdent,
};
pub use settings::{ConfigError, IndentSettings, Settings};
pub use surface::{
    EditableSurface, Key, KeyEvent, KeyOutcome, KeyPhase, MemorySurface, Modifiers,
    NormalizedSurface, SurfaceId, SurfaceKind,
};

use surface::KeyDispatcher;

/// Tab override state: the indentation unit and the enabled surfaces.
///
/// Each instance is independent; a host wanting one global unit keeps a
/// single `TabOverride` around.
#[derive(Clone, Debug, Default)]
pub struct TabOverride {
    config: IndentConfig,
    dispatcher: KeyDispatcher,
}

impl TabOverride {
    /// Tab unit, nothing enabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: IndentConfig) -> Self {
        Self {
            config,
            dispatcher: KeyDispatcher::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_config(settings.indent_config())
    }

    /// Enable the override on `surface`. Returns `true` if it was not
    /// enabled before; single-line surfaces are never enabled.
    pub fn enable<S: EditableSurface + ?Sized>(&mut self, surface: &S) -> bool {
        self.dispatcher.enable(surface)
    }

    pub fn enable_all<'a, S, I>(&mut self, surfaces: I) -> usize
    where
        S: EditableSurface + ?Sized + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        self.dispatcher.enable_all(surfaces)
    }

    /// Disable the override on `surface`. Returns `true` if it was enabled.
    pub fn disable<S: EditableSurface + ?Sized>(&mut self, surface: &S) -> bool {
        self.dispatcher.disable(surface)
    }

    pub fn disable_all<'a, S, I>(&mut self, surfaces: I) -> usize
    where
        S: EditableSurface + ?Sized + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        self.dispatcher.disable_all(surfaces)
    }

    pub fn is_enabled(&self, id: SurfaceId) -> bool {
        self.dispatcher.is_enabled(id)
    }

    /// The string inserted per indent level.
    pub fn indent_unit(&self) -> &IndentUnit {
        self.config.unit()
    }

    /// `0` for the tab unit, otherwise the number of spaces.
    pub fn tab_size(&self) -> usize {
        self.config.tab_size()
    }

    /// Change the indentation unit. See [`IndentConfig::set_width`].
    pub fn set_indent_width(&mut self, width: Option<i64>) -> bool {
        self.config.set_width(width)
    }

    pub fn config(&self) -> &IndentConfig {
        &self.config
    }

    pub fn handle_key<S: EditableSurface + ?Sized>(
        &self,
        surface: &mut S,
        event: &KeyEvent,
    ) -> KeyOutcome {
        self.dispatcher.handle_key(surface, event, self.config.unit())
    }
}
