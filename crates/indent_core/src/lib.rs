//! # indent_core
//!
//! Selection-aware indent/outdent for plain-text editing surfaces.
//!
//! This crate provides the pieces a Tab-key override is built from:
//! - [`indent`] / [`outdent`]: pure functions computing the replacement text
//!   and the selection the user should see afterwards
//! - [`IndentUnit`] and [`IndentConfig`]: the string inserted per level and
//!   the configuration that owns it
//! - [`SelectionRange`]: a text selection with start/end byte offsets
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any widget toolkit or event loop
//! - Host-specific selection objects
//! - Platform line-ending conventions (text is `\n`-only here; see
//!   [`normalize_newlines`] and the offset translators for adapters)
//!
//! ## Example
//!
//! ```
//! use indent_core::{IndentConfig, SelectionRange, indent, outdent};
//!
//! let mut config = IndentConfig::new();
//! config.set_width(Some(2));
//!
//! let edit = indent("a\nb", SelectionRange::new(0, 3), config.unit());
//! assert_eq!(edit.text, "  a\n  b");
//!
//! let back = outdent(&edit.text, edit.selection, config.unit());
//! assert_eq!(back.text, "a\nb");
//! assert_eq!(back.selection, SelectionRange::new(0, 3));
//! ```

mod config;
mod engine;
mod selection;
mod text;
mod unit;

pub use config::{IndentConfig, MAX_INDENT_WIDTH, RawWidth};
pub use engine::{
    IndentDirection, IndentEdit, affected_region, apply, indent, line_starts, outdent,
};
pub use selection::SelectionRange;
pub use unit::IndentUnit;

// Re-export text utilities for adapters that translate host text into the
// `\n`-only form the engine works on.
pub use text::{
    LineEnding, clamp_to_char_boundary, expand_newlines, line_end_at, line_start_at,
    normalize_newlines, normalized_to_raw_offset, raw_to_normalized_offset,
};
