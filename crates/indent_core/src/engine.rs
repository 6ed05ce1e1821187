//! Selection-aware indent/outdent.
//!
//! Both operations are pure: they take the current text, a selection and an
//! [`IndentUnit`], and return the replacement text together with the
//! selection the user should see afterwards.
//!
//! A selection is *multi-line* when it is non-empty and contains a `\n`.
//! Multi-line operations act on every line of the affected region, i.e. the
//! selection widened to whole lines. Everything else acts at the selection
//! start only.

use crate::selection::SelectionRange;
use crate::text::{line_end_at, line_start_at};
use crate::unit::IndentUnit;
use memchr::{memchr, memchr_iter};
use std::ops::Range;

/// Which way a Tab press moves the affected lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndentDirection {
    Indent,
    Outdent,
}

impl IndentDirection {
    /// Shift+Tab outdents, plain Tab indents.
    #[inline]
    pub fn from_shift(shift: bool) -> Self {
        if shift {
            IndentDirection::Outdent
        } else {
            IndentDirection::Indent
        }
    }
}

/// Result of an indent or outdent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndentEdit {
    /// The full replacement text.
    pub text: String,
    /// Selection in `text` coordinates.
    pub selection: SelectionRange,
    /// Number of lines that gained or lost a unit. Zero for a no-op outdent.
    pub lines_changed: usize,
}

impl IndentEdit {
    fn unchanged(text: &str, selection: SelectionRange) -> Self {
        Self {
            text: text.to_owned(),
            selection,
            lines_changed: 0,
        }
    }

    /// `true` when the edit left text and selection untouched.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.lines_changed == 0
    }
}

/// Line-aligned span covered by a multi-line selection.
///
/// Returns `None` for single-line selections (including empty ones), which
/// the engine handles at the selection start only.
///
/// # Examples
///
/// ```
/// use indent_core::{SelectionRange, affected_region};
///
/// let text = "one\ntwo\nthree";
/// assert_eq!(affected_region(text, SelectionRange::new(1, 5)), Some(0..7));
/// assert_eq!(affected_region(text, SelectionRange::new(1, 2)), None);
/// ```
pub fn affected_region(text: &str, selection: SelectionRange) -> Option<Range<usize>> {
    let sel = selection.clamped(text);
    if sel.is_empty() || memchr(b'\n', sel.slice(text).as_bytes()).is_none() {
        return None;
    }
    Some(line_start_at(text, sel.start)..line_end_at(text, sel.end))
}

/// Offsets of the first character of every line inside `region`.
///
/// The region start is always yielded; every `\n` inside the region yields
/// the offset right after it.
pub fn line_starts(text: &str, region: Range<usize>) -> impl Iterator<Item = usize> + '_ {
    let first = region.start;
    std::iter::once(first).chain(
        memchr_iter(b'\n', &text.as_bytes()[region]).map(move |nl| first + nl + 1),
    )
}

/// Insert `unit` at the selection start, or at the start of every selected
/// line when the selection spans a line break.
///
/// # Examples
///
/// ```
/// use indent_core::{IndentUnit, SelectionRange, indent};
///
/// let edit = indent("line1\nline2", SelectionRange::new(0, 11), &IndentUnit::tab());
/// assert_eq!(edit.text, "\tline1\n\tline2");
/// assert_eq!(edit.selection, SelectionRange::new(1, 13));
/// ```
pub fn indent(text: &str, selection: SelectionRange, unit: &IndentUnit) -> IndentEdit {
    let sel = selection.clamped(text);
    let unit_str = unit.as_str();
    let unit_len = unit.len();

    let Some(region) = affected_region(text, sel) else {
        let mut out = String::with_capacity(text.len() + unit_len);
        out.push_str(&text[..sel.start]);
        out.push_str(unit_str);
        out.push_str(&text[sel.start..]);
        log::trace!(target: "indent_core::engine", "indent at {}", sel.start);
        return IndentEdit {
            text: out,
            selection: SelectionRange::new(sel.start + unit_len, sel.end + unit_len),
            lines_changed: 1,
        };
    };

    let starts: Vec<usize> = line_starts(text, region.clone()).collect();
    let mut out = String::with_capacity(text.len() + unit_len * starts.len());
    let mut copied = 0;
    for &at in &starts {
        out.push_str(&text[copied..at]);
        out.push_str(unit_str);
        copied = at;
    }
    out.push_str(&text[copied..]);

    log::trace!(
        target: "indent_core::engine",
        "indent {} lines in {region:?}",
        starts.len()
    );
    IndentEdit {
        text: out,
        selection: SelectionRange::new(
            sel.start + unit_len,
            sel.end + unit_len * starts.len(),
        ),
        lines_changed: starts.len(),
    }
}

/// Remove one leading `unit` from the selection start, or from every
/// selected line when the selection spans a line break.
///
/// Only exact copies of `unit` are removed; lines that do not start with
/// one are left alone. When nothing matches, text and selection are
/// returned unchanged.
///
/// Each removed prefix moves a selection bound back only by the part of the
/// prefix lying before that bound. A bound sitting at a line start, before
/// that line's prefix, therefore does not move: outdenting `"a\n\tb"` with
/// `0..2` keeps `0..2`, and a selection starting right at an indented line
/// keeps its start.
///
/// # Examples
///
/// ```
/// use indent_core::{IndentUnit, SelectionRange, outdent};
///
/// let edit = outdent("\thello", SelectionRange::caret(1), &IndentUnit::tab());
/// assert_eq!(edit.text, "hello");
/// assert_eq!(edit.selection, SelectionRange::caret(0));
///
/// let edit = outdent("hello", SelectionRange::caret(1), &IndentUnit::tab());
/// assert!(edit.is_noop());
/// ```
pub fn outdent(text: &str, selection: SelectionRange, unit: &IndentUnit) -> IndentEdit {
    let sel = selection.clamped(text);
    let unit_str = unit.as_str();
    let unit_len = unit.len();

    let removed: Vec<usize> = match affected_region(text, sel) {
        Some(region) => line_starts(text, region)
            .filter(|&at| text[at..].starts_with(unit_str))
            .collect(),
        None => sel
            .start
            .checked_sub(unit_len)
            .filter(|&at| text.get(at..sel.start) == Some(unit_str))
            .into_iter()
            .collect(),
    };

    if removed.is_empty() {
        log::trace!(target: "indent_core::engine", "outdent: nothing to remove");
        return IndentEdit::unchanged(text, sel);
    }

    let mut out = String::with_capacity(text.len() - unit_len * removed.len());
    let mut copied = 0;
    for &at in &removed {
        out.push_str(&text[copied..at]);
        copied = at + unit_len;
    }
    out.push_str(&text[copied..]);

    // Every removed prefix pulls an offset back by the part of it lying
    // before that offset.
    let map = |offset: usize| -> usize {
        let pulled: usize = removed
            .iter()
            .map(|&at| offset.saturating_sub(at).min(unit_len))
            .sum();
        offset - pulled
    };

    log::trace!(
        target: "indent_core::engine",
        "outdent {} lines from {sel:?}",
        removed.len()
    );
    IndentEdit {
        text: out,
        selection: SelectionRange::new(map(sel.start), map(sel.end)),
        lines_changed: removed.len(),
    }
}

/// Run [`indent`] or [`outdent`] depending on `direction`.
pub fn apply(
    direction: IndentDirection,
    text: &str,
    selection: SelectionRange,
    unit: &IndentUnit,
) -> IndentEdit {
    match direction {
        IndentDirection::Indent => indent(text, selection, unit),
        IndentDirection::Outdent => outdent(text, selection, unit),
    }
}
