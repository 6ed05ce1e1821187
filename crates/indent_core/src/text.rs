//! UTF-8 text utilities for line-oriented editing.
//!
//! This module provides the low-level helpers the engine is built on:
//! char-boundary clamping, line boundary lookup, and newline normalization
//! with offset translation for hosts that store CRLF or CR line endings.

use memchr::{memchr, memchr_iter, memrchr};
use std::borrow::Cow;

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// If `index` is beyond the string length, it is clamped to `s.len()`.
/// If `index` falls in the middle of a multi-byte character, it is
/// adjusted backwards to the start of that character.
///
/// # Examples
///
/// ```
/// use indent_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 0), 0); // 'a'
/// assert_eq!(clamp_to_char_boundary(s, 1), 1); // start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 2), 1); // mid '€' -> start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 4), 4); // 'b'
/// assert_eq!(clamp_to_char_boundary(s, 100), 5); // beyond end -> len
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Byte offset of the first character of the line containing `offset`.
///
/// An offset sitting right after a `\n` is already a line start.
///
/// # Examples
///
/// ```
/// use indent_core::line_start_at;
///
/// let s = "ab\ncd";
/// assert_eq!(line_start_at(s, 1), 0);
/// assert_eq!(line_start_at(s, 3), 3);
/// assert_eq!(line_start_at(s, 5), 3);
/// ```
pub fn line_start_at(s: &str, offset: usize) -> usize {
    let offset = offset.min(s.len());
    memrchr(b'\n', &s.as_bytes()[..offset])
        .map(|nl| nl + 1)
        .unwrap_or(0)
}

/// Byte offset of the `\n` terminating the line containing `offset`, or
/// `s.len()` on the last line.
///
/// An offset sitting on a `\n` is already a line end.
///
/// # Examples
///
/// ```
/// use indent_core::line_end_at;
///
/// let s = "ab\ncd";
/// assert_eq!(line_end_at(s, 0), 2);
/// assert_eq!(line_end_at(s, 2), 2);
/// assert_eq!(line_end_at(s, 3), 5);
/// ```
pub fn line_end_at(s: &str, offset: usize) -> usize {
    let offset = offset.min(s.len());
    memchr(b'\n', &s.as_bytes()[offset..])
        .map(|nl| offset + nl)
        .unwrap_or(s.len())
}

/// Normalize newlines in a string (CRLF/CR → LF).
///
/// Returns a `Cow::Borrowed` if no normalization is needed (fast path),
/// or a `Cow::Owned` with all line endings as LF.
///
/// # Examples
///
/// ```
/// use indent_core::normalize_newlines;
///
/// assert_eq!(normalize_newlines("hello\nworld"), "hello\nworld");
/// assert_eq!(normalize_newlines("hello\r\nworld"), "hello\nworld");
/// assert_eq!(normalize_newlines("hello\rworld"), "hello\nworld");
/// ```
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut it = s.chars().peekable();
    while let Some(ch) = it.next() {
        match ch {
            '\r' => {
                if it.peek() == Some(&'\n') {
                    let _ = it.next();
                }
                out.push('\n');
            }
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Line ending convention of a host text value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    /// Detect the convention used by `s`.
    ///
    /// Any CRLF pair wins; otherwise a lone CR selects [`LineEnding::Cr`].
    pub fn detect(s: &str) -> Self {
        if s.contains("\r\n") {
            LineEnding::CrLf
        } else if s.contains('\r') {
            LineEnding::Cr
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

/// Re-expand LF line breaks of a normalized string to `ending`.
///
/// # Examples
///
/// ```
/// use indent_core::{LineEnding, expand_newlines};
///
/// assert_eq!(expand_newlines("a\nb", LineEnding::CrLf), "a\r\nb");
/// assert_eq!(expand_newlines("a\nb", LineEnding::Lf), "a\nb");
/// ```
pub fn expand_newlines(s: &str, ending: LineEnding) -> Cow<'_, str> {
    if ending == LineEnding::Lf || !s.contains('\n') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace('\n', ending.as_str()))
}

/// Translate a byte offset in `raw` to the matching offset in
/// `normalize_newlines(raw)`.
///
/// An offset between the CR and LF of a pair maps to the normalized line
/// break itself.
pub fn raw_to_normalized_offset(raw: &str, offset: usize) -> usize {
    let offset = clamp_to_char_boundary(raw, offset);
    let bytes = raw.as_bytes();
    let collapsed = memchr_iter(b'\r', &bytes[..offset])
        .filter(|&cr| bytes.get(cr + 1) == Some(&b'\n'))
        .count();
    offset - collapsed
}

/// Translate a byte offset in `normalize_newlines(raw)` back to `raw`.
///
/// Offsets past the end clamp to `raw.len()`.
pub fn normalized_to_raw_offset(raw: &str, offset: usize) -> usize {
    let bytes = raw.as_bytes();
    let mut extra = 0usize;
    for cr in memchr_iter(b'\r', bytes) {
        if bytes.get(cr + 1) != Some(&b'\n') {
            continue;
        }
        // Position of this pair's line break in the normalized text.
        if cr - extra >= offset {
            break;
        }
        extra += 1;
    }
    clamp_to_char_boundary(raw, offset.saturating_add(extra))
}
