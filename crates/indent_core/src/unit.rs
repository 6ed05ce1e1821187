//! The indentation unit inserted or removed per Tab press.

use std::fmt;
use std::num::NonZeroUsize;

/// The literal string inserted by indent and removed by outdent.
///
/// Either a single tab character or a run of `N > 0` spaces. The unit is
/// always ASCII, so its byte length equals its character count.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndentUnit {
    text: String,
}

impl IndentUnit {
    /// The single tab character unit.
    pub fn tab() -> Self {
        Self {
            text: String::from("\t"),
        }
    }

    /// A unit of `width` spaces.
    pub fn spaces(width: NonZeroUsize) -> Self {
        Self {
            text: " ".repeat(width.get()),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte length of the unit.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`; units are non-empty by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn is_tab(&self) -> bool {
        self.text == "\t"
    }

    /// Configured width: `0` for the tab unit, `N` for `N` spaces.
    #[inline]
    pub fn width(&self) -> usize {
        if self.is_tab() { 0 } else { self.text.len() }
    }
}

impl Default for IndentUnit {
    fn default() -> Self {
        Self::tab()
    }
}

impl AsRef<str> for IndentUnit {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for IndentUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_tab() {
            f.write_str("tab")
        } else {
            write!(f, "{} spaces", self.text.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_unit_is_tab() {
        let unit = IndentUnit::default();
        assert_eq!(unit.as_str(), "\t");
        assert_eq!(unit.len(), 1);
        assert_eq!(unit.width(), 0);
    }

    #[test]
    fn space_unit_width() {
        let unit = IndentUnit::spaces(NonZeroUsize::new(4).unwrap());
        assert_eq!(unit.as_str(), "    ");
        assert_eq!(unit.width(), 4);
        assert!(!unit.is_tab());
        assert!(!unit.is_empty());
    }

    #[test]
    fn display_names_the_unit() {
        assert_eq!(IndentUnit::tab().to_string(), "tab");
        assert_eq!(
            IndentUnit::spaces(NonZeroUsize::new(2).unwrap()).to_string(),
            "2 spaces"
        );
    }
}
