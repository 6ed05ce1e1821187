//! Indentation configuration.
//!
//! An [`IndentConfig`] owns the current [`IndentUnit`]. Independent configs
//! can coexist; hosts wanting one process-wide unit share a single instance.

use crate::unit::IndentUnit;
use std::num::NonZeroUsize;

/// Widest space unit accepted by the setters. Larger widths are rejected
/// like any other invalid width.
pub const MAX_INDENT_WIDTH: usize = 1024;

/// A loosely typed width as it appears in configuration files.
///
/// Falsy values (`false`, `""`, `0`) select the tab unit, positive whole
/// numbers select that many spaces, and anything else leaves the unit
/// unchanged. With the `serde` feature every value deserializes; shapes with
/// no width meaning (arrays, tables, dates) become [`RawWidth::Other`].
#[derive(Clone, Debug, PartialEq)]
pub enum RawWidth {
    Bool(bool),
    Number(i64),
    Float(f64),
    Text(String),
    Other,
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RawWidth {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawWidthVisitor)
    }
}

#[cfg(feature = "serde")]
struct RawWidthVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for RawWidthVisitor {
    type Value = RawWidth;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("an indent width")
    }

    fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<RawWidth, E> {
        Ok(RawWidth::Bool(v))
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<RawWidth, E> {
        Ok(RawWidth::Number(v))
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<RawWidth, E> {
        Ok(i64::try_from(v).map_or(RawWidth::Other, RawWidth::Number))
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<RawWidth, E> {
        Ok(RawWidth::Float(v))
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<RawWidth, E> {
        Ok(RawWidth::Text(v.to_owned()))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<RawWidth, E> {
        Ok(RawWidth::Other)
    }

    fn visit_seq<A: serde::de::SeqAccess<'de>>(self, mut seq: A) -> Result<RawWidth, A::Error> {
        while seq.next_element::<serde::de::IgnoredAny>()?.is_some() {}
        Ok(RawWidth::Other)
    }

    fn visit_map<A: serde::de::MapAccess<'de>>(self, mut map: A) -> Result<RawWidth, A::Error> {
        while map
            .next_entry::<serde::de::IgnoredAny, serde::de::IgnoredAny>()?
            .is_some()
        {}
        Ok(RawWidth::Other)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndentConfig {
    unit: IndentUnit,
}

impl IndentConfig {
    /// A config using the tab unit.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(unit: IndentUnit) -> Self {
        Self { unit }
    }

    /// The unit every indent/outdent call should use.
    #[inline]
    pub fn unit(&self) -> &IndentUnit {
        &self.unit
    }

    /// `0` when indenting with tabs, otherwise the number of spaces.
    #[inline]
    pub fn tab_size(&self) -> usize {
        self.unit.width()
    }

    /// Set the unit from a width.
    ///
    /// `None` or `Some(0)` selects the tab unit; a positive width selects
    /// that many spaces. Negative (or absurdly large) widths are ignored and
    /// the current unit is kept.
    ///
    /// Returns `true` if the width was accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use indent_core::IndentConfig;
    ///
    /// let mut config = IndentConfig::new();
    /// assert!(config.set_width(Some(4)));
    /// assert_eq!(config.unit().as_str(), "    ");
    ///
    /// assert!(!config.set_width(Some(-2)));
    /// assert_eq!(config.tab_size(), 4);
    ///
    /// assert!(config.set_width(None));
    /// assert_eq!(config.unit().as_str(), "\t");
    /// ```
    pub fn set_width(&mut self, width: Option<i64>) -> bool {
        let Some(width) = width.filter(|w| *w != 0) else {
            self.unit = IndentUnit::tab();
            return true;
        };

        let spaces = usize::try_from(width)
            .ok()
            .filter(|w| *w <= MAX_INDENT_WIDTH)
            .and_then(NonZeroUsize::new);
        match spaces {
            Some(spaces) => {
                self.unit = IndentUnit::spaces(spaces);
                true
            }
            None => {
                log::debug!(
                    target: "indent_core::config",
                    "ignoring indent width {width}; keeping {}",
                    self.unit
                );
                false
            }
        }
    }

    /// Set the unit from a configuration value. See [`RawWidth`].
    pub fn set_raw_width(&mut self, width: &RawWidth) -> bool {
        match width {
            RawWidth::Bool(false) => self.set_width(None),
            RawWidth::Number(n) => self.set_width(Some(*n)),
            RawWidth::Float(f) if f.is_finite() && f.fract() == 0.0 => {
                self.set_width(Some(*f as i64))
            }
            RawWidth::Text(s) if s.is_empty() => self.set_width(None),
            other => {
                log::debug!(
                    target: "indent_core::config",
                    "ignoring indent width {other:?}; keeping {}",
                    self.unit
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_tab() {
        let config = IndentConfig::new();
        assert_eq!(config.unit().as_str(), "\t");
        assert_eq!(config.tab_size(), 0);
    }

    #[test]
    fn zero_width_selects_tab() {
        let mut config = IndentConfig::new();
        config.set_width(Some(2));
        assert!(config.set_width(Some(0)));
        assert!(config.unit().is_tab());
    }

    #[test]
    fn negative_width_keeps_previous_unit() {
        let mut config = IndentConfig::new();
        config.set_width(Some(3));
        assert!(!config.set_width(Some(-1)));
        assert_eq!(config.unit().as_str(), "   ");
    }

    #[test]
    fn oversized_width_is_ignored() {
        let mut config = IndentConfig::new();
        assert!(!config.set_width(Some(MAX_INDENT_WIDTH as i64 + 1)));
        assert!(config.unit().is_tab());
        assert!(config.set_width(Some(MAX_INDENT_WIDTH as i64)));
        assert_eq!(config.tab_size(), MAX_INDENT_WIDTH);
    }

    #[test]
    fn raw_width_falsy_values_select_tab() {
        let mut config = IndentConfig::new();
        for raw in [
            RawWidth::Bool(false),
            RawWidth::Number(0),
            RawWidth::Text(String::new()),
        ] {
            config.set_width(Some(8));
            assert!(config.set_raw_width(&raw), "{raw:?}");
            assert!(config.unit().is_tab(), "{raw:?}");
        }
    }

    #[test]
    fn raw_width_non_numeric_is_ignored() {
        let mut config = IndentConfig::new();
        config.set_width(Some(2));
        assert!(!config.set_raw_width(&RawWidth::Bool(true)));
        assert!(!config.set_raw_width(&RawWidth::Text("wide".into())));
        assert!(!config.set_raw_width(&RawWidth::Float(2.5)));
        assert!(!config.set_raw_width(&RawWidth::Float(f64::NAN)));
        assert!(!config.set_raw_width(&RawWidth::Other));
        assert_eq!(config.tab_size(), 2);
    }

    #[test]
    fn raw_width_whole_floats_count_as_numbers() {
        let mut config = IndentConfig::new();
        assert!(config.set_raw_width(&RawWidth::Float(4.0)));
        assert_eq!(config.tab_size(), 4);
        assert!(config.set_raw_width(&RawWidth::Float(0.0)));
        assert!(config.unit().is_tab());
        assert!(!config.set_raw_width(&RawWidth::Float(-3.0)));
        assert!(config.unit().is_tab());
    }

    #[test]
    fn with_unit_starts_from_the_given_unit() {
        let unit = IndentUnit::spaces(NonZeroUsize::new(2).unwrap());
        let config = IndentConfig::with_unit(unit.clone());
        assert_eq!(config.unit(), &unit);
        assert_eq!(config.tab_size(), 2);
    }
}
