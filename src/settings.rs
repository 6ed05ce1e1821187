//! TOML settings.
//!
//! ```toml
//! [indent]
//! width = 4
//! ```
//!
//! `width` accepts the same loosely typed values as [`RawWidth`]: `0`,
//! `false`, `""` or an absent key select the tab unit, positive whole
//! numbers select that many spaces. Any other value parses but keeps the
//! tab unit.

use indent_core::{IndentConfig, RawWidth};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read settings {}: {source}", path.display())
            }
            ConfigError::Parse(err) => write!(f, "failed to parse settings: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub indent: IndentSettings,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndentSettings {
    pub width: Option<RawWidth>,
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        log::debug!(
            target: "tab_override::settings",
            "loaded {}: indent width {:?}",
            path.display(),
            settings.indent.width
        );
        Ok(settings)
    }

    /// Build an [`IndentConfig`] from these settings.
    ///
    /// Widths the setter rejects leave the tab unit in place.
    pub fn indent_config(&self) -> IndentConfig {
        let mut config = IndentConfig::new();
        if let Some(width) = &self.indent.width {
            config.set_raw_width(width);
        }
        config
    }
}
