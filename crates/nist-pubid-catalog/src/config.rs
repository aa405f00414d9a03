//! Configuration for the nist-pubid command line
//!
//! Read from `config.toml` under the user's config directory, e.g.
//! `~/.config/nist-pubid/config.toml`:
//!
//! ```toml
//! default_style = "long"
//! legacy_codes = "/path/to/extra_codes.toml"
//! ```

use std::path::{Path, PathBuf};

use nist_pubid::{LegacyCodes, Style};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PubidConfig {
    /// Extra legacy code table, applied after the bundled rules
    pub legacy_codes: Option<PathBuf>,
    /// Style used by `parse` when none is given
    pub default_style: Style,
}

impl Default for PubidConfig {
    fn default() -> Self {
        Self {
            legacy_codes: None,
            default_style: Style::Short,
        }
    }
}

impl PubidConfig {
    /// `<config dir>/nist-pubid/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nist-pubid").join("config.toml"))
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Load `explicit` when given; otherwise the default location if it
    /// exists, else the defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "using config file");
                Self::from_path(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Bundled legacy codes, extended with the configured table
    pub fn legacy_table(&self) -> Result<LegacyCodes, ConfigError> {
        let builtin = LegacyCodes::builtin();
        match &self.legacy_codes {
            Some(path) => {
                let extra = LegacyCodes::from_path(path)?;
                tracing::info!(path = %path.display(), rules = extra.len(), "loaded extra legacy codes");
                Ok(builtin.extended_with(&extra))
            }
            None => Ok(builtin.clone()),
        }
    }
}
