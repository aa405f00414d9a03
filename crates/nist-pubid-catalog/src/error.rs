//! Error types for catalog and configuration loading

use nist_pubid::LegacyCodesError;

/// Errors that can occur when loading a catalog file
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("JSON parse error: {0}")]
    Parse(String),
}

/// Errors that can occur when loading the CLI configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("legacy code table: {0}")]
    LegacyCodes(#[from] LegacyCodesError),
}
