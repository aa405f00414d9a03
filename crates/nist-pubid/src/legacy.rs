//! Legacy code rewriting
//!
//! Older catalog records use series tokens that PubID has since replaced
//! (`NISTIR`, `NBS LCIRC`, `FIPS PUB`, ...). Before the grammar sees a code,
//! every rule of an ordered `{old → new}` table is applied as a literal,
//! global substitution. Rules are chained: each one runs on the output of
//! the previous ones.
//!
//! The bundled table lives in `data/legacy_codes.toml`:
//!
//! ```toml
//! [[rule]]
//! from = "NISTIR"
//! to = "NIST IR"
//! ```

use std::path::Path;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::LegacyCodesError;

const BUNDLED_LEGACY_CODES: &str = include_str!("../data/legacy_codes.toml");

lazy_static! {
    static ref BUILTIN: LegacyCodes = LegacyCodes::from_toml_str(BUNDLED_LEGACY_CODES)
        .expect("bundled legacy code table is valid");
}

/// One `{old → new}` substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct LegacyRule {
    pub from: String,
    pub to: String,
}

/// Ordered table of legacy token substitutions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyCodes {
    #[serde(default, rename = "rule")]
    rules: Vec<LegacyRule>,
}

impl LegacyCodes {
    /// Table with no rules; rewriting is then the identity
    pub fn empty() -> Self {
        Self::default()
    }

    /// The table bundled with the crate, parsed once per process
    pub fn builtin() -> &'static LegacyCodes {
        &BUILTIN
    }

    /// Build a table from rules in application order
    pub fn from_rules(rules: Vec<LegacyRule>) -> Result<Self, LegacyCodesError> {
        if let Some(index) = rules.iter().position(|rule| rule.from.is_empty()) {
            return Err(LegacyCodesError::EmptyToken(index));
        }
        Ok(Self { rules })
    }

    /// Parse a table from TOML (`[[rule]] from = "..." to = "..."`)
    pub fn from_toml_str(content: &str) -> Result<Self, LegacyCodesError> {
        let table: LegacyCodes =
            toml::from_str(content).map_err(|e| LegacyCodesError::Parse(e.to_string()))?;
        Self::from_rules(table.rules)
    }

    /// Load a table from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LegacyCodesError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| LegacyCodesError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Append the rules of `other` after this table's rules
    pub fn extended_with(&self, other: &LegacyCodes) -> LegacyCodes {
        let mut rules = self.rules.clone();
        rules.extend(other.rules.iter().cloned());
        LegacyCodes { rules }
    }

    pub fn rules(&self) -> &[LegacyRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order to `code`
    pub fn rewrite(&self, code: &str) -> String {
        let mut result = code.to_string();
        for rule in &self.rules {
            if result.contains(rule.from.as_str()) {
                let rewritten = result.replace(rule.from.as_str(), &rule.to);
                tracing::trace!(from = %rule.from, to = %rule.to, "rewrote legacy token");
                result = rewritten;
            }
        }
        if result != code {
            tracing::debug!(original = code, rewritten = %result, "legacy code updated");
        }
        result
    }
}

/// Rewrite deprecated tokens with the bundled table
pub fn update_old_code(code: &str) -> String {
    LegacyCodes::builtin().rewrite(code)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn update_old_code_ffi(code: String) -> String {
    update_old_code(&code)
}
