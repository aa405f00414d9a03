//! Catalog records and how they compare with PubID
//!
//! A catalog is a list of publication records, each with the identifier the
//! catalog prints, its DOI suffix (`NIST.SP.800-53r5`) and a title. The DOI
//! is parsed as the source of truth; the printed identifier either already
//! matches the PubID short form or it does not.

use std::path::Path;

use nist_pubid::{Identifier, LegacyCodes, ParseError, Parser, Style};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// DOI prefix of NIST technical publications
pub const DOI_PREFIX: &str = "10.6028/";

/// Marker written in place of the short form when a DOI does not parse
pub const PARSE_ERROR: &str = "parse error";

/// Marker written in place of the `mr` form when a DOI does not parse
pub const PARSE_ERROR_MR: &str = "parse_error";

/// Known typos in printed identifiers: `(doi, wrong, right)`
const ID_CORRECTIONS: &[(&str, &str, &str)] = &[
    ("NBS.CIRC.12e2revjune", "13e", "12e"),
    ("NBS.CIRC.36e2", "46e", "36e"),
    ("NBS.HB.67suppJune1967", "1965", "1967"),
    ("NBS.HB.105-1r1990", "105-1-1990", "105-1r1990"),
];

/// One catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Identifier as printed by the catalog; the DOI stands in when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// DOI suffix without the `10.6028/` prefix
    pub doi: String,
    #[serde(default)]
    pub title: String,
}

impl CatalogEntry {
    pub fn new(doi: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: None,
            doi: doi.into(),
            title: title.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Printed identifier, or the DOI when the record has none
    pub fn printed_id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.doi)
    }

    /// Clean up a record as it comes out of a catalog export
    fn normalized(mut self) -> Self {
        self.doi = doi_suffix(&self.doi).to_string();
        self.title = normalize_title(&self.title, None);
        if let Some(id) = self.id.take() {
            let id = id.trim().trim_start_matches('/').to_string();
            self.id = Some(correct_id(&self.doi, id));
        }
        self
    }
}

/// Collapse line breaks and runs of spaces; prepend a non-sorting prefix
/// such as `"The "` when given
pub fn normalize_title(title: &str, non_sort: Option<&str>) -> String {
    let content = squeeze(&title.replace('\n', " "));
    match non_sort {
        Some(prefix) => squeeze(&format!("{}{}", prefix, content)),
        None => content,
    }
}

fn squeeze(text: &str) -> String {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `https://doi.org/10.6028/NIST.SP.800-53r5` → `NIST.SP.800-53r5`
pub fn doi_suffix(doi: &str) -> &str {
    let doi = doi.trim();
    let doi = doi
        .strip_prefix("https://doi.org/")
        .or_else(|| doi.strip_prefix("http://doi.org/"))
        .unwrap_or(doi);
    doi.strip_prefix(DOI_PREFIX).unwrap_or(doi)
}

fn correct_id(doi: &str, id: String) -> String {
    for (known, wrong, right) in ID_CORRECTIONS {
        if doi == *known {
            return id.replacen(wrong, right, 1);
        }
    }
    if doi == "NIST.HB.150-10-1995" {
        if let Some(stem) = id.strip_suffix("150-10") {
            return format!("{}150-10-1995", stem);
        }
    }
    id
}

/// Status of one record: its DOI, title and what PubID makes of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRow {
    pub doi: String,
    pub title: String,
    #[serde(rename = "finalPubId")]
    pub final_pub_id: String,
    pub mr: String,
}

/// A loaded catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    legacy: LegacyCodes,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(CatalogEntry::normalized).collect(),
            legacy: LegacyCodes::builtin().clone(),
        }
    }

    /// Parse DOIs with a different legacy code table
    pub fn with_legacy_codes(mut self, legacy: LegacyCodes) -> Self {
        self.legacy = legacy;
        self
    }

    /// Load a JSON array of records
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self::new(entries))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(path = %path.display(), entries = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a record's DOI
    pub fn convert(&self, entry: &CatalogEntry) -> Result<Identifier, ParseError> {
        Parser::new(&self.legacy).parse(&entry.doi)
    }

    /// Whether the printed identifier already is the PubID short form.
    /// `None` when the DOI does not parse.
    fn complies(&self, entry: &CatalogEntry) -> Option<bool> {
        match self.convert(entry) {
            Ok(id) => Some(id.render(Style::Short) == entry.printed_id()),
            Err(err) => {
                tracing::debug!(doi = %entry.doi, error = %err, "DOI does not parse");
                None
            }
        }
    }

    /// Records whose printed identifier matches PubID
    pub fn comply_with_pubid(&self) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| self.complies(entry) == Some(true))
            .collect()
    }

    /// Records whose printed identifier differs from PubID, unparseable
    /// DOIs included
    pub fn different_with_pubid(&self) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| self.complies(entry) != Some(true))
            .collect()
    }

    /// Records whose DOI does not parse
    pub fn parse_fail_with_pubid(&self) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| self.convert(entry).is_err())
            .collect()
    }

    /// Lazily computed status of every record
    pub fn status(&self) -> impl Iterator<Item = StatusRow> + '_ {
        self.entries.iter().map(move |entry| match self.convert(entry) {
            Ok(id) => StatusRow {
                doi: entry.doi.clone(),
                title: entry.title.clone(),
                final_pub_id: id.render(Style::Short),
                mr: id.render(Style::Mr),
            },
            Err(_) => StatusRow {
                doi: entry.doi.clone(),
                title: entry.title.clone(),
                final_pub_id: PARSE_ERROR.to_string(),
                mr: PARSE_ERROR_MR.to_string(),
            },
        })
    }
}
