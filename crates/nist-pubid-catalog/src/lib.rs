//! nist-pubid-catalog: NIST Technical Publications catalog checks
//!
//! Compares the identifiers printed in a catalog export with what PubID
//! derives from each record's DOI, and carries the configuration used by
//! the `nist-pubid` command line.

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::{doi_suffix, normalize_title, Catalog, CatalogEntry, StatusRow};
pub use config::PubidConfig;
pub use error::{CatalogError, ConfigError};
