//! nist-pubid: NIST and NBS publication identifiers
//!
//! Parses identifiers of NIST technical publications, from current DOI
//! suffixes (`NIST.SP.800-53r5`) to legacy catalog spellings
//! (`NISTIR 8379`, `NBS.LCIRC.897`), into a structured [`Identifier`] and
//! renders it back in the four PubID styles.
//!
//! ```
//! use nist_pubid::{parse, Style};
//!
//! let id = parse("NIST SP 800-53r5").unwrap();
//! assert_eq!(id.render(Style::Long), "NIST SP 800-53, Revision 5");
//! assert_eq!(id.render(Style::Mr), "NIST.SP.800-53r5");
//! ```
//!
//! # Pipeline
//!
//! 1. [`legacy`] rewrites deprecated tokens (`NISTIR` to `NIST IR`).
//! 2. [`parser`] recognizes publisher, series and stage, then strips the
//!    trailing markers and validates the document number.
//! 3. [`transform`] turns the captures into an [`Identifier`].
//! 4. [`render`] writes the record in the requested [`Style`].

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

pub mod error;
pub mod identifier;
pub mod legacy;
mod marker;
pub mod parser;
pub mod publisher;
pub mod render;
pub mod series;
pub mod stage;
pub mod transform;

pub use error::{LegacyCodesError, ParseError};
pub use identifier::{to_structured, Identifier, IdentifierBuilder};
pub use legacy::{update_old_code, LegacyCodes, LegacyRule};
pub use parser::{parse, parse_tree, Capture, ParseTree, Parser};
pub use publisher::Publisher;
pub use render::{render, Style};
pub use series::Series;
pub use stage::Stage;

/// Returns the version of nist-pubid
#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
