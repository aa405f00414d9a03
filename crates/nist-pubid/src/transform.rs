//! Parse tree to identifier record

use crate::error::ParseError;
use crate::identifier::{Identifier, IdentifierBuilder};
use crate::parser::{Capture, ParseTree};
use crate::series::Series;

/// Copy captures onto an [`Identifier`].
///
/// Two normalizations apply: a GCR revision is folded back into the
/// document number, and an addendum drops any revision.
pub fn apply(tree: ParseTree) -> Result<Identifier, ParseError> {
    let mut publisher = None;
    let mut serie = None;
    let mut code = String::new();
    let mut fields = Vec::new();

    for capture in tree.captures {
        match capture {
            Capture::Publisher(p) => publisher = Some(p),
            Capture::Series(s) => serie = Some(s),
            Capture::DocNumber(number) => code = number,
            other => fields.push(other),
        }
    }

    let serie = serie.ok_or_else(|| ParseError::UnknownSeries {
        input: code.clone(),
        trace: Some("parse tree has no series capture".to_string()),
    })?;
    let publisher = publisher.unwrap_or_else(|| serie.publisher());

    let mut builder = IdentifierBuilder::new(publisher, serie, code.clone());
    let mut revision = None;
    for capture in fields {
        builder = match capture {
            Capture::Stage(stage) => builder.stage(stage),
            Capture::Volume(v) => builder.volume(v),
            Capture::Part(v) => builder.part(v),
            Capture::Edition(v) => builder.edition(v),
            Capture::Version(v) => builder.version(v),
            Capture::Supplement(v) => builder.supplement(v),
            Capture::Section(v) => builder.section(v),
            Capture::Translation(v) => builder.translation(v),
            Capture::Update { number, year } => builder.update(number, year),
            Capture::Addendum => builder.addendum(),
            Capture::Appendix => builder.appendix(),
            Capture::Errata => builder.errata(),
            Capture::Index => builder.index(),
            Capture::Insert => builder.insert(),
            Capture::Revision(v) => {
                revision = Some(v);
                builder
            }
            Capture::Publisher(_) | Capture::Series(_) | Capture::DocNumber(_) => builder,
        };
    }

    if let Some(revision) = revision {
        builder = if serie == Series::NistGcr {
            builder.code(format!("{}-{}", code, revision))
        } else {
            builder.revision(revision)
        };
    }

    builder.build()
}
