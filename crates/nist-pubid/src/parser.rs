//! Identifier grammar
//!
//! The parser works in two passes over a (legacy-rewritten) code:
//!
//! 1. A nom prefix parser recognizes the optional `Addendum to` lead-in, the
//!    publisher, the series (longest match) and an optional stage.
//! 2. The rest of the code is scanned for markers. Each marker found is
//!    captured and stripped; whatever is left must satisfy the series'
//!    document number rule.
//!
//! Separators between prefix parts may be spaces or periods, so both
//! `NIST SP 800-53r5` and the DOI form `NIST.SP.800-53r5` are accepted.
//! Whitespace inside the remainder is not significant.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, one_of},
    combinator::{opt, peek, value},
    error::{Error, ErrorKind},
    sequence::delimited,
    IResult,
};

use crate::error::ParseError;
use crate::identifier::Identifier;
use crate::legacy::LegacyCodes;
use crate::marker::{self, Marker};
use crate::publisher::Publisher;
use crate::series::Series;
use crate::stage::Stage;
use crate::transform;

/// Typed capture produced by the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    Publisher(Publisher),
    Series(Series),
    Stage(Stage),
    DocNumber(String),
    Volume(String),
    Part(String),
    Edition(String),
    Version(String),
    Revision(String),
    Supplement(String),
    Section(String),
    Translation(String),
    Update {
        number: String,
        year: Option<String>,
    },
    Addendum,
    Appendix,
    Errata,
    Index,
    Insert,
}

/// Captures in the order the grammar found them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    pub captures: Vec<Capture>,
}

impl ParseTree {
    pub fn series(&self) -> Option<Series> {
        self.captures.iter().find_map(|capture| match capture {
            Capture::Series(series) => Some(*series),
            _ => None,
        })
    }

    pub fn contains(&self, wanted: &Capture) -> bool {
        self.captures.iter().any(|capture| capture == wanted)
    }
}

/// Recognized start of an identifier
struct Prefix<'a> {
    addendum: bool,
    publisher: Publisher,
    series: Series,
    stage: Option<Stage>,
    /// Input right after the series token, stage included
    after_series: &'a str,
}

/// Parse a rewritten code into its typed captures
pub fn parse_tree(code: &str) -> Result<ParseTree, ParseError> {
    let code = code.trim();
    let (rest, prefix) = prefix(code).map_err(|err| {
        let offset = match &err {
            nom::Err::Error(e) | nom::Err::Failure(e) => code.len() - e.input.len(),
            nom::Err::Incomplete(_) => code.len(),
        };
        tracing::debug!(code, offset, "no publisher/series prefix");
        ParseError::UnknownSeries {
            input: code.to_string(),
            trace: Some(format!(
                "expected publisher and series at offset {} ({:?})",
                offset,
                &code[offset..]
            )),
        }
    })?;

    let series = prefix.series;
    let mut captures = vec![
        Capture::Publisher(prefix.publisher),
        Capture::Series(series),
    ];
    if let Some(stage) = prefix.stage {
        captures.push(Capture::Stage(stage));
    }

    // Supplement detection runs on the text that still holds the stage
    let original = without_whitespace(prefix.after_series);
    let mut body = without_whitespace(rest);

    if prefix.addendum {
        captures.push(Capture::Addendum);
    } else if let Some(found) = marker::first(&marker::ADDENDUM, &body) {
        body = strip(&body, &found);
        captures.push(Capture::Addendum);
    }

    if let Some(update) = series.parse_update(&body) {
        body = format!("{}{}", &body[..update.start], &body[update.end..]);
        captures.push(Capture::Update {
            number: update.number,
            year: update.year,
        });
    }

    // A translation follows the document number, never precedes it
    let translation = marker::first(&marker::TRANSLATION, &body).filter(|found| found.start > 0);
    if let Some(found) = translation {
        body = strip(&body, &found);
        captures.push(Capture::Translation(found.value.to_lowercase()));
    }

    if let Some(found) = marker::first(&marker::SECTION, &body) {
        body = strip(&body, &found);
        captures.push(Capture::Section(found.value));
    }

    if let Some(found) = series.parse_supplement(&original) {
        body = body.replacen(found.text(&original), "", 1);
        captures.push(Capture::Supplement(found.value));
    }

    let flags = [
        (&*marker::APPENDIX, Capture::Appendix),
        (&*marker::ERRATA, Capture::Errata),
        (&*marker::INDEX, Capture::Index),
        (&*marker::INSERT, Capture::Insert),
    ];
    for (re, capture) in flags {
        if let Some(found) = marker::first(re, &body) {
            body = strip(&body, &found);
            captures.push(capture);
        }
    }

    if let Some(found) = marker::first(&marker::VERSION, &body) {
        body = strip(&body, &found);
        captures.push(Capture::Version(found.value.replace('-', ".")));
    }

    if let Some(found) = series.parse_volume(&body) {
        body = strip(&body, &found);
        captures.push(Capture::Volume(found.value));
    }

    if let Some(found) = series.parse_part(&body) {
        body = strip(&body, &found);
        captures.push(Capture::Part(found.value));
    }

    if let Some(found) = marker::first(&marker::EDITION, &body) {
        body = strip(&body, &found);
        captures.push(Capture::Edition(found.value));
    }

    if let Some(found) = series.parse_revision(&body) {
        body = strip(&body, &found);
        captures.push(Capture::Revision(found.value));
    }

    let residual = body.trim_matches(|c: char| c == '.' || c == ',');
    if !series.parse_docnumber(residual) {
        let offset = code.len() - rest.len();
        tracing::debug!(code, residual, series = %series, "document number rejected");
        return Err(ParseError::InvalidDocumentNumber {
            input: code.to_string(),
            series: series.label(),
            residual: residual.to_string(),
            trace: Some(format!(
                "matched {:?} up to offset {}; {:?} does not satisfy the {} numbering rule",
                &code[..offset],
                offset,
                residual,
                series
            )),
        });
    }
    captures.push(Capture::DocNumber(residual.to_string()));

    Ok(ParseTree { captures })
}

/// Full pipeline: legacy rewrite, grammar, transform
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    legacy: &'a LegacyCodes,
}

impl<'a> Parser<'a> {
    pub fn new(legacy: &'a LegacyCodes) -> Self {
        Self { legacy }
    }

    pub fn parse(&self, raw: &str) -> Result<Identifier, ParseError> {
        let code = self.legacy.rewrite(raw.trim());
        parse_tree(&code)
            .and_then(transform::apply)
            .map_err(|err| err.with_input(raw))
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new(LegacyCodes::builtin())
    }
}

/// Parse a raw identifier with the bundled legacy table
pub fn parse(raw: &str) -> Result<Identifier, ParseError> {
    Parser::default().parse(raw)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn parse_ffi(raw: String) -> Result<Identifier, ParseError> {
    parse(&raw)
}

fn strip(body: &str, found: &Marker) -> String {
    tracing::trace!(marker = found.text(body), "stripped marker");
    found.strip_from(body)
}

fn without_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn prefix(input: &str) -> IResult<&str, Prefix<'_>> {
    let (rest, lead) = opt(alt((tag("Addendum to "), tag("Add. to "))))(input)?;
    let (rest, publisher) = publisher(rest)?;
    let (rest, _) = one_of(" .")(rest)?;
    let (rest, series) = series(publisher, rest)?;
    let after_series = rest;
    let (rest, stage) = opt(stage)(rest)?;
    let (rest, _) = opt(one_of(" ."))(rest)?;

    Ok((
        rest,
        Prefix {
            addendum: lead.is_some(),
            publisher,
            series,
            stage,
            after_series,
        },
    ))
}

fn publisher(input: &str) -> IResult<&str, Publisher> {
    alt((
        value(Publisher::Nist, tag("NIST")),
        value(Publisher::Nbs, tag("NBS")),
    ))(input)
}

/// Longest series of `publisher` at the start of `input`. When the series
/// code is only a prefix of the token, the hyphen after it is consumed.
fn series(publisher: Publisher, input: &str) -> IResult<&str, Series> {
    let (_, token) = take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-')(input)?;
    match Series::lookup(publisher, token) {
        Some(series) => {
            let rest = &input[series.code().len()..];
            Ok((rest.strip_prefix('-').unwrap_or(rest), series))
        }
        None => Err(nom::Err::Error(Error::new(input, ErrorKind::Tag))),
    }
}

fn stage(input: &str) -> IResult<&str, Stage> {
    alt((parenthesized_stage, bare_stage))(input)
}

/// `(IPD)` or `(Initial Public Draft)`, optionally after a space
fn parenthesized_stage(input: &str) -> IResult<&str, Stage> {
    let (rest, _) = opt(char(' '))(input)?;
    let (rest, text) = delimited(char('('), take_until(")"), char(')'))(rest)?;
    stage_named(input, text).map(|stage| (rest, stage))
}

/// `.IPD.` or ` ipd ` between the series and the number
fn bare_stage(input: &str) -> IResult<&str, Stage> {
    let (rest, _) = one_of(" .")(input)?;
    let (rest, text) = take_while1(|c: char| c.is_ascii_alphanumeric())(rest)?;
    let (rest, _) = peek(one_of(" ."))(rest)?;
    stage_named(input, text).map(|stage| (rest, stage))
}

fn stage_named<'a>(input: &'a str, text: &str) -> Result<Stage, nom::Err<Error<&'a str>>> {
    Stage::lookup(text).ok_or_else(|| nom::Err::Error(Error::new(input, ErrorKind::Tag)))
}
