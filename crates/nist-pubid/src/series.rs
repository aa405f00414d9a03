//! Publication series and their numbering rules
//!
//! Every real-world series is one `Series` variant. The grammar asks the
//! series for each of its capabilities (volume, part, revision, supplement,
//! update, document number); the defaults cover most series and the
//! historical exceptions are spelled out per variant.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::marker::{self, Marker};
use crate::publisher::Publisher;
use crate::render::Style;

lazy_static! {
    // Volume and part are trailing modifiers, searched right to left. The
    // `next` group spots `v1.0`, which is a version and not a volume.
    static ref VOLUME: Regex =
        Regex::new(r"(?P<tok>(?:,Volume|,Vol\.|-?v)(?P<val>\d+))(?P<next>\.\d)?").unwrap();
    static ref PART: Regex =
        Regex::new(r"(?P<tok>(?:Part|Pt\.|-?pt)(?P<val>\d+))").unwrap();

    static ref REVISION: Regex =
        Regex::new(r"(?P<tok>(?:,?Revision|,?Rev\.|r)(?P<val>\d+))").unwrap();
    // Circulars were also revised by month: 12e2revjune
    static ref CIRC_REVISION: Regex = Regex::new(
        r"(?P<tok>(?:,?Revision|,?Rev\.|rev|r)(?P<val>\d+|[a-z]+\d*))"
    ).unwrap();
    // GCR numbers have three segments; the last one looks like a revision
    static ref GCR_REVISION: Regex =
        Regex::new(r"^\d+-\d+(?P<tok>-(?P<val>\d+))$").unwrap();

    static ref SUPPLEMENT: Regex =
        Regex::new(r"(?P<tok>(?:Supplement|Suppl\.|supp?)(?P<val>\d*))").unwrap();
    // Handbook supplements are dated: 67suppJune1967
    static ref HB_SUPPLEMENT: Regex = Regex::new(
        r"(?P<tok>(?:Supplement|Suppl\.|supp?)(?P<val>(?:[A-Z][a-z]+)?\d*))"
    ).unwrap();

    static ref UPDATE: Regex = Regex::new(
        r"(?:Update|Upd\.|/Upd|-upd)(?P<num>\d*)(?:-(?P<year>\d{4}))?|\.u(?P<unum>\d+)(?:-(?P<uyear>\d{4}))?"
    ).unwrap();

    static ref DOCNUMBER: Regex =
        Regex::new(r"^\d+[A-Za-z]?(?:-\d+[A-Za-z]{0,2})*$").unwrap();
    static ref CIRC_DOCNUMBER: Regex = Regex::new(r"^\d+[A-Za-z]?$").unwrap();
    static ref DIGITS_DOCNUMBER: Regex = Regex::new(r"^\d+$").unwrap();
    static ref CS_DOCNUMBER: Regex = Regex::new(r"^\d+(?:-\d+)?$").unwrap();
    static ref CSM_DOCNUMBER: Regex = Regex::new(r"^[vV]\d+[nN]\d+(?:-\d+)?$").unwrap();
    static ref NCSTAR_DOCNUMBER: Regex =
        Regex::new(r"^\d+[A-Za-z]?(?:-\d+[A-Za-z]*)?$").unwrap();
    static ref FREE_DOCNUMBER: Regex =
        Regex::new(r"^[\dA-Za-z]+(?:[-.][\dA-Za-z]+)*$").unwrap();
}

/// Update marker: `(update_number, update_year)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UpdateMarker {
    pub start: usize,
    pub end: usize,
    pub number: String,
    pub year: Option<String>,
}

/// A NIST or NBS publication series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(try_from = "String", into = "String")]
pub enum Series {
    NbsBh,
    NbsBms,
    NbsCirc,
    NbsCrpl,
    NbsCrplFA,
    NbsCrplFB,
    NbsCs,
    NbsCsm,
    NbsFips,
    NbsGcr,
    NbsHb,
    NbsIr,
    NbsLc,
    NbsMono,
    NbsMp,
    NbsNsrds,
    NbsRpt,
    NbsSp,
    NbsTibm,
    NbsTn,
    NistAms,
    NistCswp,
    NistFips,
    NistGcr,
    NistHb,
    NistIr,
    NistMono,
    NistNcstar,
    NistNsrds,
    NistOwmwp,
    NistSp,
    NistTn,
}

impl Series {
    pub fn all() -> &'static [Series] {
        &[
            Series::NbsBh,
            Series::NbsBms,
            Series::NbsCirc,
            Series::NbsCrpl,
            Series::NbsCrplFA,
            Series::NbsCrplFB,
            Series::NbsCs,
            Series::NbsCsm,
            Series::NbsFips,
            Series::NbsGcr,
            Series::NbsHb,
            Series::NbsIr,
            Series::NbsLc,
            Series::NbsMono,
            Series::NbsMp,
            Series::NbsNsrds,
            Series::NbsRpt,
            Series::NbsSp,
            Series::NbsTibm,
            Series::NbsTn,
            Series::NistAms,
            Series::NistCswp,
            Series::NistFips,
            Series::NistGcr,
            Series::NistHb,
            Series::NistIr,
            Series::NistMono,
            Series::NistNcstar,
            Series::NistNsrds,
            Series::NistOwmwp,
            Series::NistSp,
            Series::NistTn,
        ]
    }

    pub fn publisher(&self) -> Publisher {
        match self {
            Series::NbsBh
            | Series::NbsBms
            | Series::NbsCirc
            | Series::NbsCrpl
            | Series::NbsCrplFA
            | Series::NbsCrplFB
            | Series::NbsCs
            | Series::NbsCsm
            | Series::NbsFips
            | Series::NbsGcr
            | Series::NbsHb
            | Series::NbsIr
            | Series::NbsLc
            | Series::NbsMono
            | Series::NbsMp
            | Series::NbsNsrds
            | Series::NbsRpt
            | Series::NbsSp
            | Series::NbsTibm
            | Series::NbsTn => Publisher::Nbs,
            _ => Publisher::Nist,
        }
    }

    /// Series token without the publisher, e.g. `SP`
    pub fn code(&self) -> &'static str {
        match self {
            Series::NbsBh => "BH",
            Series::NbsBms => "BMS",
            Series::NbsCirc => "CIRC",
            Series::NbsCrpl => "CRPL",
            Series::NbsCrplFA => "CRPL-F-A",
            Series::NbsCrplFB => "CRPL-F-B",
            Series::NbsCs => "CS",
            Series::NbsCsm => "CSM",
            Series::NbsFips | Series::NistFips => "FIPS",
            Series::NbsGcr | Series::NistGcr => "GCR",
            Series::NbsHb | Series::NistHb => "HB",
            Series::NbsIr | Series::NistIr => "IR",
            Series::NbsLc => "LC",
            Series::NbsMono | Series::NistMono => "MONO",
            Series::NbsMp => "MP",
            Series::NbsNsrds | Series::NistNsrds => "NSRDS",
            Series::NbsRpt => "RPT",
            Series::NbsSp | Series::NistSp => "SP",
            Series::NbsTibm => "TIBM",
            Series::NbsTn | Series::NistTn => "TN",
            Series::NistAms => "AMS",
            Series::NistCswp => "CSWP",
            Series::NistNcstar => "NCSTAR",
            Series::NistOwmwp => "OWMWP",
        }
    }

    /// Canonical series label, publisher included: `NIST SP`
    pub fn label(&self) -> String {
        format!("{} {}", self.publisher().as_str(), self.code())
    }

    /// Series label as written in the given style
    pub fn render(&self, _style: Style) -> String {
        self.label()
    }

    /// Longest series of `publisher` that `token` starts with.
    ///
    /// A series code matches the whole token or a prefix of it that ends
    /// at a hyphen, so `CRPL-F-A` wins over `CRPL` and `CRPL-4` falls back
    /// to `CRPL` with `4` as its number.
    pub fn lookup(publisher: Publisher, token: &str) -> Option<Series> {
        Series::all()
            .iter()
            .filter(|series| series.publisher() == publisher)
            .filter(|series| {
                let code = series.code();
                token == code
                    || (token.starts_with(code) && token[code.len()..].starts_with('-'))
            })
            .max_by_key(|series| series.code().len())
            .copied()
    }

    /// Whether trailing `vN` modifiers are volumes in this series.
    ///
    /// Commercial standards and reports reuse `v` inside their numbers.
    pub fn parses_volume(&self) -> bool {
        !matches!(self, Series::NbsCs | Series::NbsCsm | Series::NbsRpt)
    }

    pub(crate) fn parse_volume(&self, code: &str) -> Option<Marker> {
        if !self.parses_volume() {
            return None;
        }
        marker::last_where(&VOLUME, code, |caps| caps.name("next").is_none())
    }

    pub(crate) fn parse_part(&self, code: &str) -> Option<Marker> {
        marker::last(&PART, code)
    }

    pub(crate) fn parse_revision(&self, code: &str) -> Option<Marker> {
        match self {
            Series::NbsCirc => marker::first(&CIRC_REVISION, code),
            Series::NistGcr => {
                marker::first(&GCR_REVISION, code).or_else(|| marker::first(&REVISION, code))
            }
            Series::NbsRpt | Series::NbsCrpl | Series::NbsCrplFA | Series::NbsCrplFB => None,
            _ => marker::first(&REVISION, code),
        }
    }

    pub(crate) fn parse_supplement(&self, code: &str) -> Option<Marker> {
        match self {
            Series::NbsHb | Series::NistHb => marker::first(&HB_SUPPLEMENT, code),
            _ => marker::first(&SUPPLEMENT, code),
        }
    }

    /// Updates were introduced with NIST; NBS identifiers never carry one
    pub(crate) fn parse_update(&self, code: &str) -> Option<UpdateMarker> {
        if self.publisher() == Publisher::Nbs {
            return None;
        }
        let caps = UPDATE.captures(code)?;
        let whole = caps.get(0)?;
        let number = caps
            .name("num")
            .or_else(|| caps.name("unum"))
            .map(|m| m.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("1")
            .to_string();
        let year = caps
            .name("year")
            .or_else(|| caps.name("uyear"))
            .map(|m| m.as_str().to_string());

        Some(UpdateMarker {
            start: whole.start(),
            end: whole.end(),
            number,
            year,
        })
    }

    /// Whether `residual` is a valid document number in this series
    pub(crate) fn parse_docnumber(&self, residual: &str) -> bool {
        let rule: &Regex = match self {
            Series::NbsCirc => &CIRC_DOCNUMBER,
            Series::NbsLc => &DIGITS_DOCNUMBER,
            Series::NbsCs => &CS_DOCNUMBER,
            Series::NbsCsm => &CSM_DOCNUMBER,
            Series::NistNcstar => &NCSTAR_DOCNUMBER,
            Series::NbsRpt | Series::NbsCrpl | Series::NbsCrplFA | Series::NbsCrplFB => {
                &FREE_DOCNUMBER
            }
            _ => &DOCNUMBER,
        };
        rule.is_match(residual)
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.publisher(), self.code())
    }
}

impl FromStr for Series {
    type Err = String;

    /// Accepts `NIST SP` or `NIST.SP`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (publisher, code) = s
            .split_once(|c: char| c == ' ' || c == '.')
            .ok_or_else(|| format!("unknown series: {}", s))?;
        let publisher: Publisher = publisher.parse()?;
        Series::all()
            .iter()
            .find(|series| series.publisher() == publisher && series.code() == code)
            .copied()
            .ok_or_else(|| format!("unknown series: {}", s))
    }
}

impl TryFrom<String> for Series {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Series> for String {
    fn from(series: Series) -> Self {
        series.label()
    }
}
