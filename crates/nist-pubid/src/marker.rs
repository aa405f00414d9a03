//! Marker scanning shared by the grammar and the per-series rules
//!
//! Every marker regex names the text to strip `tok` (or `tok2` for a second
//! alternative) and the captured value `val` (or `val2`). When no `tok`
//! group participates the whole match is stripped.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    pub(crate) static ref EDITION: Regex =
        Regex::new(r"(?P<tok>(?:,?Edition|,?Ed\.|e)(?P<val>\d+))").unwrap();

    // `ver` takes hyphen or dot separated groups; a bare `v` only counts as a
    // version when the number is dotted, otherwise it is a volume
    pub(crate) static ref VERSION: Regex = Regex::new(
        r"(?P<tok>(?:,Version|,Ver\.|ver)(?P<val>\d+(?:[.-]\d+)*))|(?P<tok2>v(?P<val2>\d+\.\d+(?:\.\d+)*))"
    ).unwrap();

    pub(crate) static ref TRANSLATION: Regex =
        Regex::new(r"\((?P<val>[A-Za-z]{3})\)|\.(?P<val2>spa|zho|vie|por|ind)").unwrap();

    pub(crate) static ref SECTION: Regex =
        Regex::new(r"(?P<tok>(?:Section|Sec\.|sec)(?P<val>\d+(?:\.\d+)*))").unwrap();

    pub(crate) static ref ADDENDUM: Regex =
        Regex::new(r"(?P<tok>Addendum|Add\.|[.-]?add(?:-\d+)?)").unwrap();

    // Short spellings of the flags need a digit in front so that they are
    // not found inside words
    pub(crate) static ref APPENDIX: Regex =
        Regex::new(r"(?P<tok>Appendix|App\.)|\d(?P<tok2>app(?:endix)?)").unwrap();

    pub(crate) static ref ERRATA: Regex =
        Regex::new(r"(?P<tok>-errata|Errata|Err\.)|\d(?P<tok2>err(?:ata)?)").unwrap();

    pub(crate) static ref INDEX: Regex =
        Regex::new(r"(?P<tok>Index\.|Index)|\d(?P<tok2>indx|index)").unwrap();

    pub(crate) static ref INSERT: Regex =
        Regex::new(r"(?P<tok>Insert|Ins\.)|\d(?P<tok2>insert|ins)").unwrap();
}

/// A marker found in a code: the byte range to strip and the captured value
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Marker {
    pub start: usize,
    pub end: usize,
    pub value: String,
}

impl Marker {
    fn from_captures(caps: &Captures) -> Option<Self> {
        let token = ["tok", "tok2"]
            .iter()
            .find_map(|name| caps.name(name))
            .or_else(|| caps.get(0))?;
        let value = ["val", "val2"]
            .iter()
            .find_map(|name| caps.name(name))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        Some(Self {
            start: token.start(),
            end: token.end(),
            value,
        })
    }

    /// Text of the marker inside `code`
    pub fn text<'a>(&self, code: &'a str) -> &'a str {
        &code[self.start..self.end]
    }

    /// `code` with the marker removed
    pub fn strip_from(&self, code: &str) -> String {
        let mut result = String::with_capacity(code.len());
        result.push_str(&code[..self.start]);
        result.push_str(&code[self.end..]);
        result
    }
}

/// Leftmost marker
pub(crate) fn first(re: &Regex, code: &str) -> Option<Marker> {
    re.captures(code).and_then(|caps| Marker::from_captures(&caps))
}

/// Rightmost marker
pub(crate) fn last(re: &Regex, code: &str) -> Option<Marker> {
    last_where(re, code, |_| true)
}

/// Rightmost marker whose captures satisfy `keep`
pub(crate) fn last_where(
    re: &Regex,
    code: &str,
    keep: impl Fn(&Captures) -> bool,
) -> Option<Marker> {
    re.captures_iter(code)
        .filter(|caps| keep(caps))
        .last()
        .and_then(|caps| Marker::from_captures(&caps))
}
