//! Publishers of NIST technical publications

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::render::Style;

/// Issuing agency. NBS is the pre-1988 name of NIST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(try_from = "String", into = "String")]
pub enum Publisher {
    /// National Bureau of Standards
    Nbs,
    /// National Institute of Standards and Technology
    Nist,
}

impl Publisher {
    pub fn all() -> &'static [Publisher] {
        &[Publisher::Nbs, Publisher::Nist]
    }

    /// Identifier token, e.g. `NIST`
    pub fn as_str(&self) -> &'static str {
        match self {
            Publisher::Nbs => "NBS",
            Publisher::Nist => "NIST",
        }
    }

    /// Publisher as written in the given style.
    ///
    /// PubID keeps the agency token in every style; only `mr` changes the
    /// separators, and that happens after composition.
    pub fn render(&self, _style: Style) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Publisher {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NBS" => Ok(Publisher::Nbs),
            "NIST" => Ok(Publisher::Nist),
            other => Err(format!("unknown publisher: {}", other)),
        }
    }
}

impl TryFrom<String> for Publisher {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Publisher> for String {
    fn from(publisher: Publisher) -> Self {
        publisher.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_str() {
        for publisher in Publisher::all() {
            assert_eq!(publisher.as_str().parse::<Publisher>(), Ok(*publisher));
        }
    }

    #[test]
    fn test_unknown_publisher() {
        assert!("NOAA".parse::<Publisher>().is_err());
    }

    #[test]
    fn test_render_is_style_independent() {
        assert_eq!(Publisher::Nist.render(Style::Long), "NIST");
        assert_eq!(Publisher::Nbs.render(Style::Mr), "NBS");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Publisher::Nbs).unwrap();
        assert_eq!(json, "\"NBS\"");
        let back: Publisher = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Publisher::Nbs);
    }
}
