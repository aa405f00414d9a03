//! Draft stages

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::render::Style;

/// Publication status marker written right after the series,
/// e.g. `NIST SP(IPD) 800-53r5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(try_from = "String", into = "String")]
pub enum Stage {
    InitialPublicDraft,
    SecondPublicDraft,
    ThirdPublicDraft,
    FinalPublicDraft,
    PreliminaryDraft,
    InitialWorkingDraft,
    FinalWorkingDraft,
}

impl Stage {
    pub fn all() -> &'static [Stage] {
        &[
            Stage::InitialPublicDraft,
            Stage::SecondPublicDraft,
            Stage::ThirdPublicDraft,
            Stage::FinalPublicDraft,
            Stage::PreliminaryDraft,
            Stage::InitialWorkingDraft,
            Stage::FinalWorkingDraft,
        ]
    }

    /// Abbreviated token, e.g. `IPD`
    pub fn code(&self) -> &'static str {
        match self {
            Stage::InitialPublicDraft => "IPD",
            Stage::SecondPublicDraft => "2PD",
            Stage::ThirdPublicDraft => "3PD",
            Stage::FinalPublicDraft => "FPD",
            Stage::PreliminaryDraft => "PRD",
            Stage::InitialWorkingDraft => "IWD",
            Stage::FinalWorkingDraft => "FWD",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::InitialPublicDraft => "Initial Public Draft",
            Stage::SecondPublicDraft => "Second Public Draft",
            Stage::ThirdPublicDraft => "Third Public Draft",
            Stage::FinalPublicDraft => "Final Public Draft",
            Stage::PreliminaryDraft => "Preliminary Draft",
            Stage::InitialWorkingDraft => "Initial Working Draft",
            Stage::FinalWorkingDraft => "Final Working Draft",
        }
    }

    /// Look a stage up by token or full name, ignoring case
    pub fn lookup(text: &str) -> Option<Stage> {
        Stage::all().iter().copied().find(|stage| {
            stage.code().eq_ignore_ascii_case(text) || stage.name().eq_ignore_ascii_case(text)
        })
    }

    pub fn render(&self, style: Style) -> String {
        match style {
            Style::Long => format!("({})", self.name()),
            Style::Abbrev | Style::Short => format!("({})", self.code()),
            Style::Mr => self.code().to_string(),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::lookup(s).ok_or_else(|| format!("unknown stage: {}", s))
    }
}

impl TryFrom<String> for Stage {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Stage> for String {
    fn from(stage: Stage) -> Self {
        stage.code().to_string()
    }
}
