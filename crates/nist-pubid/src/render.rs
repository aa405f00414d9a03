//! Multi-format rendering of identifiers
//!
//! An identifier is written in one of four styles. Every optional field has
//! one literal descriptor per style; fields are always emitted in the same
//! order so that the short and machine-readable forms parse back to the same
//! record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;

/// Output style of a rendered identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// `NIST SP 800-53, Revision 5`
    Long,
    /// `NIST SP 800-53, Rev. 5`
    Abbrev,
    /// `NIST SP 800-53r5`
    #[default]
    Short,
    /// `NIST.SP.800-53r5`, the space-free interchange form
    Mr,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Short, Style::Abbrev, Style::Long, Style::Mr];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Long => "long",
            Style::Abbrev => "abbrev",
            Style::Short => "short",
            Style::Mr => "mr",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "long" => Ok(Style::Long),
            "abbrev" => Ok(Style::Abbrev),
            "short" => Ok(Style::Short),
            "mr" => Ok(Style::Mr),
            other => Err(format!("unknown style: {}", other)),
        }
    }
}

/// Literal text introducing a field, one per style
struct Descriptor {
    long: &'static str,
    abbrev: &'static str,
    short: &'static str,
    mr: &'static str,
}

impl Descriptor {
    const fn new(
        long: &'static str,
        abbrev: &'static str,
        short: &'static str,
        mr: &'static str,
    ) -> Self {
        Self {
            long,
            abbrev,
            short,
            mr,
        }
    }

    fn get(&self, style: Style) -> &'static str {
        match style {
            Style::Long => self.long,
            Style::Abbrev => self.abbrev,
            Style::Short => self.short,
            Style::Mr => self.mr,
        }
    }
}

const VOLUME: Descriptor = Descriptor::new(", Volume ", ", Vol. ", "v", "v");
const PART: Descriptor = Descriptor::new(" Part ", " Pt. ", "pt", "pt");
const EDITION: Descriptor = Descriptor::new(" Edition ", " Ed. ", "e", "e");
const REVISION: Descriptor = Descriptor::new(", Revision ", ", Rev. ", "r", "r");
const VERSION: Descriptor = Descriptor::new(", Version ", ", Ver. ", "ver", "ver");
const SUPPLEMENT: Descriptor = Descriptor::new(" Supplement ", " Suppl. ", "sup", "sup");
const SECTION: Descriptor = Descriptor::new(" Section ", " Sec. ", "sec", "sec");
const APPENDIX: Descriptor = Descriptor::new(" Appendix", " App.", "app", "app");
const ERRATA: Descriptor = Descriptor::new(" Errata", " Err.", "err", "err");
const INDEX: Descriptor = Descriptor::new(" Index", " Index.", "indx", "indx");
const INSERT: Descriptor = Descriptor::new(" Insert", " Ins.", "ins", "ins");
const UPDATE: Descriptor = Descriptor::new(" Update ", " Upd. ", "/Upd", ".u");

/// Render `id` in the given style
pub fn render(id: &Identifier, style: Style) -> String {
    let mut out = render_serie(id, style);

    if let Some(stage) = &id.stage {
        if style != Style::Short {
            out.push(' ');
        }
        out.push_str(&stage.render(style));
    }

    out.push(' ');
    out.push_str(&id.code.to_uppercase());

    let valued = [
        (&VOLUME, &id.volume),
        (&PART, &id.part),
        (&EDITION, &id.edition),
        (&REVISION, &id.revision),
        (&VERSION, &id.version),
        (&SUPPLEMENT, &id.supplement),
        (&SECTION, &id.section),
    ];
    for (descriptor, value) in valued {
        if let Some(value) = value {
            push_field(&mut out, descriptor.get(style), value);
        }
    }

    let flags = [
        (&APPENDIX, id.appendix),
        (&ERRATA, id.errata),
        (&INDEX, id.index),
        (&INSERT, id.insert),
    ];
    for (descriptor, set) in flags {
        if set {
            out.push_str(descriptor.get(style));
        }
    }

    if let Some(number) = &id.update_number {
        // A non-numeric update number renders as `1` without its year
        let update = if !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()) {
            match &id.update_year {
                Some(year) => format!("{}-{}", number, year),
                None => number.clone(),
            }
        } else {
            "1".to_string()
        };
        push_field(&mut out, UPDATE.get(style), &update);
    }

    if let Some(translation) = &id.translation {
        match style {
            Style::Long | Style::Abbrev => {
                out.push_str(&format!(" ({})", translation.to_uppercase()))
            }
            Style::Short => out.push_str(&format!("({})", translation)),
            Style::Mr => out.push_str(&format!(".{}", translation)),
        }
    }

    let mut out = out.trim_end().to_string();
    if style == Style::Mr {
        out = out.replace(' ', ".");
    }

    if id.addendum {
        out = match style {
            Style::Long => format!("Addendum to {}", out),
            Style::Abbrev => format!("Add. to {}", out),
            Style::Short => format!("{} Add.", out),
            Style::Mr => format!("{}.add-1", out),
        };
    }

    out
}

/// Publisher and series. The series label already names its own publisher,
/// so the publisher is only spelled out when it differs.
fn render_serie(id: &Identifier, style: Style) -> String {
    let publisher = id.publisher.render(style);
    let serie = id.serie.render(style);
    if serie.contains(publisher) {
        serie
    } else {
        format!("{} {}", publisher, serie)
    }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn render_ffi(id: Identifier, style: Style) -> String {
    render(&id, style)
}

fn push_field(out: &mut String, descriptor: &str, value: &str) {
    if value.is_empty() {
        out.push_str(descriptor.trim_end());
    } else {
        out.push_str(descriptor);
        out.push_str(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publisher::Publisher;
    use crate::series::Series;
    use crate::stage::Stage;

    fn sp(code: &str) -> Identifier {
        Identifier::builder(Publisher::Nist, Series::NistSp, code)
            .build()
            .unwrap()
    }

    #[test]
    fn test_style_from_str() {
        for style in Style::ALL {
            assert_eq!(style.as_str().parse::<Style>(), Ok(style));
        }
        assert_eq!("MR".parse::<Style>(), Ok(Style::Mr));
        assert!("medium".parse::<Style>().is_err());
    }

    #[test]
    fn test_plain_identifier() {
        let id = sp("800-53");
        assert_eq!(render(&id, Style::Long), "NIST SP 800-53");
        assert_eq!(render(&id, Style::Mr), "NIST.SP.800-53");
    }

    #[test]
    fn test_stage_spacing() {
        let mut id = sp("800-53");
        id.stage = Some(Stage::InitialPublicDraft);
        id.revision = Some("5".to_string());
        assert_eq!(render(&id, Style::Short), "NIST SP(IPD) 800-53r5");
        assert_eq!(render(&id, Style::Mr), "NIST.SP.IPD.800-53r5");
        assert_eq!(
            render(&id, Style::Long),
            "NIST SP (Initial Public Draft) 800-53, Revision 5"
        );
    }

    #[test]
    fn test_update_number_fallback() {
        let mut id = sp("800-53");
        id.revision = Some("4".to_string());
        id.update_number = Some("3".to_string());
        id.update_year = Some("2015".to_string());
        assert_eq!(render(&id, Style::Short), "NIST SP 800-53r4/Upd3-2015");
        assert_eq!(render(&id, Style::Mr), "NIST.SP.800-53r4.u3-2015");

        id.update_number = Some("A".to_string());
        id.update_year = None;
        assert_eq!(render(&id, Style::Abbrev), "NIST SP 800-53, Rev. 4 Upd. 1");

        let mut id = sp("800-53");
        id.update_number = Some("X".to_string());
        id.update_year = Some("2015".to_string());
        assert_eq!(render(&id, Style::Mr), "NIST.SP.800-53.u1");
        assert_eq!(render(&id, Style::Short), "NIST SP 800-53/Upd1");
    }

    #[test]
    fn test_default_style_is_short() {
        assert_eq!(Style::default(), Style::Short);
    }

    #[test]
    fn test_empty_supplement_has_no_trailing_space() {
        let mut id = Identifier::builder(Publisher::Nbs, Series::NbsCirc, "25")
            .build()
            .unwrap();
        id.supplement = Some(String::new());
        assert_eq!(render(&id, Style::Long), "NBS CIRC 25 Supplement");
        assert_eq!(render(&id, Style::Short), "NBS CIRC 25sup");
    }

    #[test]
    fn test_addendum_wrapping() {
        let mut id = sp("800-38A");
        id.addendum = true;
        assert_eq!(render(&id, Style::Long), "Addendum to NIST SP 800-38A");
        assert_eq!(render(&id, Style::Abbrev), "Add. to NIST SP 800-38A");
        assert_eq!(render(&id, Style::Short), "NIST SP 800-38A Add.");
        assert_eq!(render(&id, Style::Mr), "NIST.SP.800-38A.add-1");
    }

    #[test]
    fn test_foreign_publisher_is_prefixed() {
        let id = Identifier::builder(Publisher::Nbs, Series::NistSp, "1")
            .build()
            .unwrap();
        assert_eq!(render(&id, Style::Short), "NBS NIST SP 1");
    }

    #[test]
    fn test_translation_per_style() {
        let mut id = Identifier::builder(Publisher::Nist, Series::NistIr, "8115")
            .build()
            .unwrap();
        id.translation = Some("spa".to_string());
        assert_eq!(render(&id, Style::Long), "NIST IR 8115 (SPA)");
        assert_eq!(render(&id, Style::Short), "NIST IR 8115(spa)");
        assert_eq!(render(&id, Style::Mr), "NIST.IR.8115.spa");
    }
}
