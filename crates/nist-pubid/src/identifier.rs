//! The identifier record and its builder

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ParseError;
use crate::publisher::Publisher;
use crate::render::{self, Style};
use crate::series::Series;
use crate::stage::Stage;

/// A parsed NIST publication identifier.
///
/// Numeric-looking fields keep their exact text (`"01"` stays `"01"`).
/// Flags are `true` when the marker was present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Identifier {
    pub publisher: Publisher,
    pub serie: Series,
    /// Document number, never empty
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// ISO 639-3 language code, lowercase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_year: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub appendix: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub errata: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub index: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub insert: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub addendum: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Identifier {
    pub fn builder(
        publisher: Publisher,
        serie: Series,
        code: impl Into<String>,
    ) -> IdentifierBuilder {
        IdentifierBuilder::new(publisher, serie, code)
    }

    /// Populated fields in declaration order, flags as `true`
    pub fn fields(&self) -> Vec<(&'static str, Value)> {
        let mut fields = vec![
            ("publisher", Value::from(self.publisher.as_str())),
            ("serie", Value::from(self.serie.label())),
            ("code", Value::from(self.code.as_str())),
        ];
        if let Some(stage) = &self.stage {
            fields.push(("stage", Value::from(stage.code())));
        }

        let text = [
            ("revision", &self.revision),
            ("version", &self.version),
            ("volume", &self.volume),
            ("part", &self.part),
            ("edition", &self.edition),
            ("supplement", &self.supplement),
            ("section", &self.section),
            ("translation", &self.translation),
            ("update_number", &self.update_number),
            ("update_year", &self.update_year),
        ];
        for (name, value) in text {
            if let Some(value) = value {
                fields.push((name, Value::from(value.as_str())));
            }
        }

        let flags = [
            ("appendix", self.appendix),
            ("errata", self.errata),
            ("index", self.index),
            ("insert", self.insert),
            ("addendum", self.addendum),
        ];
        for (name, set) in flags {
            if set {
                fields.push((name, Value::Bool(true)));
            }
        }

        fields
    }

    /// Number of populated fields
    pub fn weight(&self) -> usize {
        self.fields().len()
    }

    /// Fold `other` into `self`.
    ///
    /// Publisher and series always come from `other`. Any other field is
    /// taken from `other` when `self` lacks it or when `other`'s text is
    /// strictly longer. An addendum in either record drops the revision.
    pub fn merge(&mut self, other: &Identifier) -> &mut Self {
        self.publisher = other.publisher;
        self.serie = other.serie;

        if other.code.len() > self.code.len() {
            self.code = other.code.clone();
        }

        let self_stage = self.stage.map(|s| s.render(Style::Short).len());
        let other_stage = other.stage.map(|s| s.render(Style::Short).len());
        if let (Some(theirs), ours) = (other_stage, self_stage) {
            if ours.map_or(true, |ours| theirs > ours) {
                self.stage = other.stage;
            }
        }

        merge_text(&mut self.revision, &other.revision);
        merge_text(&mut self.version, &other.version);
        merge_text(&mut self.volume, &other.volume);
        merge_text(&mut self.part, &other.part);
        merge_text(&mut self.edition, &other.edition);
        merge_text(&mut self.supplement, &other.supplement);
        merge_text(&mut self.section, &other.section);
        merge_text(&mut self.translation, &other.translation);
        merge_text(&mut self.update_number, &other.update_number);
        merge_text(&mut self.update_year, &other.update_year);

        self.appendix |= other.appendix;
        self.errata |= other.errata;
        self.index |= other.index;
        self.insert |= other.insert;
        self.addendum |= other.addendum;
        if self.addendum {
            self.revision = None;
        }

        self
    }

    pub fn render(&self, style: Style) -> String {
        render::render(self, style)
    }

    /// Populated fields plus every rendered style under `"styles"`
    pub fn to_structured(&self) -> Map<String, Value> {
        let mut styles = Map::new();
        for style in Style::ALL {
            styles.insert(style.as_str().to_string(), Value::from(self.render(style)));
        }

        let mut map = Map::new();
        map.insert("styles".to_string(), Value::Object(styles));
        for (name, value) in self.fields() {
            map.insert(name.to_string(), value);
        }
        map
    }
}

fn merge_text(ours: &mut Option<String>, theirs: &Option<String>) {
    if let Some(theirs) = theirs {
        let replace = match ours {
            None => true,
            Some(ours) => theirs.len() > ours.len(),
        };
        if replace {
            *ours = Some(theirs.clone());
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Style::Short))
    }
}

/// Structured view of an identifier, see [`Identifier::to_structured`]
pub fn to_structured(id: &Identifier) -> Map<String, Value> {
    id.to_structured()
}

/// Builder over the fixed set of identifier fields
#[derive(Debug, Clone)]
pub struct IdentifierBuilder {
    inner: Identifier,
}

impl IdentifierBuilder {
    pub fn new(publisher: Publisher, serie: Series, code: impl Into<String>) -> Self {
        Self {
            inner: Identifier {
                publisher,
                serie,
                code: code.into(),
                stage: None,
                revision: None,
                version: None,
                volume: None,
                part: None,
                edition: None,
                supplement: None,
                section: None,
                translation: None,
                update_number: None,
                update_year: None,
                appendix: false,
                errata: false,
                index: false,
                insert: false,
                addendum: false,
            },
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = code.into();
        self
    }

    pub fn stage(mut self, stage: Stage) -> Self {
        self.inner.stage = Some(stage);
        self
    }

    pub fn revision(mut self, revision: impl Into<String>) -> Self {
        self.inner.revision = Some(revision.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.inner.version = Some(version.into());
        self
    }

    pub fn volume(mut self, volume: impl Into<String>) -> Self {
        self.inner.volume = Some(volume.into());
        self
    }

    pub fn part(mut self, part: impl Into<String>) -> Self {
        self.inner.part = Some(part.into());
        self
    }

    pub fn edition(mut self, edition: impl Into<String>) -> Self {
        self.inner.edition = Some(edition.into());
        self
    }

    pub fn supplement(mut self, supplement: impl Into<String>) -> Self {
        self.inner.supplement = Some(supplement.into());
        self
    }

    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.inner.section = Some(section.into());
        self
    }

    pub fn translation(mut self, translation: impl Into<String>) -> Self {
        self.inner.translation = Some(translation.into());
        self
    }

    pub fn update(mut self, number: impl Into<String>, year: Option<String>) -> Self {
        self.inner.update_number = Some(number.into());
        self.inner.update_year = year;
        self
    }

    pub fn appendix(mut self) -> Self {
        self.inner.appendix = true;
        self
    }

    pub fn errata(mut self) -> Self {
        self.inner.errata = true;
        self
    }

    pub fn index(mut self) -> Self {
        self.inner.index = true;
        self
    }

    pub fn insert(mut self) -> Self {
        self.inner.insert = true;
        self
    }

    pub fn addendum(mut self) -> Self {
        self.inner.addendum = true;
        self
    }

    /// Finish the record. An addendum never carries a revision.
    pub fn build(self) -> Result<Identifier, ParseError> {
        let mut id = self.inner;
        if id.code.is_empty() {
            return Err(ParseError::EmptyDocumentNumber);
        }
        if id.addendum {
            id.revision = None;
        }
        Ok(id)
    }
}
