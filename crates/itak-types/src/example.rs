use serde::{Deserialize, Serialize};

use crate::non_empty;

/// One usage example attached to a definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ExampleRecord", into = "ExampleRecord")]
pub struct Example {
    /// Source-language sentence
    pub text: String,
    /// Target-language gloss of the sentence
    pub translation: String,
    pub attribution: Attribution,
}

impl Example {
    pub fn new(text: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            translation: translation.into(),
            attribution: Attribution::None,
        }
    }

    /// Cite by key; an empty key leaves the example unattributed
    pub fn with_ref(mut self, key: impl Into<String>) -> Self {
        self.attribution = match non_empty(Some(key.into())) {
            Some(key) => Attribution::Ref(key),
            None => Attribution::None,
        };
        self
    }

    /// Cite a full record; a record with no fields leaves the example unattributed
    pub fn with_source(mut self, source: Source) -> Self {
        self.attribution = if source.is_empty() {
            Attribution::None
        } else {
            Attribution::Source(source)
        };
        self
    }

    pub fn is_attributed(&self) -> bool {
        !matches!(self.attribution, Attribution::None)
    }
}

/// Where an example was taken from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Attribution {
    #[default]
    None,
    /// Short citation key
    Ref(String),
    /// Full bibliographic record
    Source(Source),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Source {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Book or publisher name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Source {
    /// No field carries a value
    pub fn is_empty(&self) -> bool {
        [&self.author, &self.title, &self.book, &self.year, &self.url]
            .iter()
            .all(|field| field.as_deref().is_none_or(str::is_empty))
    }
}

// Flat wire shape: {text, translation, ref?, source?}
#[derive(Serialize, Deserialize)]
struct ExampleRecord {
    text: String,
    translation: String,
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<Source>,
}

impl From<ExampleRecord> for Example {
    fn from(record: ExampleRecord) -> Self {
        // A full source record outranks a bare key
        let source = record.source.filter(|s| !s.is_empty());
        let attribution = match (source, non_empty(record.reference)) {
            (Some(source), _) => Attribution::Source(source),
            (None, Some(key)) => Attribution::Ref(key),
            (None, None) => Attribution::None,
        };

        Self {
            text: record.text,
            translation: record.translation,
            attribution,
        }
    }
}

impl From<Example> for ExampleRecord {
    fn from(example: Example) -> Self {
        let (reference, source) = match example.attribution {
            Attribution::None => (None, None),
            Attribution::Ref(key) => (Some(key), None),
            Attribution::Source(source) => (None, Some(source)),
        };

        Self {
            text: example.text,
            translation: example.translation,
            reference,
            source,
        }
    }
}
