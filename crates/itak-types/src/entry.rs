use serde::{Deserialize, Serialize};

use crate::example::Example;
use crate::pos::{PartOfSpeech, Transitivity};

/// A dictionary headword with everything needed to render its page section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub lemma: String,
    pub pos: PartOfSpeech,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_args: Option<PosArgs>,
    /// Free-text grammatical subtype, shown as a context label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    pub definitions: Vec<Definition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub etymology: Vec<LinkMeta>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub derived: Vec<LinkMeta>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<LinkMeta>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<LinkMeta>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub antonyms: Vec<LinkMeta>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dialects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<Pronunciation>,
    /// Draw a horizontal rule after the entry
    #[serde(default, rename = "addSeparator", alias = "add_separator")]
    pub add_separator: bool,
}

impl Entry {
    pub fn new(lemma: impl Into<String>, pos: PartOfSpeech, definitions: Vec<Definition>) -> Self {
        Self {
            lemma: lemma.into(),
            pos,
            pos_args: None,
            sub_type: None,
            definitions,
            etymology: vec![],
            derived: vec![],
            related: vec![],
            synonyms: vec![],
            antonyms: vec![],
            dialects: vec![],
            usage: None,
            pronunciation: None,
            add_separator: false,
        }
    }

    pub fn sub_type(&self) -> Option<&str> {
        self.sub_type.as_deref().filter(|s| !s.is_empty())
    }

    pub fn usage(&self) -> Option<&str> {
        self.usage.as_deref().filter(|s| !s.is_empty())
    }

    /// Transitivity class, if the entry carries one
    pub fn transitivity(&self) -> Option<Transitivity> {
        self.pos_args.as_ref().and_then(|args| args.transitivity)
    }

    /// All examples across all definitions, in order
    pub fn examples(&self) -> impl Iterator<Item = &Example> {
        self.definitions.iter().flat_map(|d| d.examples.iter())
    }

    pub fn has_attributed_examples(&self) -> bool {
        self.examples().any(Example::is_attributed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PosArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transitivity: Option<Transitivity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possessive: Option<String>,
}

impl PosArgs {
    pub fn plural(&self) -> Option<&str> {
        self.plural.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub gloss: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

impl Definition {
    pub fn new(gloss: impl Into<String>) -> Self {
        Self {
            gloss: gloss.into(),
            examples: vec![],
        }
    }

    pub fn with_example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }
}

/// Reference to another term (etymology component, synonym, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkMeta {
    pub term: String,
    /// Gloss of the linked term
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tran: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
}

impl LinkMeta {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            tran: None,
            pos: None,
        }
    }

    pub fn tran(&self) -> Option<&str> {
        self.tran.as_deref().filter(|s| !s.is_empty())
    }

    pub fn pos(&self) -> Option<&str> {
        self.pos.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pronunciation {
    /// Request phonetic notation; `Some(false)` drops the section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipa: Option<bool>,
}
