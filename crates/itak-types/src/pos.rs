use serde::{Deserialize, Serialize};

/// Grammatical category of an entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Participle,
    Auxiliary,
    Particle,
    Pronoun,
    Preposition,
    Conjunction,
    Interjection,
    Root,
    Prefix,
    Suffix,
    /// Tag outside the fixed set, kept verbatim
    Other(String),
}

impl PartOfSpeech {
    /// Parse a lowercase tag ("noun", "adj", ...)
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "noun" => PartOfSpeech::Noun,
            "verb" => PartOfSpeech::Verb,
            "adj" => PartOfSpeech::Adjective,
            "adv" => PartOfSpeech::Adverb,
            "participle" => PartOfSpeech::Participle,
            "aux" => PartOfSpeech::Auxiliary,
            "particle" => PartOfSpeech::Particle,
            "pron" => PartOfSpeech::Pronoun,
            "prep" => PartOfSpeech::Preposition,
            "conj" => PartOfSpeech::Conjunction,
            "interj" => PartOfSpeech::Interjection,
            "root" => PartOfSpeech::Root,
            "prefix" => PartOfSpeech::Prefix,
            "suffix" => PartOfSpeech::Suffix,
            other => PartOfSpeech::Other(other.to_string()),
        }
    }

    /// Tag as used in headword and heading macros
    pub fn as_tag(&self) -> &str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
            PartOfSpeech::Participle => "participle",
            PartOfSpeech::Auxiliary => "aux",
            PartOfSpeech::Particle => "particle",
            PartOfSpeech::Pronoun => "pron",
            PartOfSpeech::Preposition => "prep",
            PartOfSpeech::Conjunction => "conj",
            PartOfSpeech::Interjection => "interj",
            PartOfSpeech::Root => "root",
            PartOfSpeech::Prefix => "prefix",
            PartOfSpeech::Suffix => "suffix",
            PartOfSpeech::Other(tag) => tag,
        }
    }
}

impl From<String> for PartOfSpeech {
    fn from(tag: String) -> Self {
        PartOfSpeech::from_tag(&tag)
    }
}

impl From<PartOfSpeech> for String {
    fn from(pos: PartOfSpeech) -> Self {
        pos.as_tag().to_string()
    }
}

/// Verb valency class, numbered as the `ain-verb` macro expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Transitivity {
    Complete = 0,
    Intransitive = 1,
    Transitive = 2,
    Ditransitive = 3,
}

impl Transitivity {
    pub fn class(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Transitivity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Transitivity::Complete),
            1 => Ok(Transitivity::Intransitive),
            2 => Ok(Transitivity::Transitive),
            3 => Ok(Transitivity::Ditransitive),
            n => Err(format!("invalid transitivity class {n}, expected 0-3")),
        }
    }
}

impl From<Transitivity> for u8 {
    fn from(t: Transitivity) -> Self {
        t.class()
    }
}
