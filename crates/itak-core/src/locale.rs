use std::borrow::Cow;

use itak_types::PartOfSpeech;

use crate::style::Style;
use crate::templates::english_pos_label;

/// Target wiki. Every piece of locale-dependent text comes from the tables
/// below, so a new wiki only needs new rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    En,
    #[default]
    Ja,
}

/// Fixed section headings below the language heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Pronunciation,
    Etymology,
    Usage,
    DerivedTerms,
    RelatedTerms,
    Synonyms,
    Antonyms,
    References,
}

impl Locale {
    /// Parse a two-letter code; anything but "en" is the Japanese wiki
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Locale::En,
            _ => Locale::Ja,
        }
    }

    pub fn resolve(code: Option<&str>) -> Self {
        code.map(Self::from_code).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    pub fn style(self) -> Style {
        Style::for_locale(self)
    }

    /// Title of the top-level language heading
    pub fn language_heading(self) -> &'static str {
        match self {
            Locale::En => "Ainu",
            Locale::Ja => "{{L|ain}}",
        }
    }

    /// Line directly under the language heading
    pub fn script_line(self) -> Option<&'static str> {
        match self {
            Locale::En => None,
            Locale::Ja => Some("{{ain-kana}}"),
        }
    }

    /// Static phonetic placeholder under the pronunciation heading
    pub fn pronunciation_line(self) -> &'static str {
        match self {
            Locale::En => "* {{IPA|ain|...}}",
            Locale::Ja => "* {{ain-IPA}}",
        }
    }

    pub fn section_title(self, section: Section) -> &'static str {
        match (self, section) {
            (Locale::En, Section::Pronunciation) => "Pronunciation",
            (Locale::En, Section::Etymology) => "Etymology",
            (Locale::En, Section::Usage) => "Usage",
            (Locale::En, Section::DerivedTerms) => "Derived terms",
            (Locale::En, Section::RelatedTerms) => "Related terms",
            (Locale::En, Section::Synonyms) => "Synonyms",
            (Locale::En, Section::Antonyms) => "Antonyms",
            (Locale::En, Section::References) => "References",
            (Locale::Ja, Section::Pronunciation) => "{{pron}}",
            (Locale::Ja, Section::Etymology) => "{{etym}}",
            (Locale::Ja, Section::Usage) => "{{usage}}",
            (Locale::Ja, Section::DerivedTerms) => "{{drv}}",
            (Locale::Ja, Section::RelatedTerms) => "{{rel}}",
            (Locale::Ja, Section::Synonyms) => "{{syn}}",
            (Locale::Ja, Section::Antonyms) => "{{ant}}",
            (Locale::Ja, Section::References) => "{{reference}}",
        }
    }

    /// Part-of-speech heading: a label on the English wiki, a macro elsewhere
    pub fn pos_heading(self, pos: &PartOfSpeech) -> Cow<'_, str> {
        match self {
            Locale::En => english_pos_label(pos),
            Locale::Ja => Cow::Owned(format!("{{{{{}}}}}", pos.as_tag())),
        }
    }
}
