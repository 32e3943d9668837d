use std::borrow::Cow;
use std::fmt;

use itak_types::{Entry, LinkMeta, PartOfSpeech};

use crate::LANG_CODE;

/// A wiki macro invocation: `{{name|arg|key=value}}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: &'static str,
    params: Vec<String>,
}

impl Template {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            params: Vec::new(),
        }
    }

    /// Positional argument
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.params.push(value.into());
        self
    }

    /// Keyed argument
    pub fn keyed(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.params.push(format!("{key}={value}"));
        self
    }

    /// Keyed argument, skipped when the value is missing or empty
    pub fn keyed_opt(self, key: &str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => self.keyed(key, v),
            None => self,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{{{}", self.name)?;
        for param in &self.params {
            write!(f, "|{param}")?;
        }
        write!(f, "}}}}")
    }
}

/// English wiki heading for a part of speech. Tags outside the table pass
/// through verbatim.
pub fn english_pos_label(pos: &PartOfSpeech) -> Cow<'_, str> {
    let label = match pos {
        PartOfSpeech::Noun => "Noun",
        PartOfSpeech::Verb => "Verb",
        PartOfSpeech::Adjective => "Adjective",
        PartOfSpeech::Adverb => "Adverb",
        PartOfSpeech::Participle => "Participle",
        PartOfSpeech::Auxiliary => "Auxiliary verb",
        PartOfSpeech::Particle => "Particle",
        PartOfSpeech::Pronoun => "Pronoun",
        PartOfSpeech::Preposition => "Preposition",
        PartOfSpeech::Conjunction => "Conjunction",
        PartOfSpeech::Interjection => "Interjection",
        PartOfSpeech::Root => "Root",
        PartOfSpeech::Prefix => "Prefix",
        PartOfSpeech::Suffix => "Suffix",
        PartOfSpeech::Other(tag) => return Cow::Borrowed(tag),
    };
    Cow::Borrowed(label)
}

/// `{{affix|ain|a|b|t1=..|pos2=..}}`: every component term first, then the
/// keyed gloss/pos arguments numbered by 1-based position.
pub fn affix(components: &[LinkMeta]) -> Template {
    let template = components
        .iter()
        .fold(Template::new("affix").arg(LANG_CODE), |t, meta| {
            t.arg(meta.term.as_str())
        });

    components
        .iter()
        .enumerate()
        .fold(template, |t, (i, meta)| {
            let n = i + 1;
            t.keyed_opt(&format!("t{n}"), meta.tran())
                .keyed_opt(&format!("pos{n}"), meta.pos())
        })
}

/// Headword macro: `ain-verb` for verbs with a transitivity class,
/// otherwise the generic `head`.
pub fn headword(entry: &Entry) -> Template {
    match (&entry.pos, entry.transitivity()) {
        (PartOfSpeech::Verb, Some(transitivity)) => Template::new("ain-verb")
            .arg(transitivity.class().to_string())
            .keyed_opt("pl", entry.pos_args.as_ref().and_then(|a| a.plural())),
        (pos, _) => Template::new("head").arg(LANG_CODE).arg(pos.as_tag()),
    }
}

/// Full headword line: the headword macro followed by the optional subtype
/// and dialect labels.
pub fn headword_line(entry: &Entry) -> String {
    let mut line = headword(entry).to_string();

    if let Some(sub_type) = entry.sub_type() {
        let context = Template::new("context").arg(sub_type).keyed("lang", LANG_CODE);
        line.push(' ');
        line.push_str(&context.to_string());
    }

    if !entry.dialects.is_empty() {
        let labels = entry
            .dialects
            .iter()
            .fold(Template::new("tlb").arg(LANG_CODE), |t, d| t.arg(d.as_str()));
        line.push(' ');
        line.push_str(&labels.to_string());
    }

    line
}

/// Bullet line for a related term: `* {{l|ain|term}} (gloss)`
pub fn link_line(item: &LinkMeta) -> String {
    let link = Template::new("l").arg(LANG_CODE).arg(item.term.as_str());
    match item.tran() {
        Some(tran) => format!("* {link} ({tran})"),
        None => format!("* {link}"),
    }
}
