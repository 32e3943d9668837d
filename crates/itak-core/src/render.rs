use itak_types::{Entry, LinkMeta};

use crate::citation::example_line;
use crate::header::{format_heading, needs_blank_before};
use crate::locale::{Locale, Section};
use crate::sentence::{PassThrough, SentenceFormatter};
use crate::style::Style;
use crate::templates::{Template, affix, headword_line, link_line};

/// Output lines of one entry, joined with single line breaks at the end
struct Page {
    style: Style,
    lines: Vec<String>,
}

impl Page {
    fn new(style: Style) -> Self {
        Self {
            style,
            lines: Vec::new(),
        }
    }

    fn heading(&mut self, level: usize, title: &str) {
        if needs_blank_before(&self.style, self.lines.is_empty()) {
            self.lines.push(String::new());
        }
        self.lines.push(format_heading(level, title, &self.style));
    }

    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Render an entry as wikitext for the given wiki.
///
/// Expects a validated entry (see [`crate::validate`]); optional parts that
/// are missing or empty are left out rather than rejected.
pub fn render(entry: &Entry, locale: Locale) -> String {
    render_with(entry, locale, &PassThrough)
}

/// Same as [`render`], resolving the locale from a raw code first
pub fn render_code(entry: &Entry, code: &str) -> String {
    render(entry, Locale::from_code(code))
}

/// Render several entries onto one page
pub fn render_page(entries: &[Entry], locale: Locale) -> String {
    entries
        .iter()
        .map(|entry| render(entry, locale))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_with(entry: &Entry, locale: Locale, sentences: &dyn SentenceFormatter) -> String {
    tracing::debug!(lemma = %entry.lemma, locale = locale.as_str(), "rendering entry");

    let mut page = Page::new(locale.style());

    // Language heading and script conversion
    page.heading(2, locale.language_heading());
    if let Some(script) = locale.script_line() {
        page.line(script);
    }

    let wants_pronunciation = entry
        .pronunciation
        .and_then(|p| p.ipa)
        .unwrap_or(true);
    if wants_pronunciation {
        page.heading(3, locale.section_title(Section::Pronunciation));
        page.line(locale.pronunciation_line());
    }

    if !entry.etymology.is_empty() {
        page.heading(3, locale.section_title(Section::Etymology));
        page.line(affix(&entry.etymology).to_string());
    }

    page.heading(3, &locale.pos_heading(&entry.pos));
    page.line(headword_line(entry));

    for definition in &entry.definitions {
        page.line(format!("# {}", definition.gloss));
        for example in &definition.examples {
            let text = sentences.format(&example.text);
            page.line(example_line(&text, example, locale));
        }
    }

    if let Some(usage) = entry.usage() {
        page.heading(4, locale.section_title(Section::Usage));
        page.line(usage);
    }

    let groups: [(Section, &[LinkMeta]); 4] = [
        (Section::DerivedTerms, entry.derived.as_slice()),
        (Section::RelatedTerms, entry.related.as_slice()),
        (Section::Synonyms, entry.synonyms.as_slice()),
        (Section::Antonyms, entry.antonyms.as_slice()),
    ];
    for (section, items) in groups {
        if items.is_empty() {
            continue;
        }
        page.heading(4, locale.section_title(section));
        for item in items {
            page.line(link_line(item));
        }
    }

    if entry.has_attributed_examples() {
        page.heading(3, locale.section_title(Section::References));
        page.line(Template::new("reflist").to_string());
    }

    if entry.add_separator {
        page.line("----");
    }

    page.finish()
}
