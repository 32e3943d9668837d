use itak_types::{Attribution, Example, Source};

use crate::LANG_CODE;
use crate::locale::Locale;
use crate::templates::Template;

/// Bare usage example, listed with `#:`
const USAGE_MARKER: &str = "#:";
/// Quotation with a source, listed with `#*`
const QUOTE_MARKER: &str = "#*";

/// Build the list line for one example.
///
/// `text` is the example sentence after the sentence hook has run.
pub fn example_line(text: &str, example: &Example, locale: Locale) -> String {
    let (marker, template) = example_template(text, example, locale);
    format!("{marker} {template}")
}

/// Pick the list marker, macro and argument order for an example.
pub fn example_template(text: &str, example: &Example, locale: Locale) -> (&'static str, Template) {
    let translation = example.translation.as_str();

    match (&example.attribution, locale) {
        (Attribution::None, _) => (USAGE_MARKER, usage_example(text, translation)),
        (Attribution::Ref(key), Locale::En) => {
            (USAGE_MARKER, usage_example(text, translation).keyed("ref", key))
        }
        (Attribution::Ref(key), Locale::Ja) => {
            (QUOTE_MARKER, quote(text, translation).keyed("ref", key))
        }
        (Attribution::Source(source), Locale::Ja) => (
            QUOTE_MARKER,
            quote(text, translation).keyed("ref", format!("<ref>{}</ref>", citation(source))),
        ),
        (Attribution::Source(source), Locale::En) => {
            (QUOTE_MARKER, quote_book(text, translation, source))
        }
    }
}

fn usage_example(text: &str, translation: &str) -> Template {
    Template::new("ux").arg(LANG_CODE).arg(text).arg(translation)
}

fn quote(text: &str, translation: &str) -> Template {
    Template::new("quote").arg(LANG_CODE).arg(text).arg(translation)
}

/// `{{citation|author=|title=|publisher=|year=|url=}}`, present fields only.
/// `book` is reported as the publisher here.
pub fn citation(source: &Source) -> Template {
    Template::new("citation")
        .keyed_opt("author", source.author.as_deref())
        .keyed_opt("title", source.title.as_deref())
        .keyed_opt("publisher", source.book.as_deref())
        .keyed_opt("year", source.year.as_deref())
        .keyed_opt("url", source.url.as_deref())
}

/// `{{quote-book|ain|year=|author=|title=|chapter=|url=|text=|t=}}`.
/// On this wiki the book is the title and the record's title is the chapter.
pub fn quote_book(text: &str, translation: &str, source: &Source) -> Template {
    Template::new("quote-book")
        .arg(LANG_CODE)
        .keyed_opt("year", source.year.as_deref())
        .keyed_opt("author", source.author.as_deref())
        .keyed_opt("title", source.book.as_deref())
        .keyed_opt("chapter", source.title.as_deref())
        .keyed_opt("url", source.url.as_deref())
        .keyed_opt("text", Some(text))
        .keyed_opt("t", Some(translation))
}
