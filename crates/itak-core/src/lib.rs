pub mod citation;
pub mod error;
pub mod header;
pub mod locale;
pub mod render;
pub mod sentence;
pub mod style;
pub mod templates;

#[cfg(test)]
mod tests;

pub use error::{ValidationError, validate};
pub use locale::Locale;
pub use render::{render, render_code, render_page, render_with};
pub use sentence::{PassThrough, SentenceFormatter, format_sentence};
pub use style::Style;

/// Language code passed to every Wiktionary macro
pub const LANG_CODE: &str = "ain";
