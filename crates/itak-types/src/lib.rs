pub mod entry;
pub mod example;
pub mod pos;

pub use entry::{Definition, Entry, LinkMeta, PosArgs, Pronunciation};
pub use example::{Attribution, Example, Source};
pub use pos::{PartOfSpeech, Transitivity};

/// Treat empty strings the same as a missing value
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
