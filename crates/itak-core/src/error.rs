use itak_types::Entry;

/// Structural problems that make an entry unrenderable
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("entry has an empty lemma")]
    EmptyLemma,

    #[error("entry '{lemma}' has no definitions")]
    NoDefinitions { lemma: String },

    #[error("definition {index} of '{lemma}' has an empty gloss")]
    EmptyGloss { lemma: String, index: usize },
}

/// Check the caller-side preconditions of `render`.
///
/// `render` itself never fails; run this on untrusted input first.
pub fn validate(entry: &Entry) -> Result<(), ValidationError> {
    if entry.lemma.trim().is_empty() {
        return Err(ValidationError::EmptyLemma);
    }

    if entry.definitions.is_empty() {
        return Err(ValidationError::NoDefinitions {
            lemma: entry.lemma.clone(),
        });
    }

    if let Some(index) = entry.definitions.iter().position(|d| d.gloss.trim().is_empty()) {
        return Err(ValidationError::EmptyGloss {
            lemma: entry.lemma.clone(),
            index: index + 1,
        });
    }

    Ok(())
}
