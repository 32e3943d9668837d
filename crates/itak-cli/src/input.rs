use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use itak_corpus::ExampleSource;
use itak_types::Entry;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum EntryInput {
    Many(Vec<Entry>),
    One(Box<Entry>),
}

/// Read entry JSON from a file, or from stdin when no path is given
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read entry file {}", path.display())),
        None => {
            if atty::is(atty::Stream::Stdin) {
                anyhow::bail!("No --input given and stdin is a terminal");
            }
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read entries from stdin")?;
            Ok(buf)
        }
    }
}

/// Parse one entry or an array of entries and check each is renderable
pub fn parse_entries(json: &str) -> Result<Vec<Entry>> {
    let input: EntryInput = serde_json::from_str(json).context("Invalid entry JSON")?;
    let entries = match input {
        EntryInput::Many(entries) => entries,
        EntryInput::One(entry) => vec![*entry],
    };

    for entry in &entries {
        itak_core::validate(entry).with_context(|| format!("Cannot render '{}'", entry.lemma))?;
    }

    Ok(entries)
}

/// How many corpus examples `--attach` asks for; `None` means attach nothing
pub fn attach_limit(flag: Option<Option<usize>>, configured: usize) -> Option<usize> {
    flag.map(|n| n.unwrap_or(configured))
}

/// Append corpus examples for the lemma to the entry's first definition
pub fn attach_examples(entry: &mut Entry, source: &dyn ExampleSource, limit: usize) {
    let examples = source.examples_for(&entry.lemma, limit);
    if examples.is_empty() {
        tracing::debug!("No corpus examples for {}", entry.lemma);
        return;
    }

    tracing::info!("Attaching {} corpus examples to {}", examples.len(), entry.lemma);
    if let Some(first) = entry.definitions.first_mut() {
        first.examples.extend(examples);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itak_corpus::ExampleRecord;
    use itak_types::Attribution;

    struct Fixed;

    impl ExampleSource for Fixed {
        fn lookup(&self, term: &str) -> Vec<ExampleRecord> {
            if term != "kor" {
                return vec![];
            }
            (1..=3)
                .map(|n| ExampleRecord {
                    ain: format!("sentence {n}"),
                    jpn: format!("文 {n}"),
                    sentence_dialect: None,
                    title: Some("Title".into()),
                    book: None,
                    author: None,
                    year: None,
                    url: None,
                    doc_dialect: None,
                })
                .collect()
        }
    }

    #[test]
    fn attaches_only_when_asked() {
        assert_eq!(attach_limit(None, 3), None);
        assert_eq!(attach_limit(Some(None), 3), Some(3));
        assert_eq!(attach_limit(Some(Some(1)), 3), Some(1));
    }

    #[test]
    fn accepts_object_or_array() {
        let one = parse_entries(r#"{"lemma":"ape","pos":"noun","definitions":[{"gloss":"fire"}]}"#)
            .unwrap();
        assert_eq!(one.len(), 1);

        let many = parse_entries(
            r#"[{"lemma":"ape","pos":"noun","definitions":[{"gloss":"fire"}]},
                {"lemma":"kor","pos":"verb","definitions":[{"gloss":"to have"}]}]"#,
        )
        .unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].lemma, "kor");
    }

    #[test]
    fn rejects_invalid_entries() {
        let err = parse_entries(r#"{"lemma":"ape","pos":"noun","definitions":[]}"#).unwrap_err();
        assert!(format!("{err:#}").contains("no definitions"));
        assert!(parse_entries("not json").is_err());
    }

    #[test]
    fn attaches_up_to_limit() {
        let mut entries =
            parse_entries(r#"{"lemma":"kor","pos":"verb","definitions":[{"gloss":"to have"}]}"#)
                .unwrap();
        attach_examples(&mut entries[0], &Fixed, 2);

        let examples = &entries[0].definitions[0].examples;
        assert_eq!(examples.len(), 2);
        assert!(matches!(examples[0].attribution, Attribution::Source(_)));
    }

    #[test]
    fn unknown_lemma_leaves_entry_alone() {
        let mut entries =
            parse_entries(r#"{"lemma":"ape","pos":"noun","definitions":[{"gloss":"fire"}]}"#)
                .unwrap();
        let before = entries[0].clone();
        attach_examples(&mut entries[0], &Fixed, 2);
        assert_eq!(entries[0], before);
    }
}
