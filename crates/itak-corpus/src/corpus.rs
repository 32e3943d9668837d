use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use itak_types::Example;
use serde::{Deserialize, Deserializer};
use unicode_normalization::UnicodeNormalization;

use crate::error::CorpusError;
use crate::record::ExampleRecord;

/// Anything that can supply example sentences for a term
pub trait ExampleSource {
    /// Example rows for a term, in a stable order
    fn lookup(&self, term: &str) -> Vec<ExampleRecord>;

    /// At most `limit` examples ready to attach to a definition
    fn examples_for(&self, term: &str, limit: usize) -> Vec<Example> {
        self.lookup(term)
            .iter()
            .take(limit)
            .map(ExampleRecord::to_example)
            .collect()
    }
}

// JSON layout of a corpus dump: tokens -> sentences -> documents
#[derive(Debug, Deserialize)]
struct CorpusJson {
    #[serde(default)]
    tokens: Vec<TokenRow>,
    #[serde(default)]
    sentences: Vec<SentenceRow>,
    #[serde(default)]
    documents: Vec<DocumentRow>,
}

#[derive(Debug, Deserialize)]
struct TokenRow {
    sentence_id: u64,
    token: String,
    #[serde(default)]
    lemma: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SentenceRow {
    id: u64,
    ain: String,
    jpn: String,
    #[serde(default)]
    dialect: Option<String>,
    document_id: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct DocumentRow {
    id: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    book: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    year: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    dialect: Option<String>,
}

/// Years show up both as `1996` and `"1996"` in dumps
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn normalize(term: &str) -> String {
    term.trim().nfkc().collect()
}

/// In-memory example corpus
pub struct SentenceCorpus {
    /// Normalized token or lemma -> sentence ids
    token_index: HashMap<String, BTreeSet<u64>>,
    sentences: HashMap<u64, SentenceRow>,
    documents: HashMap<u64, DocumentRow>,
}

impl SentenceCorpus {
    pub fn new() -> Self {
        Self {
            token_index: HashMap::new(),
            sentences: HashMap::new(),
            documents: HashMap::new(),
        }
    }

    /// Load a corpus dump from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, CorpusError> {
        let data: CorpusJson = serde_json::from_str(json_str)?;

        let mut token_index: HashMap<String, BTreeSet<u64>> = HashMap::new();
        for row in data.tokens {
            token_index
                .entry(normalize(&row.token))
                .or_default()
                .insert(row.sentence_id);
            if let Some(lemma) = row.lemma.as_deref().filter(|l| !l.is_empty()) {
                token_index
                    .entry(normalize(lemma))
                    .or_default()
                    .insert(row.sentence_id);
            }
        }

        let sentences = data.sentences.into_iter().map(|s| (s.id, s)).collect();
        let documents = data.documents.into_iter().map(|d| (d.id, d)).collect();

        Ok(Self {
            token_index,
            sentences,
            documents,
        })
    }

    pub fn load_from_file(path: &Path) -> Result<Self, CorpusError> {
        if !path.exists() {
            return Err(CorpusError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading example corpus from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let corpus = Self::from_json(&json)?;
        tracing::info!(
            "Loaded {} sentences from {} documents",
            corpus.sentence_count(),
            corpus.documents.len()
        );
        Ok(corpus)
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}

impl Default for SentenceCorpus {
    fn default() -> Self {
        Self::new()
    }
}

impl ExampleSource for SentenceCorpus {
    fn lookup(&self, term: &str) -> Vec<ExampleRecord> {
        let Some(ids) = self.token_index.get(&normalize(term)) else {
            return vec![];
        };

        ids.iter()
            .filter_map(|id| self.sentences.get(id))
            .filter_map(|sentence| {
                let Some(doc) = self.documents.get(&sentence.document_id) else {
                    tracing::warn!(
                        "Sentence {} refers to missing document {}",
                        sentence.id,
                        sentence.document_id
                    );
                    return None;
                };

                Some(ExampleRecord {
                    ain: sentence.ain.clone(),
                    jpn: sentence.jpn.clone(),
                    sentence_dialect: sentence.dialect.clone(),
                    title: doc.title.clone(),
                    book: doc.book.clone(),
                    author: doc.author.clone(),
                    year: doc.year.clone(),
                    url: doc.url.clone(),
                    doc_dialect: doc.dialect.clone(),
                })
            })
            .collect()
    }
}
