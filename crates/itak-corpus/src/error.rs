#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Corpus file not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
