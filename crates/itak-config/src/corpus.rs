use serde::{Deserialize, Serialize};

fn default_max_examples() -> usize {
    3
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CorpusConfig {
    /// Example corpus dump, lookups are disabled without one
    pub path: Option<String>,
    /// Examples attached per entry
    #[serde(default = "default_max_examples")]
    pub max_examples: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_examples: default_max_examples(),
        }
    }
}
