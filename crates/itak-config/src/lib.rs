use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::corpus::CorpusConfig;
use self::log::LogConfig;
use self::render::RenderConfig;

pub mod corpus;
pub mod log;
pub mod render;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub corpus: CorpusConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults overridden by the process environment
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Read a JSON config file; missing keys keep their defaults.
    /// Environment variables win over the file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_vars(path, |key| env::var(key).ok())
    }

    /// `load` with overrides taken from `var` instead of the environment
    pub fn load_with_vars(
        path: &Path,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)?;
        config.apply_vars(var);
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        self.apply_vars(|key| env::var(key).ok());
    }

    /// Apply overrides from any variable source
    pub fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(locale) = var("ITAK_LOCALE") {
            self.render.locale = locale;
        }

        if let Some(path) = var("ITAK_CORPUS_PATH") {
            self.corpus.path = Some(path);
        }

        if let Some(max) = var("ITAK_MAX_EXAMPLES").and_then(|v| v.parse().ok()) {
            self.corpus.max_examples = max;
        }

        if let Some(filter) = var("ITAK_LOG") {
            self.log.filter = filter;
        }

        if let Some(json) = var("ITAK_LOG_JSON").and_then(|v| v.parse().ok()) {
            self.log.json = json;
        }
    }
}
