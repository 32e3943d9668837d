use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use itak_config::Config;
use itak_core::Locale;
use itak_corpus::{ExampleResponse, ExampleSource, SentenceCorpus};

mod cli;
mod input;
mod logging;

use self::cli::{Cli, Command};

fn main() {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("{e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::new(),
    };
    if cli.log_json {
        config.log.json = true;
    }

    logging::init(&config.log);

    match cli.command {
        Command::Render {
            input,
            locale,
            corpus,
            attach,
        } => {
            let locale = Locale::from_code(locale.as_deref().unwrap_or(&config.render.locale));
            let json = input::read_source(input.as_deref())?;
            let mut entries = input::parse_entries(&json)?;

            if let Some(limit) = input::attach_limit(attach, config.corpus.max_examples) {
                match open_corpus(corpus, &config)? {
                    Some(corpus) => {
                        for entry in &mut entries {
                            input::attach_examples(entry, &corpus, limit);
                        }
                    }
                    None => tracing::warn!("--attach given without a corpus, no examples attached"),
                }
            }

            tracing::info!("Rendering {} entries for {}", entries.len(), locale.as_str());
            println!("{}", itak_core::render_page(&entries, locale));
        }
        Command::Examples { term, corpus } => {
            let corpus = open_corpus(corpus, &config)?
                .context("No corpus configured, pass --corpus or set ITAK_CORPUS_PATH")?;

            let response = ExampleResponse {
                examples: corpus.lookup(&term),
            };
            tracing::info!("Found {} examples for {}", response.examples.len(), term);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

/// Load the corpus named on the command line, else the configured one
fn open_corpus(flag: Option<PathBuf>, config: &Config) -> Result<Option<SentenceCorpus>> {
    let path = flag.or_else(|| config.corpus.path.as_ref().map(PathBuf::from));

    match path {
        Some(path) => {
            let corpus = SentenceCorpus::load_from_file(Path::new(&path))
                .with_context(|| format!("Failed to load corpus {}", path.display()))?;
            Ok(Some(corpus))
        }
        None => Ok(None),
    }
}
