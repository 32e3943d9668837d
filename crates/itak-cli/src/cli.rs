use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Render Ainu dictionary entries as Wiktionary markup
#[derive(Debug, Parser)]
#[command(name = "itak", version, about)]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render one entry or an array of entries
    Render {
        /// Entry JSON, read from stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Target wiki ("en" or "ja")
        #[arg(short, long)]
        locale: Option<String>,

        /// Example corpus dump to pull quotations from
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Append corpus examples to the first definition. Without a value the
        /// configured `max_examples` is used; nothing is attached unless given.
        #[arg(long, num_args = 0..=1, value_name = "N")]
        attach: Option<Option<usize>>,
    },

    /// Look up corpus examples for a term
    Examples {
        term: String,

        #[arg(long)]
        corpus: Option<PathBuf>,
    },
}
