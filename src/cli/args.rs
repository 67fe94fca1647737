use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::indexer::Autoindexer;

#[derive(Parser)]
#[command(
    name = "sphinx-autoindex",
    version,
    about = "Keep a Sphinx index.rst synchronized with a Python codebase"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Regenerate the directive region of the index file
    Generate {
        #[command(flatten)]
        project: ProjectOpts,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Exit non-zero if the index file is out of date
    Check {
        #[command(flatten)]
        project: ProjectOpts,
    },

    /// Print the discovered modules and their classes
    List {
        #[command(flatten)]
        project: ProjectOpts,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: ListFormat,
    },

    /// Regenerate whenever a source file changes
    Watch {
        #[command(flatten)]
        project: ProjectOpts,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}

/// Options shared by every subcommand.
#[derive(Debug, clap::Args)]
pub struct ProjectOpts {
    /// Project root to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Index file (default: docs/index.rst under the project root)
    #[arg(long, value_name = "FILE")]
    pub index: Option<PathBuf>,

    /// Only include modules whose dotted name starts with PREFIX (repeatable)
    #[arg(long = "prefix", value_name = "PREFIX")]
    pub prefixes: Vec<String>,

    /// Config file (default: autoindex.toml under the project root)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ProjectOpts {
    /// Merge flags over the project config and validate into an indexer.
    pub fn indexer(&self) -> Result<Autoindexer> {
        let config = Config::load(&self.path, self.config.as_deref())?;

        let index_path = match &self.index {
            Some(index) if index.is_absolute() => index.clone(),
            Some(index) => self.path.join(index),
            None => config.index_path(&self.path),
        };

        let prefixes = if self.prefixes.is_empty() {
            config.prefixes.clone()
        } else {
            self.prefixes.clone()
        };

        Ok(Autoindexer::new(&self.path, &index_path, prefixes)?)
    }
}
