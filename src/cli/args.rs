use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::Parser;

use crate::models::{Config, DeletionMode, DEFAULT_EXTENSIONS, DEFAULT_THREADS};

/// Find corrupted OpenType fonts and optionally delete them
#[derive(Debug, Parser)]
#[command(name = "font-integrity", version, about)]
pub struct Args {
    /// Directory to scan recursively
    pub directory: PathBuf,

    /// Actually delete corrupted fonts (default is a dry run)
    #[arg(long)]
    pub delete: bool,

    /// Skip the confirmation prompt before deleting
    #[arg(long, short = 'y', requires = "delete")]
    pub yes: bool,

    /// Number of worker threads
    #[arg(long, short = 't', default_value_t = DEFAULT_THREADS,
          value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub threads: usize,

    /// Additional file extension to treat as a font (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Parse core tables when opening each font instead of only the table directory
    #[arg(long)]
    pub eager: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    pub fn into_config(self) -> Config {
        let mut extensions: Vec<String> =
            DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect();
        for ext in self.extensions {
            let ext = ext.trim_start_matches('.').to_lowercase();
            if !ext.is_empty() && !extensions.contains(&ext) {
                extensions.push(ext);
            }
        }

        Config {
            root: self.directory,
            debug_mode: self.debug,
            deletion: if self.delete {
                DeletionMode::Live
            } else {
                DeletionMode::DryRun
            },
            assume_yes: self.yes,
            threads: self.threads,
            extensions,
            lazy: !self.eager,
        }
    }
}
