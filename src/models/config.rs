use std::fmt;
use std::path::PathBuf;

/// Number of worker threads used when none is given
pub const DEFAULT_THREADS: usize = 8;

/// Extensions treated as font candidates when none are given
pub const DEFAULT_EXTENSIONS: &[&str] = &["otf"];

/// Configuration for one integrity sweep
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory to sweep recursively
    pub root: PathBuf,
    /// Enable debug output
    pub debug_mode: bool,
    /// What happens to corrupted files once the sweep is done
    pub deletion: DeletionMode,
    /// Skip the interactive confirmation before live deletion
    pub assume_yes: bool,
    /// Size of the worker pool
    pub threads: usize,
    /// Lowercase file extensions that mark a file as a candidate
    pub extensions: Vec<String>,
    /// Parse only the table directory when opening fonts
    pub lazy: bool,
}

/// Whether corrupted files are actually removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionMode {
    /// Report what would be deleted, touch nothing
    DryRun,
    /// Remove corrupted files after confirmation
    Live,
}

impl fmt::Display for DeletionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletionMode::DryRun => write!(f, "DRY RUN (nothing is deleted)"),
            DeletionMode::Live => write!(f, "DELETE corrupted files"),
        }
    }
}

impl Config {
    /// Create a dry-run configuration with default settings
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            debug_mode: false,
            deletion: DeletionMode::DryRun,
            assume_yes: false,
            threads: DEFAULT_THREADS,
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            lazy: true,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.deletion == DeletionMode::DryRun
    }

    /// Check whether a file extension selects a candidate
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions.iter().any(|wanted| *wanted == ext)
    }
}
