use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Custom error type for the font integrity checker
#[derive(Debug, Error)]
pub enum Error {
    /// IO operations errors
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Invalid file or directory path
    #[error("'{}' is not a valid directory", .0.display())]
    InvalidPath(PathBuf),
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
    /// Worker pool could not be created
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    /// Reading the confirmation answer failed
    #[error("Prompt error: {0}")]
    Prompt(#[source] io::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for font-integrity operations
pub type Result<T> = std::result::Result<T, Error>;
