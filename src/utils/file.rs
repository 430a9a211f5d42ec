use std::fs;
use std::path::Path;

use log::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::models::{Candidate, Config};

/// Recursively collect font candidates under the configured root, sorted by path
pub fn find_font_files(config: &Config) -> Result<Vec<Candidate>> {
    let root = &config.root;
    if !root.is_dir() {
        return Err(Error::InvalidPath(root.clone()));
    }

    let mut candidates = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                if e.depth() == 0 {
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("walk failed"));
                    return Err(Error::io(root, source));
                }
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_font_extension(entry.path(), config) {
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => {
                debug!("Found candidate: {}", entry.path().display());
                candidates.push(Candidate::new(entry.path(), metadata.len()));
            }
            Err(e) => warn!("Skipping {}: {}", entry.path().display(), e),
        }
    }

    candidates.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(candidates)
}

fn has_font_extension(path: &Path, config: &Config) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| config.matches_extension(ext))
        .unwrap_or(false)
}

/// Remove a single file
pub fn remove_font_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| Error::io(path, e))
}
