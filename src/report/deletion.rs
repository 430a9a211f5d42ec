use std::io::{self, Write};

use log::{info, warn};

use crate::models::DeletionMode;
use crate::scanner::ScanOutcome;
use crate::utils::remove_font_file;

/// Counts from one deletion pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeletionReport {
    pub deleted: usize,
    pub failed: usize,
    /// Fault records, which are never deleted
    pub skipped: usize,
}

/// Remove (or in dry-run mode, list) the corrupted files of a sweep.
///
/// A failed removal is logged and counted; later files are still attempted.
pub fn execute_deletion<W: Write>(
    out: &mut W,
    outcome: &ScanOutcome,
    mode: DeletionMode,
) -> io::Result<DeletionReport> {
    let mut report = DeletionReport::default();

    if !outcome.has_corrupted() {
        writeln!(out, "No corrupted fonts to delete.")?;
        return Ok(report);
    }

    if mode == DeletionMode::Live {
        writeln!(out, "Deleting {} corrupted fonts...", outcome.corrupted.len())?;
    }

    for record in &outcome.corrupted {
        let name = record.candidate.file_name();

        if !record.is_deletable() {
            writeln!(out, "Skipped: {} ({})", name, record.verdict.reason())?;
            report.skipped += 1;
            continue;
        }

        match mode {
            DeletionMode::DryRun => {
                writeln!(out, "[DRY RUN] Would delete: {}", record.path().display())?;
            }
            DeletionMode::Live => match remove_font_file(record.path()) {
                Ok(()) => {
                    info!("Deleted {}", record.path().display());
                    writeln!(out, "Deleted: {}", name)?;
                    report.deleted += 1;
                }
                Err(e) => {
                    warn!("{}", e);
                    writeln!(out, "Failed to delete: {} - {}", name, e)?;
                    report.failed += 1;
                }
            },
        }
    }

    match mode {
        DeletionMode::DryRun => {
            writeln!(out, "\n[DRY RUN] No files were deleted.")?;
            writeln!(out, "Run again with --delete to remove them.")?;
        }
        DeletionMode::Live => {
            writeln!(out, "\n{} files deleted.", report.deleted)?;
            if report.failed > 0 {
                writeln!(out, "{} files could not be deleted.", report.failed)?;
            }
        }
    }

    Ok(report)
}
