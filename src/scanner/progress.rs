use std::io::{self, Write};

use super::session::Progress;
use crate::models::VerdictRecord;

/// Receives one call per finished candidate, serialized by the session lock
pub trait ProgressReporter: Sync {
    fn on_record(&self, progress: Progress, record: &VerdictRecord);
}

/// Prints `[n/total] (pct%) file - status` lines to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

impl ProgressReporter for ConsoleProgress {
    fn on_record(&self, progress: Progress, record: &VerdictRecord) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        // Progress is best effort; a closed stdout must not kill a worker
        let _ = write_progress_line(&mut out, progress, record);
    }
}

pub fn write_progress_line<W: Write>(
    out: &mut W,
    progress: Progress,
    record: &VerdictRecord,
) -> io::Result<()> {
    let status = if record.is_valid() { "OK" } else { "CORRUPTED" };
    writeln!(
        out,
        "[{}/{}] ({:.1}%) {} - {}",
        progress.processed,
        progress.total,
        progress.percent(),
        record.candidate.file_name(),
        status
    )?;
    if !record.is_valid() {
        writeln!(out, "  └─ {}", record.verdict.reason())?;
    }
    Ok(())
}
