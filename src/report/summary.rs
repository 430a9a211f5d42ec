use std::io::{self, Write};

use crate::scanner::ScanOutcome;
use crate::utils::format_megabytes;

const RULE: &str = "============================================================";
const DIVIDER: &str = "------------------------------------------------------------";
const ENTRY_DIVIDER: &str = "----------------------------------------";

/// Print counts, the corrupted file listing and the total corrupted size
pub fn write_summary<W: Write>(out: &mut W, outcome: &ScanOutcome) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Scan results")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Valid fonts: {}", outcome.valid.len())?;
    writeln!(out, "Corrupted fonts: {}", outcome.corrupted.len())?;
    writeln!(out)?;

    if !outcome.has_corrupted() {
        return Ok(());
    }

    writeln!(out, "Corrupted fonts:")?;
    writeln!(out, "{}", DIVIDER)?;
    for record in &outcome.corrupted {
        writeln!(out, "File: {}", record.candidate.file_name())?;
        writeln!(out, "Path: {}", record.path().display())?;
        writeln!(out, "Name: {}", record.display_name)?;
        writeln!(out, "Size: {}", format_megabytes(record.candidate.size))?;
        writeln!(out, "Reason: {}", record.verdict.reason())?;
        writeln!(out, "{}", ENTRY_DIVIDER)?;
    }
    writeln!(
        out,
        "Total corrupted size: {}",
        format_megabytes(outcome.corrupted_bytes())
    )?;
    Ok(())
}
