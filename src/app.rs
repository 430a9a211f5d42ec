use std::io::{self, Write};

use log::debug;

use crate::cli::confirm_deletion_on_terminal;
use crate::error::{Error, Result};
use crate::font::{IntegrityValidator, SfntLoader};
use crate::models::{Config, DeletionMode};
use crate::report::{execute_deletion, write_summary};
use crate::scanner::{run_sweep, ConsoleProgress, ScanOutcome};
use crate::utils::find_font_files;

/// Walk, validate, report and (when asked and confirmed) delete.
/// A root that is not a directory surfaces from the walk as [`Error::InvalidPath`].
pub fn run(config: &Config) -> Result<ScanOutcome> {
    println!("Font integrity check: {}", config.root.display());
    println!("Mode: {}", config.deletion);
    println!("Threads: {}", config.threads);
    println!();
    debug!("Extensions: {:?}, lazy loading: {}", config.extensions, config.lazy);

    let candidates = find_font_files(config)?;
    if candidates.is_empty() {
        println!("No font files found in '{}'.", config.root.display());
    } else {
        println!(
            "Checking {} font files with {} threads...\n",
            candidates.len(),
            config.threads
        );
    }

    let validator = IntegrityValidator::new(SfntLoader, config.lazy);
    let outcome = run_sweep(&candidates, &validator, config.threads, &ConsoleProgress)?;
    println!(
        "\nScan complete: {}/{} files checked",
        outcome.processed, outcome.total
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, &outcome).map_err(|e| Error::io("<stdout>", e))?;

    if outcome.has_corrupted() {
        writeln!(out).map_err(|e| Error::io("<stdout>", e))?;
        drop(out);
        delete_if_confirmed(config, &outcome)?;
    }

    Ok(outcome)
}

fn delete_if_confirmed(config: &Config, outcome: &ScanOutcome) -> Result<()> {
    let mode = match config.deletion {
        DeletionMode::DryRun => DeletionMode::DryRun,
        DeletionMode::Live if config.assume_yes => DeletionMode::Live,
        DeletionMode::Live => {
            if confirm_deletion_on_terminal(outcome.corrupted.len())? {
                DeletionMode::Live
            } else {
                println!("Deletion cancelled.");
                return Ok(());
            }
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_deletion(&mut out, outcome, mode).map_err(|e| Error::io("<stdout>", e))?;
    Ok(())
}
