use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use log::{error, info};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use super::progress::ProgressReporter;
use super::session::{ScanOutcome, ScanSession};
use crate::error::{Error, Result};
use crate::font::integrity::{Inspection, IntegrityValidator, UNKNOWN_NAME};
use crate::font::source::FontLoader;
use crate::models::{Candidate, Defect, Verdict, VerdictRecord};

/// Validate every candidate on a pool of `threads` workers.
///
/// Each candidate yields exactly one record. Validation runs outside the
/// session lock; a panic while validating one file becomes a fault record for
/// that file and the sweep carries on.
pub fn run_sweep<L, P>(
    candidates: &[Candidate],
    validator: &IntegrityValidator<L>,
    threads: usize,
    reporter: &P,
) -> Result<ScanOutcome>
where
    L: FontLoader,
    P: ProgressReporter,
{
    if threads == 0 {
        return Err(Error::Config("thread count must be at least 1".to_string()));
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("font-check-{}", i))
        .build()?;

    let session = ScanSession::new(candidates.len());
    info!(
        "Checking {} candidates on {} workers",
        candidates.len(),
        threads
    );

    pool.install(|| {
        candidates.par_iter().for_each(|candidate| {
            let record = validate_contained(validator, candidate);
            session.record(record, |progress, record| {
                reporter.on_record(progress, record)
            });
        });
    });

    Ok(session.into_outcome())
}

fn validate_contained<L: FontLoader>(
    validator: &IntegrityValidator<L>,
    candidate: &Candidate,
) -> VerdictRecord {
    let inspection = match catch_unwind(AssertUnwindSafe(|| validator.inspect(candidate))) {
        Ok(inspection) => inspection,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(
                "Validation of {} failed unexpectedly: {}",
                candidate.path.display(),
                message
            );
            Inspection {
                verdict: Verdict::Corrupted(Defect::Fault(message)),
                display_name: UNKNOWN_NAME.to_string(),
            }
        }
    };

    VerdictRecord {
        candidate: candidate.clone(),
        verdict: inspection.verdict,
        display_name: inspection.display_name,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
