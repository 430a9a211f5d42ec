use std::sync::{Mutex, MutexGuard, PoisonError};

use log::error;

use crate::models::VerdictRecord;

/// Position of the sweep right after a record was added
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.processed as f64 * 100.0 / self.total as f64
        }
    }
}

#[derive(Debug, Default)]
struct SessionState {
    processed: usize,
    valid: Vec<VerdictRecord>,
    corrupted: Vec<VerdictRecord>,
}

/// Shared state of one sweep. All mutation goes through [`ScanSession::record`].
#[derive(Debug)]
pub struct ScanSession {
    total: usize,
    state: Mutex<SessionState>,
}

impl ScanSession {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Append the record to its set and bump the counter in one critical
    /// section. `on_progress` runs while the lock is still held, so progress
    /// output follows counter order exactly. Records past `total` are
    /// dropped so the counter never overruns.
    pub(crate) fn record<F>(&self, record: VerdictRecord, on_progress: F)
    where
        F: FnOnce(Progress, &VerdictRecord),
    {
        let mut state = self.lock();
        if state.processed >= self.total {
            error!(
                "Dropping record for {}: all {} candidates already recorded",
                record.path().display(),
                self.total
            );
            return;
        }

        state.processed += 1;
        let progress = Progress {
            processed: state.processed,
            total: self.total,
        };

        let set = if record.is_valid() {
            &mut state.valid
        } else {
            &mut state.corrupted
        };
        set.push(record);
        if let Some(stored) = set.last() {
            on_progress(progress, stored);
        }
    }

    /// Finish the sweep and hand the results to reporting
    pub fn into_outcome(self) -> ScanOutcome {
        let state = self
            .state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        ScanOutcome {
            total: self.total,
            processed: state.processed,
            valid: state.valid,
            corrupted: state.corrupted,
        }
    }

    // A panicking progress callback must not wedge the remaining workers
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Final, read-only results of a sweep
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub total: usize,
    pub processed: usize,
    pub valid: Vec<VerdictRecord>,
    pub corrupted: Vec<VerdictRecord>,
}

impl ScanOutcome {
    pub fn corrupted_bytes(&self) -> u64 {
        self.corrupted.iter().map(|r| r.candidate.size).sum()
    }

    pub fn has_corrupted(&self) -> bool {
        !self.corrupted.is_empty()
    }
}
