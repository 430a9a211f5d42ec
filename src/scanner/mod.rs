//! Concurrent integrity sweep over a set of candidates

pub mod dispatcher;
pub mod progress;
pub mod session;

pub use dispatcher::run_sweep;
pub use progress::{ConsoleProgress, ProgressReporter};
pub use session::{Progress, ScanOutcome, ScanSession};
