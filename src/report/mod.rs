//! Summaries and the deletion pass that follow a sweep

pub mod deletion;
pub mod summary;

pub use deletion::{execute_deletion, DeletionReport};
pub use summary::write_summary;
