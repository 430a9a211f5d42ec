//! Data types shared across the sweep

pub mod config;
pub mod font;

pub use config::{Config, DeletionMode, DEFAULT_EXTENSIONS, DEFAULT_THREADS};
pub use font::{Candidate, Defect, Verdict, VerdictRecord};
