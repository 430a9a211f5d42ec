//! Finds corrupted OpenType fonts in a directory tree and optionally removes them.

pub mod app;
pub mod cli;
pub mod error;
pub mod font;
pub mod models;
pub mod report;
pub mod scanner;
pub mod utils;

pub use app::run;
pub use error::{Error, Result};
