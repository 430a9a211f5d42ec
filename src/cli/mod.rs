//! Command-line interface handling and user interaction

mod args;
mod interaction;

pub use args::Args;
pub use interaction::{confirm_deletion, confirm_deletion_on_terminal};
