//! Font loading and integrity checks

pub mod integrity;
pub mod name_text;
pub mod source;

#[cfg(test)]
pub(crate) mod fixtures;

pub use integrity::{check_structure, Inspection, IntegrityValidator, MIN_FONT_SIZE};
pub use source::{FontHandle, FontLoader, HeadTable, LoadError, NameRecord, SfntFont, SfntLoader};
