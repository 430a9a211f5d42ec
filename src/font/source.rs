//! Access to font containers through `ttf-parser`
//!
//! The validator only needs a handful of capabilities from a font: table
//! presence, the `head` magic number and the `name` records. They are kept
//! behind [`FontLoader`] and [`FontHandle`] so the sweep can run against
//! other sources in tests.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use thiserror::Error;
use ttf_parser::{name, Face, RawFace, Tag};

use super::name_text::decode_name;

/// Byte length of a version 1.0 `head` table
pub const HEAD_TABLE_LEN: usize = 54;

const MAGIC_NUMBER_OFFSET: usize = 12;

/// Failure to open a font container
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Parse(#[from] ttf_parser::FaceParsingError),
    /// A `ttcf` file holds several faces and no face was selected
    #[error("font collection is not a single font")]
    Collection,
}

/// Opens fonts from disk
pub trait FontLoader: Sync {
    type Font: FontHandle;

    /// Open the font at `path`. A lazy open parses only the table directory.
    fn open(&self, path: &Path, lazy: bool) -> Result<Self::Font, LoadError>;
}

/// An opened font. Dropping the handle releases it.
pub trait FontHandle {
    fn has_table(&self, tag: Tag) -> bool;

    /// The `head` table, or `None` when it cannot be read
    fn head(&self) -> Option<HeadTable>;

    /// All `name` records in table order, or `None` when the table cannot be read
    fn names(&self) -> Option<Vec<NameRecord>>;
}

/// The fields of `head` the validator cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadTable {
    pub magic_number: u32,
}

impl HeadTable {
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < HEAD_TABLE_LEN {
            return None;
        }
        let bytes = data.get(MAGIC_NUMBER_OFFSET..MAGIC_NUMBER_OFFSET + 4)?;
        Some(Self {
            magic_number: u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        })
    }
}

/// One entry of the `name` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    pub name_id: u16,
    text: Option<String>,
}

impl NameRecord {
    pub fn new(name_id: u16, text: Option<String>) -> Self {
        Self { name_id, text }
    }

    /// Decoded text, `None` for encodings that cannot be decoded
    pub fn to_text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Loads sfnt containers (OpenType/TrueType) with `ttf-parser`
#[derive(Debug, Default, Clone, Copy)]
pub struct SfntLoader;

impl FontLoader for SfntLoader {
    type Font = SfntFont;

    fn open(&self, path: &Path, lazy: bool) -> Result<SfntFont, LoadError> {
        let data = fs::read(path)?;
        SfntFont::from_data(data, lazy)
    }
}

/// An sfnt font held in memory, with its table directory resolved
#[derive(Debug)]
pub struct SfntFont {
    data: Vec<u8>,
    tables: Vec<(Tag, u32, u32)>,
}

impl SfntFont {
    pub fn from_data(data: Vec<u8>, lazy: bool) -> Result<Self, LoadError> {
        if data.starts_with(b"ttcf") {
            return Err(LoadError::Collection);
        }

        let tables = {
            let raw = RawFace::parse(&data, 0)?;
            raw.table_records
                .into_iter()
                .map(|record| (record.tag, record.offset, record.length))
                .collect::<Vec<_>>()
        };

        if !lazy {
            Face::parse(&data, 0)?;
        }

        debug!("Opened font with {} tables (lazy: {})", tables.len(), lazy);
        Ok(Self { data, tables })
    }

    fn table(&self, tag: Tag) -> Option<&[u8]> {
        let (_, offset, length) = self.tables.iter().find(|(t, _, _)| *t == tag)?;
        let start = usize::try_from(*offset).ok()?;
        let end = start.checked_add(usize::try_from(*length).ok()?)?;
        self.data.get(start..end)
    }
}

impl FontHandle for SfntFont {
    fn has_table(&self, tag: Tag) -> bool {
        self.tables.iter().any(|(t, _, _)| *t == tag)
    }

    fn head(&self) -> Option<HeadTable> {
        HeadTable::parse(self.table(Tag::from_bytes(b"head"))?)
    }

    fn names(&self) -> Option<Vec<NameRecord>> {
        let table = name::Table::parse(self.table(Tag::from_bytes(b"name"))?)?;
        // Index access: a record pointing outside the storage is skipped,
        // while the iterator would stop at it
        Some(
            (0..table.names.len())
                .filter_map(|index| table.names.get(index))
                .map(|record| {
                    let text = decode_name(record.platform_id, record.encoding_id, record.name);
                    NameRecord::new(record.name_id, text)
                })
                .collect(),
        )
    }
}
