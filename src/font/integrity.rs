use log::debug;
use ttf_parser::{name_id, Tag};

use super::source::{FontHandle, FontLoader, LoadError};
use crate::models::{Candidate, Defect, Verdict};
use crate::utils::{clean_display_name, truncate_chars};

/// Files smaller than this cannot hold a real font
pub const MIN_FONT_SIZE: u64 = 1024;

/// Magic number stored in every `head` table
pub const HEAD_MAGIC_NUMBER: u32 = 0x5F0F3CF5;

/// Tables every font must carry, checked in this order
pub const REQUIRED_TABLES: [(Tag, &str); 3] = [
    (Tag::from_bytes(b"head"), "head"),
    (Tag::from_bytes(b"name"), "name"),
    (Tag::from_bytes(b"cmap"), "cmap"),
];

const MAX_ERROR_LEN: usize = 50;
const MAX_NAME_LEN: usize = 50;

pub const UNKNOWN_NAME: &str = "unknown";
pub const UNREADABLE_NAME: &str = "unreadable";

/// What the validator learned about one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub verdict: Verdict,
    pub display_name: String,
}

/// Runs the structural checks against fonts opened through a [`FontLoader`]
#[derive(Debug, Clone)]
pub struct IntegrityValidator<L> {
    loader: L,
    lazy: bool,
}

impl<L: FontLoader> IntegrityValidator<L> {
    pub fn new(loader: L, lazy: bool) -> Self {
        Self { loader, lazy }
    }

    /// Open the candidate once, check it and pull out its display name.
    /// The font handle is dropped before returning on every path.
    pub fn inspect(&self, candidate: &Candidate) -> Inspection {
        let opened = self.loader.open(&candidate.path, self.lazy);

        let display_name = match &opened {
            Ok(font) => display_name(font),
            Err(_) => UNREADABLE_NAME.to_string(),
        };

        let verdict = if candidate.size < MIN_FONT_SIZE {
            Verdict::Corrupted(Defect::TooSmall)
        } else {
            match &opened {
                Ok(font) => check_structure(font),
                Err(e) => Verdict::Corrupted(load_failure(e)),
            }
        };

        debug!("{} -> {}", candidate.path.display(), verdict.reason());
        Inspection {
            verdict,
            display_name,
        }
    }
}

fn load_failure(error: &LoadError) -> Defect {
    Defect::LoadFailed(truncate_chars(&error.to_string(), MAX_ERROR_LEN))
}

/// Table presence, `head` magic and family name, short-circuiting on the first failure
pub fn check_structure<F: FontHandle>(font: &F) -> Verdict {
    for (tag, label) in REQUIRED_TABLES {
        if !font.has_table(tag) {
            return Verdict::Corrupted(Defect::MissingTable(label));
        }
    }

    match font.head() {
        None => return Verdict::Corrupted(Defect::HeadUnreadable),
        Some(head) if head.magic_number != HEAD_MAGIC_NUMBER => {
            return Verdict::Corrupted(Defect::BadMagic(head.magic_number));
        }
        Some(_) => {}
    }

    let Some(names) = font.names() else {
        return Verdict::Corrupted(Defect::NameUnreadable);
    };

    let has_family = names
        .iter()
        .filter(|record| record.name_id == name_id::FAMILY)
        .filter_map(|record| record.to_text())
        .any(is_usable_name);

    if has_family {
        Verdict::Valid
    } else {
        Verdict::Corrupted(Defect::NoValidName)
    }
}

fn is_usable_name(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.chars().any(char::is_alphanumeric)
}

/// First decodable family name, cleaned for display
pub fn display_name<F: FontHandle>(font: &F) -> String {
    font.names()
        .and_then(|names| {
            names
                .iter()
                .filter(|record| record.name_id == name_id::FAMILY)
                .find_map(|record| record.to_text().map(str::to_string))
        })
        .map(|name| truncate_chars(&clean_display_name(&name), MAX_NAME_LEN))
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}
