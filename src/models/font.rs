use std::fmt;
use std::path::{Path, PathBuf};

/// A file believed to be a font, found by the directory walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Location of the file
    pub path: PathBuf,
    /// Size in bytes at the time of the walk
    pub size: u64,
}

impl Candidate {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    /// File name for progress output, falling back to the full path
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Why a font was classified as corrupted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    /// Below the minimum plausible font size
    TooSmall,
    /// The container could not be opened; carries a truncated error message
    LoadFailed(String),
    /// One of the required tables is absent
    MissingTable(&'static str),
    /// The `head` table exists but cannot be read
    HeadUnreadable,
    /// The `head` magic number is not 0x5F0F3CF5
    BadMagic(u32),
    /// The `name` table exists but cannot be parsed
    NameUnreadable,
    /// No family name record holds usable text
    NoValidName,
    /// Validation itself crashed; not a statement about the file format
    Fault(String),
}

impl Defect {
    /// Faults are not evidence of corruption and must never lead to deletion
    pub fn is_fault(&self) -> bool {
        matches!(self, Defect::Fault(_))
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::TooSmall => write!(f, "file too small"),
            Defect::LoadFailed(msg) => write!(f, "load failed: {}", msg),
            Defect::MissingTable(tag) => write!(f, "missing required section: {}", tag),
            Defect::HeadUnreadable => write!(f, "head section read failed"),
            Defect::BadMagic(_) => write!(f, "invalid magic number"),
            Defect::NameUnreadable => write!(f, "name section read failed"),
            Defect::NoValidName => write!(f, "no valid font name"),
            Defect::Fault(msg) => write!(f, "processing error: {}", msg),
        }
    }
}

/// Outcome of the integrity checks for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Corrupted(Defect),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Human readable reason, `ok` for valid fonts
    pub fn reason(&self) -> String {
        match self {
            Verdict::Valid => "ok".to_string(),
            Verdict::Corrupted(defect) => defect.to_string(),
        }
    }
}

/// Result of validating one candidate. Created once and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictRecord {
    pub candidate: Candidate,
    pub verdict: Verdict,
    /// Family name shown in reports
    pub display_name: String,
}

impl VerdictRecord {
    pub fn path(&self) -> &Path {
        &self.candidate.path
    }

    pub fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }

    /// Corrupted by format, as opposed to valid or faulted
    pub fn is_deletable(&self) -> bool {
        match &self.verdict {
            Verdict::Valid => false,
            Verdict::Corrupted(defect) => !defect.is_fault(),
        }
    }
}
