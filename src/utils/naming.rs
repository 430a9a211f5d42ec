use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CONTROL_CHARS: Regex = Regex::new(r"\p{Cc}+").unwrap();
    static ref WHITESPACE_RUNS: Regex = Regex::new(r"\s+").unwrap();
}

/// Clean a name read from a font for single-line display
pub fn clean_display_name(name: &str) -> String {
    let without_controls = CONTROL_CHARS.replace_all(name, " ");
    let collapsed = WHITESPACE_RUNS.replace_all(&without_controls, " ");
    collapsed.trim().to_string()
}

/// Keep at most `max` characters, never splitting a code point
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// Format a byte count as megabytes with two decimals
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}
