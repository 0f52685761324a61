// src/normalize/name.rs

use once_cell::sync::Lazy;
use regex::Regex;

use super::resolve::{is_placeholder, resolve_column, NAME_ALIASES};
use super::Record;

static DIGITS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Substrings that mark a key as spreadsheet bookkeeping rather than data.
const METADATA_MARKERS: [&str; 3] = ["sheet", "index", "row"];

/// Values mentioning these look like labels, not company names.
const LABEL_WORDS: [&str; 3] = ["region", "segment", "type"];

pub fn is_metadata_key(key: &str) -> bool {
    if key.starts_with('_') {
        return true;
    }
    let lower = key.to_lowercase();
    METADATA_MARKERS.iter().any(|m| lower.contains(m))
}

fn plausible_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if len <= 2 || len >= 200 || is_placeholder(trimmed) || DIGITS_ONLY.is_match(trimmed) {
        return None;
    }
    let lower = trimmed.to_lowercase();
    if LABEL_WORDS.iter().any(|w| lower.contains(w)) {
        return None;
    }
    Some(trimmed.to_string())
}

/// Guess which free-text column holds the name: the first string field, in
/// key order, that reads like one.
pub fn guess_name(record: &Record) -> Option<String> {
    record
        .iter()
        .filter(|(key, _)| !is_metadata_key(key))
        .filter_map(|(_, value)| value.as_str())
        .find_map(plausible_name)
}

/// Customer name from the name columns, falling back to [`guess_name`].
pub fn resolve_name(record: &Record) -> Option<String> {
    resolve_column(record, NAME_ALIASES).or_else(|| guess_name(record))
}
