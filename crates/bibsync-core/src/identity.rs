//! Canonical key derivation for publication records
//!
//! The canonical key is the normalized DOI when one is present, otherwise
//! the normalized title. DOIs take precedence because they are globally
//! unique while titles vary in transliteration and punctuation. A record
//! with neither yields no key and can never be merged safely.

use bibsync_domain::{CatalogRecord, PublicationDraft};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // DOI shape: "10.", registrant of 4+ digits, slash, suffix
    static ref DOI_PATTERN: Regex = Regex::new(r"^10\.\d{4,}/\S+$").unwrap();
}

/// Whether a string has the shape of a DOI. Adapters drop malformed DOI
/// values so a garbled identifier cannot become a canonical key.
pub fn is_valid_doi(doi: &str) -> bool {
    DOI_PATTERN.is_match(doi)
}

/// Resolver prefixes stripped before a DOI is used as a key.
const DOI_PREFIXES: [&str; 6] = [
    "https://doi.org/",
    "http://doi.org/",
    "https://dx.doi.org/",
    "http://dx.doi.org/",
    "doi:",
    "DOI:",
];

/// Normalize a DOI: trim, strip resolver prefixes and trailing
/// punctuation, lowercase.
pub fn normalize_doi(doi: &str) -> String {
    let mut result = doi.trim().to_string();

    for prefix in DOI_PREFIXES {
        if let Some(stripped) = result.strip_prefix(prefix) {
            result = stripped.to_string();
            break;
        }
    }

    while let Some(c) = result.chars().last() {
        if c == '.' || c == ',' || c == ';' {
            result.pop();
        } else {
            break;
        }
    }

    result.to_lowercase()
}

/// Normalize a title for use as a fallback key: trim and lowercase.
pub fn normalize_title_key(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Derive the canonical key from a record's identity fields.
///
/// Returns `None` when both the DOI and the title normalize to empty; the
/// caller must discard such records.
pub fn derive_key(doi: Option<&str>, title: &str) -> Option<String> {
    if let Some(doi) = doi {
        let normalized = normalize_doi(doi);
        if !normalized.is_empty() {
            return Some(normalized);
        }
    }

    let normalized = normalize_title_key(title);
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

pub fn record_key(record: &CatalogRecord) -> Option<String> {
    derive_key(record.doi.as_deref(), &record.title)
}

pub fn draft_key(draft: &PublicationDraft) -> Option<String> {
    derive_key(draft.doi.as_deref(), &draft.title)
}
