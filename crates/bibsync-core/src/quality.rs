//! Admission filter for low-quality records
//!
//! Some sources return placeholder or garbled entries whose titles are a
//! few characters of noise. Records below the threshold are rejected at
//! merge time (new garbage never enters) and again at load time, so garbage
//! admitted by earlier runs self-heals.

/// Minimum trimmed title length, in characters, for a record to be admitted.
pub const MIN_TITLE_LEN: usize = 5;

/// Whether a title is long enough to be trusted as a real publication title.
pub fn is_acceptable_title(title: &str) -> bool {
    title.trim().chars().count() >= MIN_TITLE_LEN
}
