//! Filename sanitization for generated job documents.
//!
//! Job names come straight out of user-written headers, so they can carry
//! path separators, punctuation, or anything else the author typed. Output
//! files keep only characters that are safe on every common filesystem.

/// Characters preserved alongside alphanumerics.
const KEPT_CHARS: &[char] = &['-', '_'];

/// Default fallback name when sanitization produces an empty result.
const FALLBACK_NAME: &str = "job";

/// Sanitizes a job name for use as a file stem.
///
/// Keeps alphanumeric characters, hyphens, and underscores; drops
/// everything else. Trailing whitespace is trimmed and an empty result
/// falls back to `"job"`.
pub fn sanitize(input: &str) -> String {
    let kept: String = input
        .chars()
        .filter(|c| c.is_alphanumeric() || KEPT_CHARS.contains(c))
        .collect();

    let trimmed = kept.trim_end();
    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
