//! String utilities for the domain layer.

/// Truncate a string to at most `max_chars` characters.
///
/// Counts Unicode scalar values rather than bytes, so a Cyrillic name is
/// capped at the same number of letters as a Latin one. Returns a sub-slice
/// of the original string; the leading characters are kept.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Number of characters in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Trim `s` and return `None` when nothing is left.
///
/// This is the single place where "empty string" turns into "absent".
pub fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
