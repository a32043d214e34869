//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Single-line preview of free text for log fields.
///
/// Newlines are flattened and the result is capped at `max_bytes`, with
/// `...` appended when anything was cut.
pub fn log_preview(s: &str, max_bytes: usize) -> String {
    let flat = s.replace(['\r', '\n'], " ");
    let cut = truncate_str(&flat, max_bytes);
    if cut.len() < flat.len() {
        format!("{}...", cut)
    } else {
        flat
    }
}
