//! Character-boundary helpers for offset arithmetic on UTF-8 text.
//!
//! Public offsets in this crate are byte offsets (sliceable), while size
//! thresholds count characters. These helpers convert between the two
//! without ever landing inside a multi-byte sequence.

/// Byte offset reached by advancing `n` characters from byte position
/// `from`. Saturates at the end of the text.
pub(crate) fn advance_chars(text: &str, from: usize, n: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(n)
        .map_or(text.len(), |(i, _)| from + i)
}

/// Byte offset reached by stepping back `n` characters from byte position
/// `from`. Saturates at the start of the text.
pub(crate) fn retreat_chars(text: &str, from: usize, n: usize) -> usize {
    if n == 0 {
        return from;
    }
    text[..from]
        .char_indices()
        .rev()
        .nth(n - 1)
        .map_or(0, |(i, _)| i)
}

/// Number of characters in the byte span `start..end`.
pub(crate) fn char_len(text: &str, start: usize, end: usize) -> usize {
    text[start..end].chars().count()
}
