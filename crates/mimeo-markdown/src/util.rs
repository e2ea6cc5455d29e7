//! Shared helpers for tree building and summary extraction.

use pulldown_cmark::HeadingLevel;

/// Convert heading level enum to number (1-6).
#[must_use]
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Cut `text` down to its first `max_chars` characters.
///
/// Counts Unicode scalar values, so the cut never splits a UTF-8 sequence.
pub(crate) fn truncate_chars(text: &mut String, max_chars: usize) {
    if let Some((byte_index, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_to_num() {
        assert_eq!(heading_level_to_num(HeadingLevel::H1), 1);
        assert_eq!(heading_level_to_num(HeadingLevel::H4), 4);
        assert_eq!(heading_level_to_num(HeadingLevel::H6), 6);
    }

    #[test]
    fn test_truncate_chars_shorter_unchanged() {
        let mut text = "short".to_owned();
        truncate_chars(&mut text, 256);
        assert_eq!(text, "short");
    }

    #[test]
    fn test_truncate_chars_exact_length_unchanged() {
        let mut text = "abcd".to_owned();
        truncate_chars(&mut text, 4);
        assert_eq!(text, "abcd");
    }

    #[test]
    fn test_truncate_chars_cuts() {
        let mut text = "abcdef".to_owned();
        truncate_chars(&mut text, 3);
        assert_eq!(text, "abc");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        let mut text = "héllo wörld".to_owned();
        truncate_chars(&mut text, 8);
        assert_eq!(text, "héllo wö");
    }

    #[test]
    fn test_truncate_chars_zero() {
        let mut text = "abc".to_owned();
        truncate_chars(&mut text, 0);
        assert!(text.is_empty());
    }
}
