//! Width-aware text helpers for fitting row segments into a terminal line.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const TRUNCATION_MARKER: &str = "…";

/// Number of terminal columns `text` occupies.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cut `text` to at most `width` columns, ending with `…` when shortened.
///
/// Cuts on grapheme boundaries so combined characters are never split.
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let available = width.saturating_sub(display_width(TRUNCATION_MARKER));
    let mut result = String::new();
    let mut current = 0;
    for grapheme in text.graphemes(true) {
        let w = display_width(grapheme);
        if current + w > available {
            break;
        }
        result.push_str(grapheme);
        current += w;
    }

    let trimmed_len = result.trim_end().len();
    result.truncate(trimmed_len);
    result.push_str(TRUNCATION_MARKER);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("Hello"), 5);
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width("Hi 你好"), 7);
    }

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate("Short", 10), "Short");
        assert_eq!(truncate("Exact", 5), "Exact");
    }

    #[test]
    fn test_truncate_ascii() {
        let cut = truncate("Champions League final", 10);
        assert_eq!(cut, "Champions…");
        assert!(display_width(&cut) <= 10);
    }

    #[test]
    fn test_truncate_wide() {
        let cut = truncate("こんにちは世界", 7);
        assert_eq!(cut, "こんに…");
        assert!(display_width(&cut) <= 7);
    }

    #[test]
    fn test_truncate_keeps_graphemes_whole() {
        let cut = truncate("cafe\u{301} au lait", 5);
        assert_eq!(cut, "cafe\u{301}…");
    }

    #[test]
    fn test_truncate_zero() {
        assert_eq!(truncate("anything", 0), "");
    }
}
