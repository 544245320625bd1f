//! Shared rendering utilities

use unicode_width::UnicodeWidthStr;

/// Find the byte index where the display width of `s` reaches `target_width`.
/// Always returns a valid char boundary.
fn char_boundary_at_width(s: &str, target_width: usize) -> usize {
    let mut width = 0;
    for (idx, ch) in s.char_indices() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > target_width {
            return idx;
        }
        width += ch_width;
    }
    s.len()
}

/// Cut `s` to at most `max_width` display columns, ending in `…` when cut
pub(super) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let end = char_boundary_at_width(s, max_width - 1);
    format!("{}…", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_boundary_ascii() {
        assert_eq!(char_boundary_at_width("hello", 3), 3);
        assert_eq!(char_boundary_at_width("hello", 10), 5);
    }

    #[test]
    fn test_char_boundary_multibyte() {
        // ÷ is 2 bytes, 1 column
        assert_eq!(char_boundary_at_width("a÷b", 2), 3);
    }

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate_to_width("Sudoku", 6), "Sudoku");
    }

    #[test]
    fn test_truncate_cut() {
        assert_eq!(truncate_to_width("Termometro", 6), "Termo…");
        assert_eq!(truncate_to_width("Termometro", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is 2 columns; only one fits before the ellipsis
        assert_eq!(truncate_to_width("中文字", 4), "中…");
    }
}
