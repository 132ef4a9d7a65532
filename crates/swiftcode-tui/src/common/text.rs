//! Text utilities for TUI rendering.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns a tab expands to.
pub const TAB_WIDTH: usize = 4;

/// Truncates a string with ellipsis if it exceeds max_width (unicode-aware).
///
/// Uses unicode width so wide characters (CJK, emoji) count as two columns.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Expands tabs to spaces for display.
///
/// `unicode_width` reports tabs as zero columns, so spans containing them
/// would misalign the caret. Only the rendered copy changes; highlighted
/// runs keep the original characters.
pub fn expand_tabs(s: &str) -> Cow<'_, str> {
    if s.contains('\t') {
        Cow::Owned(s.replace('\t', &" ".repeat(TAB_WIDTH)))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_short() {
        assert_eq!(truncate_with_ellipsis("demo.ts", 10), "demo.ts");
    }

    #[test]
    fn test_truncate_with_ellipsis_truncated() {
        assert_eq!(truncate_with_ellipsis("quickstart.ts", 6), "quick…");
    }

    #[test]
    fn test_truncate_with_ellipsis_very_short() {
        assert_eq!(truncate_with_ellipsis("quickstart.ts", 1), "…");
    }

    #[test]
    fn test_truncate_with_ellipsis_wide_cjk() {
        // "中文" is 4 columns; room for "中文t" (5) plus the ellipsis.
        assert_eq!(truncate_with_ellipsis("中文test", 6), "中文t…");
    }

    #[test]
    fn test_expand_tabs() {
        let expanded = expand_tabs("\tif x");
        assert!(matches!(expanded, Cow::Owned(_)));
        assert_eq!(expanded, "    if x");
    }

    #[test]
    fn test_expand_tabs_clean_borrows() {
        assert!(matches!(expand_tabs("if x"), Cow::Borrowed(_)));
    }
}
