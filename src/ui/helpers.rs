use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate from the left, keeping the tail (useful for paths)
pub fn truncate_start(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut kept: Vec<char> = Vec::new();
    let mut width = 1; // leading ellipsis
    for c in s.chars().rev() {
        let cw = c.width().unwrap_or(0);
        if width + cw > max_width {
            break;
        }
        kept.push(c);
        width += cw;
    }
    let mut result = String::from("…");
    result.extend(kept.into_iter().rev());
    result
}

/// Horizontal scroll for a single-line field.
///
/// Returns the visible slice of `text` and the cursor column inside it, so
/// that the cursor (a byte index) always sits within `width` columns.
pub fn scroll_to_cursor(text: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }

    let cursor = cursor.min(text.len());
    let before = text.get(..cursor).unwrap_or(text);
    let cursor_width = before.width();

    // Leave room for the cursor cell itself
    let mut skip = cursor_width.saturating_sub(width - 1);

    let mut visible = String::new();
    let mut col = 0;
    let mut cursor_col = 0;
    for (i, c) in text.char_indices() {
        let cw = c.width().unwrap_or(0);
        if skip > 0 {
            skip = skip.saturating_sub(cw);
            continue;
        }
        if i == cursor {
            cursor_col = col;
        }
        if col + cw > width {
            break;
        }
        visible.push(c);
        col += cw;
    }
    if cursor >= text.len() {
        cursor_col = col.min(width - 1);
    }

    (visible, cursor_col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_start_keeps_tail() {
        assert_eq!(truncate_start("short", 10), "short");
        assert_eq!(truncate_start("/home/user/.bookbrain/items.yaml", 12), "…/items.yaml");
        assert_eq!(truncate_start("abc", 0), "");
    }

    #[test]
    fn short_text_is_unscrolled() {
        assert_eq!(scroll_to_cursor("gpt-4", 5, 20), ("gpt-4".to_string(), 5));
        assert_eq!(scroll_to_cursor("gpt-4", 0, 20), ("gpt-4".to_string(), 0));
    }

    #[test]
    fn long_text_scrolls_to_keep_cursor_visible() {
        let text = "abcdefghijklmnop";
        let (visible, col) = scroll_to_cursor(text, text.len(), 5);
        assert_eq!(visible, "mnop");
        assert_eq!(col, 4);
    }

    #[test]
    fn cursor_in_middle_of_long_text() {
        let (visible, col) = scroll_to_cursor("abcdefghij", 2, 4);
        assert_eq!(visible, "abcd");
        assert_eq!(col, 2);
    }

    #[test]
    fn wide_chars_count_two_columns() {
        let (visible, col) = scroll_to_cursor("漢字", "漢字".len(), 10);
        assert_eq!(visible, "漢字");
        assert_eq!(col, 4);
    }
}
