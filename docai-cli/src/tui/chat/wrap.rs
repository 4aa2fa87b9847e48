//! Word-wrapping helpers measured in display columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wrap `text` at `max_width` display columns.
///
/// Explicit newlines start a new line; words wider than the limit are split.
/// Always returns at least one line.
pub(super) fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split(' ') {
            let word_width = word.width();
            let gap = usize::from(!current.is_empty());

            if current_width + gap + word_width <= max_width {
                if gap == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += gap + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for c in word.chars() {
                    let w = c.width().unwrap_or(0);
                    if current_width + w > max_width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(c);
                    current_width += w;
                }
            }
        }
        lines.push(current);
    }
    lines
}

/// Pad `text` with spaces to `width` display columns.
pub(super) fn pad_to(text: &str, width: usize) -> String {
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(text.width())));
    padded
}

/// Tail of `text` that keeps the char at `cursor` visible within `max_width`
/// columns, with the cursor column inside that tail.
pub(super) fn visible_window(text: &str, cursor: usize, max_width: usize) -> (String, u16) {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let max_width = max_width.max(1);

    let mut start = 0;
    let mut cursor_col: usize = chars[..cursor].iter().map(|c| c.width().unwrap_or(0)).sum();
    while cursor_col >= max_width && start < cursor {
        cursor_col -= chars[start].width().unwrap_or(0);
        start += 1;
    }

    let mut visible = String::new();
    let mut width = 0;
    for c in &chars[start..] {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        visible.push(*c);
        width += w;
    }
    (visible, cursor_col as u16)
}
