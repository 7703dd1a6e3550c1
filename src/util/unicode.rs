//! Terminal-cell arithmetic for memo text. Memos are often CJK or carry
//! emoji, so widths and cursor steps work on grapheme clusters.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_width).sum()
}

/// Cut `s` down to `max_cells`, ending with `…` when something was dropped
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = grapheme_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset where the visible window of `s` must start so that the
/// position `cursor` (a byte offset) stays within `max_cells`, leaving one
/// cell for the cursor itself.
pub fn scroll_start_for_cursor(s: &str, cursor: usize, max_cells: usize) -> usize {
    let cursor = cursor.min(s.len());
    let room = max_cells.saturating_sub(1);
    let mut start = cursor;
    let mut used = 0;
    for (i, g) in s[..cursor].grapheme_indices(true).rev() {
        let w = grapheme_width(g);
        if used + w > room {
            break;
        }
        used += w;
        start = i;
    }
    start
}

/// Next grapheme boundary after `byte_offset`, or None at the end
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    s[byte_offset..]
        .graphemes(true)
        .next()
        .map(|g| byte_offset + g.len())
}

/// Previous grapheme boundary before `byte_offset`, or None at the start
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

fn grapheme_width(g: &str) -> usize {
    if g == "\t" {
        return 4;
    }
    UnicodeWidthStr::width(g)
}
