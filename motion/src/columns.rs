//! Visible-column arithmetic and character boundaries.
//!
//! Columns in this crate are UTF-16 offsets, but what a user sees is a *visible*
//! column: tabs expand to the next tab stop and wide (East Asian, emoji) graphemes
//! take two cells. Vertical motion remembers visible columns, so converting in
//! both directions has to agree on those rules.
//!
//! ```text
//! line (tab_size=4):  "\tab\u{4e2d}c"
//! columns:             1  2 3 4      5 6
//! visible columns:     0  4 5 6      8 9
//! ```
//!
//! Stepping over a single character is done on grapheme clusters, so a
//! surrogate pair or a combining sequence is never split.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Number of UTF-16 code units in `line`.
pub fn utf16_len(line: &str) -> u32 {
    line.encode_utf16().count() as u32
}

/// The first tab stop strictly after `visible_column`.
pub fn next_render_tab_stop(visible_column: u32, tab_size: u32) -> u32 {
    let tab_size = tab_size.max(1);
    visible_column + tab_size - visible_column % tab_size
}

/// Visible column reached after rendering `grapheme` starting at `visible_column`.
fn advance(visible_column: u32, grapheme: &str, tab_size: u32) -> u32 {
    if grapheme == "\t" {
        next_render_tab_stop(visible_column, tab_size)
    } else if grapheme.width() >= 2 {
        visible_column + 2
    } else {
        visible_column + 1
    }
}

/// Yields `(utf16_end_offset, grapheme)` for each grapheme cluster of `line`.
fn graphemes_utf16(line: &str) -> impl Iterator<Item = (u32, &str)> + '_ {
    line.graphemes(true).scan(0u32, |offset, grapheme| {
        *offset += grapheme.encode_utf16().count() as u32;
        Some((*offset, grapheme))
    })
}

/// Tab-expanded visible column (0-based) of `column` (1-based) on `line`.
///
/// Columns past the end of the line are measured at the end of the line.
pub fn visible_column_from_column(line: &str, column: u32, tab_size: u32) -> u32 {
    let text_len = column.saturating_sub(1).min(utf16_len(line));
    let mut visible = 0;
    let mut start = 0;

    for (end, grapheme) in graphemes_utf16(line) {
        if start >= text_len {
            break;
        }
        visible = advance(visible, grapheme, tab_size);
        start = end;
    }

    visible
}

/// Real column (1-based) whose visible column is closest to `visible_column`.
///
/// Inside a multi-cell grapheme the nearer edge wins and a tie goes to the left.
/// Asking for a visible column past the end yields the column after the last character.
pub fn column_from_visible_column(line: &str, visible_column: i64, tab_size: u32) -> u32 {
    if visible_column <= 0 {
        return 1;
    }

    let mut before_visible = 0i64;
    let mut before_column = 1;

    for (end, grapheme) in graphemes_utf16(line) {
        let after_visible = i64::from(advance(before_visible as u32, grapheme, tab_size));
        let after_column = end + 1;

        if after_visible >= visible_column {
            let before_delta = visible_column - before_visible;
            let after_delta = after_visible - visible_column;
            return if after_delta < before_delta {
                after_column
            } else {
                before_column
            };
        }

        before_visible = after_visible;
        before_column = after_column;
    }

    utf16_len(line) + 1
}

/// UTF-16 length of the character that ends at `index` (0-based).
///
/// Returns 0 at the start of the line.
pub fn prev_char_length(line: &str, index: u32) -> u32 {
    let index = index.min(utf16_len(line));
    let mut prev_boundary = 0;

    for (end, _) in graphemes_utf16(line) {
        if end >= index {
            break;
        }
        prev_boundary = end;
    }

    index - prev_boundary
}

/// UTF-16 length of the character that starts at `index` (0-based).
///
/// Returns 0 at the end of the line.
pub fn next_char_length(line: &str, index: u32) -> u32 {
    graphemes_utf16(line)
        .map(|(end, _)| end)
        .find(|&end| end > index)
        .map_or(0, |end| end - index)
}

/// Whether `index` (0-based, UTF-16) falls between two grapheme clusters.
pub fn is_char_boundary(line: &str, index: u32) -> bool {
    index == 0 || graphemes_utf16(line).any(|(end, _)| end == index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_stops_advance_to_next_multiple() {
        assert_eq!(next_render_tab_stop(0, 4), 4);
        assert_eq!(next_render_tab_stop(3, 4), 4);
        assert_eq!(next_render_tab_stop(4, 4), 8);
        assert_eq!(next_render_tab_stop(5, 8), 8);
    }

    #[test]
    fn visible_column_expands_tabs() {
        let line = "\tHello\tWorld";
        assert_eq!(visible_column_from_column(line, 1, 4), 0);
        assert_eq!(visible_column_from_column(line, 2, 4), 4);
        assert_eq!(visible_column_from_column(line, 7, 4), 9);
        assert_eq!(visible_column_from_column(line, 8, 4), 12);
        // Past the end measures the whole line.
        assert_eq!(visible_column_from_column(line, 100, 4), 17);
    }

    #[test]
    fn visible_column_counts_wide_and_astral_characters() {
        // U+4E2D is wide, U+1F600 is a surrogate pair rendered two cells wide.
        let line = "a\u{4e2d}\u{1f600}b";
        assert_eq!(visible_column_from_column(line, 2, 4), 1);
        assert_eq!(visible_column_from_column(line, 3, 4), 3);
        assert_eq!(visible_column_from_column(line, 5, 4), 5);
        assert_eq!(visible_column_from_column(line, 6, 4), 6);
    }

    #[test]
    fn column_from_visible_rounds_inside_tabs() {
        let line = "\tHello";
        assert_eq!(column_from_visible_column(line, 0, 4), 1);
        assert_eq!(column_from_visible_column(line, 1, 4), 1);
        assert_eq!(column_from_visible_column(line, 2, 4), 1);
        assert_eq!(column_from_visible_column(line, 3, 4), 2);
        assert_eq!(column_from_visible_column(line, 4, 4), 2);
        assert_eq!(column_from_visible_column(line, 6, 4), 4);
        assert_eq!(column_from_visible_column(line, 40, 4), 7);
        assert_eq!(column_from_visible_column(line, -3, 4), 1);
    }

    #[test]
    fn char_lengths_never_split_surrogate_pairs() {
        let line = "x\u{1f600}y";
        assert_eq!(next_char_length(line, 0), 1);
        assert_eq!(next_char_length(line, 1), 2);
        assert_eq!(next_char_length(line, 3), 1);
        assert_eq!(next_char_length(line, 4), 0);

        assert_eq!(prev_char_length(line, 4), 1);
        assert_eq!(prev_char_length(line, 3), 2);
        assert_eq!(prev_char_length(line, 1), 1);
        assert_eq!(prev_char_length(line, 0), 0);

        assert!(is_char_boundary(line, 1));
        assert!(!is_char_boundary(line, 2));
        assert!(is_char_boundary(line, 3));
    }

    #[test]
    fn combining_sequences_step_as_one_unit() {
        let line = "e\u{301}x";
        assert_eq!(next_char_length(line, 0), 2);
        assert_eq!(prev_char_length(line, 2), 2);
    }
}
