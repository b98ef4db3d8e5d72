//! Atomic movement across soft tabs.
//!
//! When indentation is made of spaces, sticky tab stops let the cursor jump a
//! whole indentation unit at a time as if the spaces were a tab:
//!
//! ```text
//! tab_size = 4, line "        foo"
//!                     ^   ^   ^
//! stops at indices    0   4   8
//! ```
//!
//! A jump only happens inside the leading whitespace of a line. A partial unit
//! (fewer than `tab_size` visible columns before the next non-whitespace) is
//! stepped over one character at a time by the caller.

use crate::columns::next_render_tab_stop;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomicDirection {
    Left,
    Right,
    /// Snap to whichever stop is closer, preferring the left one on a tie.
    Nearest,
}

/// Whitespace scan result for [`whitespace_visible_column`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceColumn {
    /// Index of the last tab stop strictly before the scanned index, if any.
    pub prev_tab_stop_index: Option<u32>,
    /// Visible column of that tab stop.
    pub prev_tab_stop_visible_column: u32,
    /// Visible column at the scanned index.
    pub visible_column: u32,
}

fn whitespace_width(ch: u8, visible_column: u32, tab_size: u32) -> Option<u32> {
    match ch {
        b' ' => Some(visible_column + 1),
        b'\t' => Some(next_render_tab_stop(visible_column, tab_size)),
        _ => None,
    }
}

/// Scan the whitespace prefix of `line` up to `index`.
///
/// Returns `None` when a non-whitespace character occurs before `index` or when
/// `index` lies past the end of the line.
pub fn whitespace_visible_column(line: &str, index: u32, tab_size: u32) -> Option<WhitespaceColumn> {
    let bytes = line.as_bytes();
    let mut visible_column = 0;
    let mut prev_tab_stop_index = None;
    let mut prev_tab_stop_visible_column = 0;

    for (i, &ch) in bytes.iter().enumerate() {
        let i = i as u32;
        if i == index {
            return Some(WhitespaceColumn {
                prev_tab_stop_index,
                prev_tab_stop_visible_column,
                visible_column,
            });
        }
        if visible_column % tab_size.max(1) == 0 {
            prev_tab_stop_index = Some(i);
            prev_tab_stop_visible_column = visible_column;
        }
        visible_column = whitespace_width(ch, visible_column, tab_size)?;
    }

    (index as usize == bytes.len()).then_some(WhitespaceColumn {
        prev_tab_stop_index,
        prev_tab_stop_visible_column,
        visible_column,
    })
}

/// Index (0-based) of the tab stop reached by an atomic step from `index`.
///
/// Returns `None` when no atomic stop applies and the caller should fall back to
/// a single-character step. Indices are UTF-16 offsets; the whitespace prefix is
/// ASCII, so they coincide with byte offsets wherever a stop can be found.
pub fn atomic_position(
    line: &str,
    index: u32,
    tab_size: u32,
    direction: AtomicDirection,
) -> Option<u32> {
    let tab_size = tab_size.max(1);
    let scan = whitespace_visible_column(line, index, tab_size)?;
    let bytes = line.as_bytes();

    let left = match direction {
        AtomicDirection::Left => true,
        AtomicDirection::Right => false,
        AtomicDirection::Nearest => {
            let offset = scan.visible_column % tab_size;
            if offset == 0 {
                return Some(index);
            }
            offset <= tab_size / 2
        },
    };

    if left {
        let prev_index = scan.prev_tab_stop_index?;
        // Only jump back over a full indentation unit; keep scanning forward
        // so a partial unit at the end of the indentation steps one column.
        let target = scan.prev_tab_stop_visible_column + tab_size;
        let mut visible_column = scan.prev_tab_stop_visible_column;
        for &ch in &bytes[prev_index as usize..] {
            if visible_column == target {
                return Some(prev_index);
            }
            visible_column = whitespace_width(ch, visible_column, tab_size)?;
        }
        return (visible_column == target).then_some(prev_index);
    }

    let target = next_render_tab_stop(scan.visible_column, tab_size);
    let mut visible_column = scan.visible_column;
    for (i, &ch) in bytes.iter().enumerate().skip(index as usize) {
        if visible_column == target {
            return Some(i as u32);
        }
        visible_column = whitespace_width(ch, visible_column, tab_size)?;
    }
    (visible_column == target).then_some(bytes.len() as u32)
}
