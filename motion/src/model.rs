//! The read-only line model consumed by cursor motion.
//!
//! Motion never owns text. It asks a [`LineModel`] for line contents, valid
//! column ranges and for position normalisation, which is how the model gets a
//! say about content the cursor must not land inside (inlay hints, folded lines).
//!
//! [`TextModel`] is the in-memory implementation used by the CLI and tests. It
//! treats its text the way a view sees it: injected spans are part of the line
//! content, but they are decorative, so a cursor snaps to one of their edges.

use crate::{columns::utf16_len, coords::Position};
use smallvec::SmallVec;

/// Which side to prefer when a position has to be moved off decorative content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionAffinity {
    /// Snap to the left edge of anything the position falls inside.
    Left,
    /// Snap to the right edge of anything the position falls inside.
    Right,
    /// No preference; implementations pick the left edge.
    None,
    /// Like [`PositionAffinity::Left`], and also leave the right edge of injected text.
    LeftOfInjectedText,
    /// Like [`PositionAffinity::Right`], and also leave the left edge of injected text.
    RightOfInjectedText,
}

/// Line and column queries needed by cursor motion.
///
/// Lines are 1-based. Columns are 1-based UTF-16 offsets. Implementations are queried
/// fresh on every call; motion never caches results across calls.
pub trait LineModel {
    fn line_count(&self) -> u32;

    fn line_content(&self, line_number: u32) -> &str;

    fn line_min_column(&self, _line_number: u32) -> u32 {
        1
    }

    fn line_max_column(&self, line_number: u32) -> u32 {
        utf16_len(self.line_content(line_number)) + 1
    }

    /// Column of the first character that is not a space or tab, or 0 for a blank line.
    fn line_first_non_whitespace_column(&self, line_number: u32) -> u32 {
        let content = self.line_content(line_number);
        match content.find(|ch: char| ch != ' ' && ch != '\t') {
            Some(byte_index) => utf16_len(&content[..byte_index]) + 1,
            None => 0,
        }
    }

    /// Column where the indentation of the line ends. Blank lines are all indentation.
    fn line_indent_column(&self, line_number: u32) -> u32 {
        match self.line_first_non_whitespace_column(line_number) {
            0 => self.line_max_column(line_number),
            column => column,
        }
    }

    /// Map `position` onto one the cursor may rest at, biased by `affinity`.
    fn normalize_position(&self, position: Position, affinity: PositionAffinity) -> Position;
}

/// A decorative span of columns `[column, column + len)` on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectedText {
    pub column: u32,
    pub len: u32,
}

impl InjectedText {
    fn end_column(&self) -> u32 {
        self.column + self.len
    }
}

fn line_index(line_number: u32) -> usize {
    (line_number as usize).wrapping_sub(1)
}

/// In-memory [`LineModel`] over a list of lines.
#[derive(Debug, Clone, Default)]
pub struct TextModel {
    lines: Vec<String>,
    injected: Vec<SmallVec<[InjectedText; 2]>>,
    collapsed: Vec<bool>,
}

impl TextModel {
    /// Split `text` on `\n` (a trailing `\r` is dropped). Empty text is one empty line.
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        let count = lines.len();
        Self {
            lines,
            injected: vec![SmallVec::new(); count],
            collapsed: vec![false; count],
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return Self::new("");
        }
        let count = lines.len();
        Self {
            lines,
            injected: vec![SmallVec::new(); count],
            collapsed: vec![false; count],
        }
    }

    /// Mark `len` columns starting at `column` on `line_number` as injected text.
    pub fn with_injected_text(mut self, line_number: u32, column: u32, len: u32) -> Self {
        if let Some(spans) = self.injected.get_mut(line_index(line_number)) {
            spans.push(InjectedText { column, len });
            spans.sort_by_key(|span| span.column);
        }
        self
    }

    /// Hide `line_number`, as a fold would.
    pub fn with_collapsed_line(mut self, line_number: u32) -> Self {
        if let Some(collapsed) = self.collapsed.get_mut(line_index(line_number)) {
            *collapsed = true;
        }
        self
    }

    pub fn is_collapsed(&self, line_number: u32) -> bool {
        self.collapsed
            .get(line_index(line_number))
            .copied()
            .unwrap_or(false)
    }

    pub fn injected_text(&self, line_number: u32) -> &[InjectedText] {
        self.injected
            .get(line_index(line_number))
            .map(|spans| spans.as_slice())
            .unwrap_or_default()
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn prev_visible(&self, line_number: u32) -> Option<Position> {
        (1..line_number)
            .rev()
            .find(|&l| !self.is_collapsed(l))
            .map(|prev| Position::new(prev, self.line_max_column(prev)))
    }

    fn next_visible(&self, line_number: u32) -> Option<Position> {
        (line_number + 1..=self.line_count())
            .find(|&l| !self.is_collapsed(l))
            .map(|next| Position::new(next, self.line_min_column(next)))
    }
}

impl LineModel for TextModel {
    fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    fn line_content(&self, line_number: u32) -> &str {
        self.lines
            .get(line_index(line_number))
            .map_or("", String::as_str)
    }

    fn normalize_position(&self, position: Position, affinity: PositionAffinity) -> Position {
        let line_number = position.line_number;
        if self.is_collapsed(line_number) {
            // Only plain rightward motion continues forward past a hidden line.
            let nearest = if affinity == PositionAffinity::Right {
                self.next_visible(line_number)
                    .or_else(|| self.prev_visible(line_number))
            } else {
                self.prev_visible(line_number)
                    .or_else(|| self.next_visible(line_number))
            };
            return nearest.unwrap_or(position);
        }

        let column = position.column;
        for span in self.injected_text(line_number) {
            let (start, end) = (span.column, span.end_column());
            let snap_right = matches!(
                affinity,
                PositionAffinity::Right | PositionAffinity::RightOfInjectedText
            );

            if start < column && column < end {
                let column = if snap_right { end } else { start };
                return Position::new(line_number, column);
            }
            if column == start && affinity == PositionAffinity::RightOfInjectedText {
                return Position::new(line_number, end);
            }
            if column == end && affinity == PositionAffinity::LeftOfInjectedText {
                return Position::new(line_number, start);
            }
        }

        position
    }
}
