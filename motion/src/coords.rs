//! Buffer coordinates used by cursor motion.
//!
//! All coordinates are 1-based. A [`Position`] column is an offset into the
//! UTF-16 code units of its line, so a character outside the Basic Multilingual
//! Plane occupies two columns. [`Range`] is an ordered span, [`Selection`] is a
//! directional one that remembers which end the user is actively moving.

use std::{cmp::Ordering, fmt};

/// A 1-based (line, column) location in a line model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line_number: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line_number: u32, column: u32) -> Self {
        Self {
            line_number,
            column,
        }
    }

    /// Shift the column by `delta`, never going below column 1.
    ///
    /// The result is not clipped against the line; callers clip through the model.
    pub fn delta_column(self, delta: i64) -> Self {
        let column = (i64::from(self.column) + delta).clamp(1, i64::from(u32::MAX));
        Self::new(self.line_number, column as u32)
    }

    pub fn is_before_or_equal(&self, other: &Position) -> bool {
        self <= other
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line_number
            .cmp(&other.line_number)
            .then(self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_number, self.column)
    }
}

/// An ordered span between two positions. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: Position,
    end: Position,
}

impl Range {
    /// Build a range from two positions in either order.
    pub fn from_positions(a: Position, b: Position) -> Self {
        if b < a {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// An empty range sitting at `position`.
    pub fn collapsed(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    pub fn start_position(&self) -> Position {
        self.start
    }

    pub fn end_position(&self) -> Position {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// How the anchor of a selection was created.
///
/// Only [`SelectionStartKind::Simple`] anchors are guaranteed to be empty. Word and line
/// anchors cover the word or line that was initially selected, which matters when a
/// selection is later extended back across its own origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SelectionStartKind {
    #[default]
    Simple,
    Word,
    Line,
}

/// Which way a selection runs from its anchor to its active end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    /// Anchor before active end.
    Ltr,
    /// Active end before anchor.
    Rtl,
}

/// A directional span: an anchor (`selection_start`) and an active end (`position`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub selection_start: Position,
    pub position: Position,
}

impl Selection {
    pub fn new(selection_start: Position, position: Position) -> Self {
        Self {
            selection_start,
            position,
        }
    }

    pub fn cursor(position: Position) -> Self {
        Self::new(position, position)
    }

    /// The leftmost end.
    pub fn start(&self) -> Position {
        self.selection_start.min(self.position)
    }

    /// The rightmost end.
    pub fn end(&self) -> Position {
        self.selection_start.max(self.position)
    }

    pub fn is_empty(&self) -> bool {
        self.selection_start == self.position
    }

    pub fn direction(&self) -> SelectionDirection {
        if self.position < self.selection_start {
            SelectionDirection::Rtl
        } else {
            SelectionDirection::Ltr
        }
    }

    pub fn range(&self) -> Range {
        Range::from_positions(self.selection_start, self.position)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.selection_start, self.position)
    }
}
