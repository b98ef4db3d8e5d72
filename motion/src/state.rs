//! Cursor state values produced by motion.
//!
//! A [`SingleCursorState`] is never mutated in place: every motion returns a
//! fresh value and the caller decides whether to keep the old one.
//!
//! Two numbers ride along with the position:
//!
//! - `leftover_visible_columns`: how far past the last real character the cursor
//!   sits in virtual space. Always 0 when virtual space is off.
//! - `column_hint`: the visible column vertical motion tries to return to, so
//!   moving through a short line does not forget where the cursor came from.

use crate::coords::{Position, Range, Selection, SelectionStartKind};

/// Upper bound for "small" column arithmetic.
pub const MAX_SAFE_SMALL_INTEGER: u32 = 1 << 30;

/// Leftover that pins the cursor to the end of every line it visits vertically.
pub fn sticky_end_of_line_leftover(max_column: u32) -> u32 {
    MAX_SAFE_SMALL_INTEGER.saturating_sub(max_column)
}

/// Whether a leftover (or a visible column derived from one) is the sticky
/// end-of-line sentinel rather than real virtual space.
pub fn is_sticky_end_of_line(value: u32) -> bool {
    value >= MAX_SAFE_SMALL_INTEGER / 2
}

/// Cap for real virtual-space leftover. Kept well under the sticky range so a
/// visible column plus leftover never reads as the sentinel.
pub const MAX_LEFTOVER_VISIBLE_COLUMNS: u32 = MAX_SAFE_SMALL_INTEGER / 4;

/// The part of a leftover that is real virtual space; the sticky sentinel counts as 0.
pub fn virtual_leftover(leftover: u32) -> u32 {
    if is_sticky_end_of_line(leftover) {
        0
    } else {
        leftover
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SingleCursorState {
    /// Anchor of the selection. Empty unless started by a word or line selection.
    pub selection_start: Range,
    pub selection_start_kind: SelectionStartKind,
    /// Virtual-space overflow at the anchor end.
    pub selection_start_leftover_visible_columns: u32,
    /// Active end.
    pub position: Position,
    /// Virtual-space overflow at the active end.
    pub leftover_visible_columns: u32,
    /// Visible column vertical motion aims for; `None` recomputes it from `position`.
    pub column_hint: Option<u32>,
}

impl SingleCursorState {
    pub fn new(
        selection_start: Range,
        selection_start_kind: SelectionStartKind,
        selection_start_leftover_visible_columns: u32,
        position: Position,
        leftover_visible_columns: u32,
        column_hint: Option<u32>,
    ) -> Self {
        Self {
            selection_start,
            selection_start_kind,
            selection_start_leftover_visible_columns,
            position,
            leftover_visible_columns,
            column_hint,
        }
    }

    /// A cursor with no selection.
    pub fn collapsed(position: Position) -> Self {
        Self::new(
            Range::collapsed(position),
            SelectionStartKind::Simple,
            0,
            position,
            0,
            None,
        )
    }

    /// A simple selection anchored at `anchor` with the active end at `position`.
    pub fn selecting(anchor: Position, position: Position) -> Self {
        Self::new(
            Range::collapsed(anchor),
            SelectionStartKind::Simple,
            0,
            position,
            0,
            None,
        )
    }

    /// The selection spanned by the anchor and the active end.
    ///
    /// A non-empty anchor range contributes whichever of its ends lies away from
    /// the active end, so a word selection stays selected when extended backwards.
    pub fn selection(&self) -> Selection {
        let anchor = if self.selection_start.is_empty()
            || !self
                .position
                .is_before_or_equal(&self.selection_start.start_position())
        {
            self.selection_start.start_position()
        } else {
            self.selection_start.end_position()
        };
        Selection::new(anchor, self.position)
    }

    /// Whether anything is selected.
    ///
    /// Two ends on the same column still select the virtual space between them
    /// when their leftovers differ.
    pub fn has_selection(&self) -> bool {
        !self.selection().is_empty()
            || virtual_leftover(self.selection_start_leftover_visible_columns)
                != virtual_leftover(self.leftover_visible_columns)
    }

    /// Move the active end, keeping the anchor when `extend` is set.
    ///
    /// Without `extend` the selection collapses onto the new position and both
    /// leftovers take the new value.
    pub fn move_to(
        &self,
        extend: bool,
        line_number: u32,
        column: u32,
        leftover_visible_columns: u32,
        column_hint: Option<u32>,
    ) -> Self {
        let position = Position::new(line_number, column);
        if extend {
            Self::new(
                self.selection_start,
                self.selection_start_kind,
                self.selection_start_leftover_visible_columns,
                position,
                leftover_visible_columns,
                column_hint,
            )
        } else {
            Self::new(
                Range::collapsed(position),
                SelectionStartKind::Simple,
                leftover_visible_columns,
                position,
                leftover_visible_columns,
                column_hint,
            )
        }
    }

    /// Drop virtual-space leftovers when virtual space is disabled.
    ///
    /// The sticky end-of-line sentinel is kept; it is not virtual space.
    pub fn with_virtual_space(mut self, enabled: bool) -> Self {
        if !enabled {
            if !is_sticky_end_of_line(self.leftover_visible_columns) {
                self.leftover_visible_columns = 0;
            }
            if !is_sticky_end_of_line(self.selection_start_leftover_visible_columns) {
                self.selection_start_leftover_visible_columns = 0;
            }
        }
        self
    }
}

/// Where a vertical motion step landed, before it is folded back into a cursor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorMotionResult {
    pub line_number: u32,
    pub column: u32,
    pub leftover_visible_columns: u32,
    pub column_hint: Option<u32>,
}

impl CursorMotionResult {
    pub fn position(&self) -> Position {
        Position::new(self.line_number, self.column)
    }
}
