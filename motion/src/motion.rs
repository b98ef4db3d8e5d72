//! Cursor motion operations.
//!
//! [`CursorMotion`] is stateless: every operation takes a configuration, a line
//! model, the current [`SingleCursorState`] and returns a new one. Nothing is
//! mutated and nothing fails; out-of-range intermediate values are clipped.
//!
//! # Operation Organization
//!
//! - Horizontal: [`left`], [`right`] (two strategies, see [`horizontal`])
//! - Vertical: [`up`], [`down`], [`translate`], built on [`vertical`]
//! - Line bounds: [`line_bounds`]
//! - Buffer bounds: [`buffer_bounds`]
//! - Blank-line navigation: [`blank_line`]
//! - Command dispatch: [`command`]
//!
//! # Selections
//!
//! When the cursor owns a selection and the motion does not extend it, the
//! motion starts from one edge of the selection instead of the active end. Which
//! edge is a per-direction policy, see [`origin_edge`].

pub mod blank_line;
pub mod buffer_bounds;
pub mod command;
pub mod down;
pub mod horizontal;
pub mod left;
pub mod line_bounds;
pub mod right;
pub mod translate;
pub mod up;
pub mod vertical;

use crate::{
    coords::Position,
    model::LineModel,
    state::{virtual_leftover, SingleCursorState},
};

/// Entry point for all motion operations. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorMotion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Which end of the current selection a motion starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectionEdge {
    /// The active end; the selection is extended or there is none.
    Active,
    /// The leftmost end.
    Start,
    /// The rightmost end.
    End,
}

/// Collapse policy keyed by direction and whether the selection is extended.
pub(crate) const fn origin_edge(direction: MotionDirection, extend: bool) -> SelectionEdge {
    match (direction, extend) {
        (_, true) => SelectionEdge::Active,
        (MotionDirection::Left | MotionDirection::Up, false) => SelectionEdge::Start,
        (MotionDirection::Right | MotionDirection::Down, false) => SelectionEdge::End,
    }
}

/// Starting point of a motion after applying the collapse policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MotionOrigin {
    pub position: Position,
    pub leftover_visible_columns: u32,
    /// A non-empty selection was left without extending it.
    pub collapsed: bool,
}

pub(crate) fn motion_origin(
    cursor: &SingleCursorState,
    direction: MotionDirection,
    extend: bool,
) -> MotionOrigin {
    let active_origin = MotionOrigin {
        position: cursor.position,
        leftover_visible_columns: cursor.leftover_visible_columns,
        collapsed: false,
    };
    if !cursor.has_selection() {
        return active_origin;
    }

    // Ends order by position, then by virtual space, so a selection lying
    // entirely past the end of a line still has a start and an end.
    let anchor = (
        cursor.selection().selection_start,
        cursor.selection_start_leftover_visible_columns,
    );
    let active = (cursor.position, cursor.leftover_visible_columns);
    let key = |(position, leftover): (Position, u32)| (position, virtual_leftover(leftover));
    let (start, end) = if key(active) < key(anchor) {
        (active, anchor)
    } else {
        (anchor, active)
    };
    let (position, leftover_visible_columns) = match origin_edge(direction, extend) {
        SelectionEdge::Active => return active_origin,
        SelectionEdge::Start => start,
        SelectionEdge::End => end,
    };

    MotionOrigin {
        position,
        leftover_visible_columns,
        collapsed: true,
    }
}

pub(crate) fn clip_range(value: i64, min: u32, max: u32) -> u32 {
    value.clamp(i64::from(min), i64::from(max.max(min))) as u32
}

/// Clamp the column of `position` into the valid columns of its own line.
pub(crate) fn clip_position_column<M: LineModel + ?Sized>(model: &M, position: Position) -> Position {
    let line_number = position.line_number;
    Position::new(
        line_number,
        clip_range(
            i64::from(position.column),
            model.line_min_column(line_number),
            model.line_max_column(line_number),
        ),
    )
}

/// Treat zero counts as one.
pub(crate) fn count_or_one(count: u32) -> u32 {
    count.max(1)
}
