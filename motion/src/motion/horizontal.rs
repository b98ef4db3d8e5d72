//! Horizontal motion strategies.
//!
//! Left and right motion behave differently depending on whether the cursor may
//! rest past the end of a line. The two behaviours are separate strategies,
//! picked once per call from [`CursorConfiguration::virtual_space`]:
//!
//! - [`RealSpace`]: the cursor always sits on a real column. Stepping past the
//!   end of a line wraps to the next one.
//! - [`VirtualSpace`]: the cursor may sit past the end of a line. The overflow is
//!   tracked as leftover visible columns and rightward motion never wraps.
//!
//! Both strategies share the single-step primitives on [`CursorMotion`]: a plain
//! step over one grapheme, or an atomic step over a whole soft-tab unit when
//! sticky tab stops are enabled.

use super::{
    clip_position_column, count_or_one, motion_origin, CursorMotion, MotionDirection,
};
use crate::{
    columns::{next_char_length, prev_char_length},
    config::CursorConfiguration,
    coords::Position,
    model::{LineModel, PositionAffinity},
    state::{virtual_leftover, SingleCursorState, MAX_LEFTOVER_VISIBLE_COLUMNS},
    tab_stops::{atomic_position, AtomicDirection},
};

impl CursorMotion {
    /// One character to the left, wrapping to the end of the previous line.
    ///
    /// No-op at the start of the buffer.
    pub fn left_position<M: LineModel + ?Sized>(model: &M, position: Position) -> Position {
        let line_number = position.line_number;
        if position.column > model.line_min_column(line_number) {
            let content = model.line_content(line_number);
            let len = prev_char_length(content, position.column - 1).max(1);
            Position::new(line_number, position.column - len)
        } else if line_number > 1 {
            let prev = line_number - 1;
            Position::new(prev, model.line_max_column(prev))
        } else {
            position
        }
    }

    /// Like [`CursorMotion::left_position`], but jumps a whole indentation unit
    /// when inside the leading whitespace.
    pub fn left_position_atomic_soft_tabs<M: LineModel + ?Sized>(
        model: &M,
        position: Position,
        tab_size: u32,
    ) -> Position {
        let line_number = position.line_number;
        if position.column <= model.line_indent_column(line_number) {
            let min_column = model.line_min_column(line_number);
            let content = model.line_content(line_number);
            let stop = atomic_position(
                content,
                position.column - 1,
                tab_size,
                AtomicDirection::Left,
            );
            if let Some(index) = stop.filter(|&index| index + 1 >= min_column) {
                return Position::new(line_number, index + 1);
            }
        }
        Self::left_position(model, position)
    }

    /// One character to the right, wrapping to the start of the next line.
    ///
    /// No-op at the end of the buffer.
    pub fn right_position<M: LineModel + ?Sized>(model: &M, position: Position) -> Position {
        let line_number = position.line_number;
        if position.column < model.line_max_column(line_number) {
            let content = model.line_content(line_number);
            let len = next_char_length(content, position.column - 1).max(1);
            Position::new(line_number, position.column + len)
        } else if line_number < model.line_count() {
            let next = line_number + 1;
            Position::new(next, model.line_min_column(next))
        } else {
            position
        }
    }

    /// Like [`CursorMotion::right_position`], but jumps a whole indentation unit
    /// when inside the leading whitespace.
    pub fn right_position_atomic_soft_tabs<M: LineModel + ?Sized>(
        model: &M,
        position: Position,
        tab_size: u32,
    ) -> Position {
        let line_number = position.line_number;
        if position.column < model.line_indent_column(line_number) {
            let content = model.line_content(line_number);
            if let Some(index) = atomic_position(
                content,
                position.column - 1,
                tab_size,
                AtomicDirection::Right,
            ) {
                return Position::new(line_number, index + 1);
            }
        }
        Self::right_position(model, position)
    }
}

/// One real step left, settled outside injected text.
fn step_left<M: LineModel + ?Sized>(
    config: &CursorConfiguration,
    model: &M,
    position: Position,
) -> Position {
    let stepped = if config.sticky_tab_stops {
        CursorMotion::left_position_atomic_soft_tabs(model, position, config.tab_size)
    } else {
        CursorMotion::left_position(model, position)
    };
    model.normalize_position(stepped, PositionAffinity::Left)
}

/// One real step right, settled outside injected text.
fn step_right<M: LineModel + ?Sized>(
    config: &CursorConfiguration,
    model: &M,
    position: Position,
) -> Position {
    let stepped = if config.sticky_tab_stops {
        CursorMotion::right_position_atomic_soft_tabs(model, position, config.tab_size)
    } else {
        CursorMotion::right_position(model, position)
    };
    model.normalize_position(stepped, PositionAffinity::Right)
}

/// A way of moving the cursor left and right.
pub trait HorizontalStrategy {
    fn move_left<M: LineModel + ?Sized>(
        &self,
        config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
        column_count: u32,
    ) -> SingleCursorState;

    fn move_right<M: LineModel + ?Sized>(
        &self,
        config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
        column_count: u32,
    ) -> SingleCursorState;
}

/// Horizontal motion restricted to real columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealSpace;

impl HorizontalStrategy for RealSpace {
    fn move_left<M: LineModel + ?Sized>(
        &self,
        config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
        column_count: u32,
    ) -> SingleCursorState {
        let origin = motion_origin(cursor, MotionDirection::Left, extend);
        if origin.collapsed {
            let p = origin.position;
            return cursor.move_to(false, p.line_number, p.column, 0, None);
        }

        // A count of 1 leaves the candidate on the cursor; the step below does the move.
        let candidate = cursor
            .position
            .delta_column(-i64::from(count_or_one(column_count) - 1));
        let normalized = model.normalize_position(
            clip_position_column(model, candidate),
            PositionAffinity::Left,
        );
        let p = step_left(config, model, normalized);
        cursor.move_to(extend, p.line_number, p.column, 0, None)
    }

    fn move_right<M: LineModel + ?Sized>(
        &self,
        config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
        column_count: u32,
    ) -> SingleCursorState {
        let origin = motion_origin(cursor, MotionDirection::Right, extend);
        if origin.collapsed {
            let p = origin.position;
            return cursor.move_to(false, p.line_number, p.column, 0, None);
        }

        let candidate = cursor
            .position
            .delta_column(i64::from(count_or_one(column_count) - 1));
        let normalized = model.normalize_position(
            clip_position_column(model, candidate),
            PositionAffinity::Right,
        );
        let p = step_right(config, model, normalized);
        cursor.move_to(extend, p.line_number, p.column, 0, None)
    }
}

/// Horizontal motion that may leave the cursor past the end of a line.
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualSpace;

impl HorizontalStrategy for VirtualSpace {
    fn move_left<M: LineModel + ?Sized>(
        &self,
        config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
        column_count: u32,
    ) -> SingleCursorState {
        let origin = motion_origin(cursor, MotionDirection::Left, extend);
        if origin.collapsed {
            let p = origin.position;
            let leftover = virtual_leftover(origin.leftover_visible_columns);
            return cursor.move_to(false, p.line_number, p.column, leftover, None);
        }

        let virtual_column = i64::from(cursor.position.column)
            + i64::from(virtual_leftover(cursor.leftover_visible_columns))
            - i64::from(count_or_one(column_count) - 1);
        let candidate = Position::new(cursor.position.line_number, virtual_column.max(1) as u32);
        let clipped = clip_position_column(model, candidate);
        let normalized = model.normalize_position(clipped, PositionAffinity::Left);

        // Still past the end of the line: give up one column of virtual space.
        let overshoot = if candidate.column > clipped.column {
            i64::from(candidate.column) - i64::from(normalized.column)
        } else {
            0
        };
        if overshoot >= 1 {
            return cursor.move_to(
                extend,
                normalized.line_number,
                normalized.column,
                (overshoot - 1) as u32,
                None,
            );
        }

        let p = step_left(config, model, normalized);
        cursor.move_to(extend, p.line_number, p.column, 0, None)
    }

    fn move_right<M: LineModel + ?Sized>(
        &self,
        config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
        column_count: u32,
    ) -> SingleCursorState {
        let origin = motion_origin(cursor, MotionDirection::Right, extend);
        if origin.collapsed {
            let p = origin.position;
            let leftover = virtual_leftover(origin.leftover_visible_columns);
            return cursor.move_to(false, p.line_number, p.column, leftover, None);
        }

        let virtual_column = i64::from(cursor.position.column)
            + i64::from(virtual_leftover(cursor.leftover_visible_columns))
            + i64::from(count_or_one(column_count) - 1);
        let line_number = cursor.position.line_number;
        let max_column = model.line_max_column(line_number);
        let clipped = clip_position_column(
            model,
            Position::new(line_number, virtual_column.min(i64::from(u32::MAX)) as u32),
        );
        let normalized = model.normalize_position(clipped, PositionAffinity::Right);

        if normalized.line_number == line_number && normalized.column >= max_column {
            // At or past the end of the line: grow virtual space instead of wrapping.
            let leftover = (virtual_column + 1 - i64::from(max_column))
                .clamp(1, i64::from(MAX_LEFTOVER_VISIBLE_COLUMNS));
            return cursor.move_to(extend, line_number, max_column, leftover as u32, None);
        }

        let p = step_right(config, model, normalized);
        cursor.move_to(extend, p.line_number, p.column, 0, None)
    }
}
