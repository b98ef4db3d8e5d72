//! Move cursor down
//!
//! Moves the cursor down by a number of lines while keeping its visible column.
//! Lines whose content normalizes away (collapsed or fully injected) are
//! skipped by retrying from further down, a bounded number of times.

use super::{count_or_one, motion_origin, CursorMotion, MotionDirection};
use crate::{
    config::CursorConfiguration,
    model::{LineModel, PositionAffinity},
    state::{CursorMotionResult, SingleCursorState},
};
use tracing::{debug, trace};

/// Retries after the first attempt of [`CursorMotion::move_down`].
///
/// An empirical cap: enough for realistic runs of hidden lines, not a proof of
/// progress for every arrangement of injected content.
pub const MAX_DOWN_RETRIES: u32 = 10;

impl CursorMotion {
    /// Vertical step of `count` lines down, biased to the right of injected text.
    #[allow(clippy::too_many_arguments)]
    pub fn down<M: LineModel + ?Sized>(
        config: &CursorConfiguration,
        model: &M,
        line_number: u32,
        column: u32,
        leftover_visible_columns: u32,
        column_hint: Option<u32>,
        count: u32,
        allow_edge: bool,
    ) -> CursorMotionResult {
        Self::vertical(
            config,
            model,
            line_number,
            column,
            leftover_visible_columns,
            column_hint,
            i64::from(line_number) + i64::from(count),
            allow_edge,
            Some(PositionAffinity::RightOfInjectedText),
        )
    }

    /// Move down by `line_count` lines.
    ///
    /// # Behavior
    ///
    /// - Keeps the visible column through the column hint
    /// - Clamps to the end of short lines (or moves into virtual space)
    /// - On the last line: moves to the end of the line
    /// - With a selection and `extend` unset: starts from the selection end and
    ///   drops the hint
    /// - Retries from further down at most [`MAX_DOWN_RETRIES`] times while the
    ///   result normalizes back onto the starting line
    ///
    /// # Related
    ///
    /// See also [`CursorMotion::move_up`] for upward movement.
    pub fn move_down<M: LineModel + ?Sized>(
        config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
        line_count: u32,
    ) -> SingleCursorState {
        let origin = motion_origin(cursor, MotionDirection::Down, extend);
        let column_hint = if origin.collapsed {
            None
        } else {
            cursor.column_hint
        };
        let line_number = origin.position.line_number;
        let count = count_or_one(line_count);

        let mut attempt = 0;
        let result = loop {
            let result = Self::down(
                config,
                model,
                line_number + attempt,
                origin.position.column,
                origin.leftover_visible_columns,
                column_hint,
                count,
                true,
            );
            let landed = model.normalize_position(result.position(), PositionAffinity::None);
            if landed.line_number > line_number {
                break result;
            }
            if attempt >= MAX_DOWN_RETRIES {
                debug!(
                    line = line_number,
                    attempts = attempt + 1,
                    "move down made no progress, giving up"
                );
                break result;
            }
            if line_number + attempt + 1 >= model.line_count() {
                break result;
            }
            attempt += 1;
        };

        let moved = cursor.move_to(
            extend,
            result.line_number,
            result.column,
            result.leftover_visible_columns,
            result.column_hint,
        );
        trace!(
            from = %cursor.position,
            to = %moved.position,
            hint = ?moved.column_hint,
            retries = attempt,
            "move down"
        );
        moved
    }

    /// Move down by half of `visible_line_count`, at least one line.
    pub fn move_half_page_down<M: LineModel + ?Sized>(
        config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
        visible_line_count: u32,
    ) -> SingleCursorState {
        Self::move_down(config, model, cursor, extend, (visible_line_count / 2).max(1))
    }
}
