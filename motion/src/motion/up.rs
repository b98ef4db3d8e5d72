//! Move cursor up
//!
//! Moves the cursor up by a number of lines while keeping its visible column.

use super::{count_or_one, motion_origin, CursorMotion, MotionDirection};
use crate::{
    config::CursorConfiguration,
    model::{LineModel, PositionAffinity},
    state::{CursorMotionResult, SingleCursorState},
};
use tracing::trace;

impl CursorMotion {
    /// Vertical step of `count` lines up, biased to the left of injected text.
    #[allow(clippy::too_many_arguments)]
    pub fn up<M: LineModel + ?Sized>(
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
            i64::from(line_number) - i64::from(count),
            allow_edge,
            Some(PositionAffinity::LeftOfInjectedText),
        )
    }

    /// Move up by `line_count` lines.
    ///
    /// # Behavior
    ///
    /// - Keeps the visible column through the column hint
    /// - On the first line: moves to the start of the line
    /// - With a selection and `extend` unset: starts from the selection start and
    ///   drops the hint
    ///
    /// # Related
    ///
    /// See also [`CursorMotion::move_down`] for downward movement.
    pub fn move_up<M: LineModel + ?Sized>(
        config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
        line_count: u32,
    ) -> SingleCursorState {
        let origin = motion_origin(cursor, MotionDirection::Up, extend);
        let column_hint = if origin.collapsed {
            None
        } else {
            cursor.column_hint
        };

        let result = Self::up(
            config,
            model,
            origin.position.line_number,
            origin.position.column,
            origin.leftover_visible_columns,
            column_hint,
            count_or_one(line_count),
            true,
        );
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
            "move up"
        );
        moved
    }

    /// Move up by half of `visible_line_count`, at least one line.
    pub fn move_half_page_up<M: LineModel + ?Sized>(
        config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
        visible_line_count: u32,
    ) -> SingleCursorState {
        Self::move_up(config, model, cursor, extend, (visible_line_count / 2).max(1))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::CursorConfiguration,
        motion::CursorMotion,
        test::{cursor, render},
    };

    fn up(input: &str, extend: bool, count: u32) -> String {
        let (model, state) = cursor(input);
        let moved =
            CursorMotion::move_up(&CursorConfiguration::default(), &model, &state, extend, count);
        render(&model, &moved)
    }

    #[test]
    fn move_up_basic() {
        assert_eq!(up("foo\nb|ar", false, 1), "f|oo\nbar");
    }

    #[test]
    fn move_up_at_first_line() {
        assert_eq!(up("fo|o\nbar", false, 1), "|foo\nbar");
    }

    #[test]
    fn move_up_maintains_column_hint() {
        let config = CursorConfiguration::default();
        let (model, state) = cursor("hello\nx\nwor|ld");
        let once = CursorMotion::move_up(&config, &model, &state, false, 1);
        assert_eq!(render(&model, &once), "hello\nx|\nworld");
        let twice = CursorMotion::move_up(&config, &model, &once, false, 1);
        assert_eq!(render(&model, &twice), "hel|lo\nx\nworld");
    }

    #[test]
    fn move_up_collapses_selection_from_start() {
        assert_eq!(up("abc\nd<|ef||>", false, 1), "a|bc\ndef");
    }

    #[test]
    fn move_up_extends_selection() {
        assert_eq!(up("abc\nd|ef", true, 1), "a<||bc\nd|>ef");
    }

    #[test]
    fn move_up_across_tabs() {
        // Visible column 4 on the tabbed line is column 2 there.
        assert_eq!(up("\tx\nabcd|e", false, 1), "\t|x\nabcde");
    }

    #[test]
    fn half_page_up() {
        let config = CursorConfiguration::default();
        let (model, state) = cursor("1\n2\n3\n4\n|5");
        let moved = CursorMotion::move_half_page_up(&config, &model, &state, false, 4);
        assert_eq!(render(&model, &moved), "1\n2\n|3\n4\n5");
    }
}
