//! Slide a selection up or down by one line without changing its shape.

use super::CursorMotion;
use crate::{
    config::CursorConfiguration,
    coords::{Range, SelectionStartKind},
    model::LineModel,
    state::{CursorMotionResult, SingleCursorState},
};
use tracing::trace;

fn translated(selection_start: CursorMotionResult, position: CursorMotionResult) -> SingleCursorState {
    SingleCursorState::new(
        Range::collapsed(selection_start.position()),
        SelectionStartKind::Simple,
        selection_start.leftover_visible_columns,
        position.position(),
        position.leftover_visible_columns,
        position.column_hint,
    )
}

impl CursorMotion {
    /// Move both ends of the selection one line up.
    ///
    /// Each end keeps its own visible column. Ends on the first line stay where
    /// they are rather than jumping to the line start.
    pub fn translate_up<M: LineModel + ?Sized>(
        config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
    ) -> SingleCursorState {
        let selection = cursor.selection();
        let start = Self::up(
            config,
            model,
            selection.selection_start.line_number,
            selection.selection_start.column,
            cursor.selection_start_leftover_visible_columns,
            None,
            1,
            false,
        );
        let position = Self::up(
            config,
            model,
            selection.position.line_number,
            selection.position.column,
            cursor.leftover_visible_columns,
            cursor.column_hint,
            1,
            false,
        );
        let moved = translated(start, position);
        trace!(from = %cursor.position, to = %moved.position, "translate up");
        moved
    }

    /// Move both ends of the selection one line down.
    pub fn translate_down<M: LineModel + ?Sized>(
        config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
    ) -> SingleCursorState {
        let selection = cursor.selection();
        let start = Self::down(
            config,
            model,
            selection.selection_start.line_number,
            selection.selection_start.column,
            cursor.selection_start_leftover_visible_columns,
            None,
            1,
            false,
        );
        let position = Self::down(
            config,
            model,
            selection.position.line_number,
            selection.position.column,
            cursor.leftover_visible_columns,
            cursor.column_hint,
            1,
            false,
        );
        let moved = translated(start, position);
        trace!(from = %cursor.position, to = %moved.position, "translate down");
        moved
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::CursorConfiguration,
        coords::Position,
        motion::CursorMotion,
        test::{cursor, render},
    };

    #[test]
    fn translate_down_keeps_shape() {
        let config = CursorConfiguration::default();
        let (model, state) = cursor("a<|bc||>d\nefgh\nijkl");
        let moved = CursorMotion::translate_down(&config, &model, &state);
        assert_eq!(render(&model, &moved), "abcd\ne<|fg||>h\nijkl");
        let moved = CursorMotion::translate_down(&config, &model, &moved);
        assert_eq!(render(&model, &moved), "abcd\nefgh\ni<|jk||>l");
    }

    #[test]
    fn translate_up_keeps_direction() {
        let config = CursorConfiguration::default();
        let (model, state) = cursor("abcd\ne<||fg|>h");
        let moved = CursorMotion::translate_up(&config, &model, &state);
        assert_eq!(render(&model, &moved), "a<||bc|>d\nefgh");
    }

    #[test]
    fn translate_at_edge_stays_put() {
        let config = CursorConfiguration::default();
        let (model, state) = cursor("a<|bc||>d\nefgh");
        let moved = CursorMotion::translate_up(&config, &model, &state);
        assert_eq!(render(&model, &moved), "a<|bc||>d\nefgh");
    }

    #[test]
    fn translate_down_on_last_line_stays_put() {
        let config = CursorConfiguration::default();
        let (model, state) = cursor("abcd\ne<|fg||>h");
        let moved = CursorMotion::translate_down(&config, &model, &state);
        assert_eq!(render(&model, &moved), "abcd\ne<|fg||>h");
    }

    #[test]
    fn translate_keeps_virtual_space_selection() {
        let config = CursorConfiguration::default().with_virtual_space(true);
        let (model, mut state) = cursor("ab|\ncd\nef");
        state.selection_start_leftover_visible_columns = 1;
        state.leftover_visible_columns = 4;
        assert!(state.has_selection());

        let moved = CursorMotion::translate_down(&config, &model, &state);
        assert_eq!(moved.selection().selection_start, Position::new(2, 3));
        assert_eq!(moved.position, Position::new(2, 3));
        assert_eq!(moved.selection_start_leftover_visible_columns, 1);
        assert_eq!(moved.leftover_visible_columns, 4);
        assert!(moved.has_selection());

        let moved = CursorMotion::translate_up(&config, &model, &moved);
        assert_eq!(moved.position, Position::new(1, 3));
        assert_eq!(moved.selection_start_leftover_visible_columns, 1);
        assert_eq!(moved.leftover_visible_columns, 4);
    }

    #[test]
    fn translate_carries_position_hint() {
        let config = CursorConfiguration::default();
        let (model, mut state) = cursor("|abcdef\nab\nabcdef");
        state.position = Position::new(1, 6);
        state.column_hint = Some(5);
        let moved = CursorMotion::translate_down(&config, &model, &state);
        assert_eq!(moved.position, Position::new(2, 3));
        assert_eq!(moved.column_hint, Some(5));
        let moved = CursorMotion::translate_down(&config, &model, &moved);
        assert_eq!(moved.position, Position::new(3, 6));
    }
}
