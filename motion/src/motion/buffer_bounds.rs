//! Buffer start and buffer end motion.

use super::CursorMotion;
use crate::{config::CursorConfiguration, model::LineModel, state::SingleCursorState};
use tracing::trace;

impl CursorMotion {
    /// Move to the first column of the first line.
    pub fn move_to_beginning_of_buffer<M: LineModel + ?Sized>(
        _config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
    ) -> SingleCursorState {
        let moved = cursor.move_to(extend, 1, model.line_min_column(1), 0, None);
        trace!(from = %cursor.position, to = %moved.position, "move to beginning of buffer");
        moved
    }

    /// Move to the last column of the last line.
    pub fn move_to_end_of_buffer<M: LineModel + ?Sized>(
        _config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
    ) -> SingleCursorState {
        let line_number = model.line_count().max(1);
        let moved = cursor.move_to(
            extend,
            line_number,
            model.line_max_column(line_number),
            0,
            None,
        );
        trace!(from = %cursor.position, to = %moved.position, "move to end of buffer");
        moved
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::CursorConfiguration,
        motion::CursorMotion,
        test::{cursor, render},
    };

    #[test]
    fn beginning_of_buffer() {
        let config = CursorConfiguration::default();
        let (model, state) = cursor("abc\nd|ef");
        let moved = CursorMotion::move_to_beginning_of_buffer(&config, &model, &state, false);
        assert_eq!(render(&model, &moved), "|abc\ndef");
    }

    #[test]
    fn end_of_buffer() {
        let config = CursorConfiguration::default();
        let (model, state) = cursor("a|bc\ndef");
        let moved = CursorMotion::move_to_end_of_buffer(&config, &model, &state, false);
        assert_eq!(render(&model, &moved), "abc\ndef|");
    }

    #[test]
    fn buffer_bounds_clear_leftover_and_hint() {
        let config = CursorConfiguration::default().with_virtual_space(true);
        let (model, mut state) = cursor("abc|\ndef");
        state.leftover_visible_columns = 4;
        state.column_hint = Some(7);
        let moved = CursorMotion::move_to_end_of_buffer(&config, &model, &state, false);
        assert_eq!(moved.leftover_visible_columns, 0);
        assert_eq!(moved.column_hint, None);
    }

    #[test]
    fn buffer_bounds_extend() {
        let config = CursorConfiguration::default();
        let (model, state) = cursor("ab|c\ndef");
        let moved = CursorMotion::move_to_end_of_buffer(&config, &model, &state, true);
        assert_eq!(render(&model, &moved), "ab<|c\ndef||>");
    }
}
