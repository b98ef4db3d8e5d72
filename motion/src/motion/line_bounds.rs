//! Line start and line end motion.

use super::CursorMotion;
use crate::{
    config::CursorConfiguration,
    model::LineModel,
    state::{sticky_end_of_line_leftover, SingleCursorState},
};
use tracing::trace;

impl CursorMotion {
    /// Toggle between the first non-whitespace column and the line start.
    ///
    /// From anywhere but the first non-whitespace column, moves there. From the
    /// first non-whitespace column, moves to the line's min column. Blank lines
    /// always go to the min column.
    pub fn move_to_beginning_of_line<M: LineModel + ?Sized>(
        _config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
    ) -> SingleCursorState {
        let line_number = cursor.position.line_number;
        let min_column = model.line_min_column(line_number);
        let first_non_blank = first_non_blank_column(model, line_number);

        let column = if cursor.position.column == first_non_blank {
            min_column
        } else {
            first_non_blank
        };
        let moved = cursor.move_to(extend, line_number, column, 0, None);
        trace!(from = %cursor.position, to = %moved.position, "move to beginning of line");
        moved
    }

    /// Move to the first non-whitespace column without toggling.
    pub fn move_to_first_non_whitespace<M: LineModel + ?Sized>(
        _config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
    ) -> SingleCursorState {
        let line_number = cursor.position.line_number;
        let column = first_non_blank_column(model, line_number);
        let moved = cursor.move_to(extend, line_number, column, 0, None);
        trace!(from = %cursor.position, to = %moved.position, "move to first non-whitespace");
        moved
    }

    /// Move to the end of the line.
    ///
    /// With `sticky`, the cursor keeps to the end of every line reached by
    /// following vertical motion until a horizontal motion clears it.
    pub fn move_to_end_of_line<M: LineModel + ?Sized>(
        _config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
        sticky: bool,
    ) -> SingleCursorState {
        let line_number = cursor.position.line_number;
        let max_column = model.line_max_column(line_number);
        let leftover = if sticky {
            sticky_end_of_line_leftover(max_column)
        } else {
            0
        };
        let moved = cursor.move_to(extend, line_number, max_column, leftover, None);
        trace!(from = %cursor.position, to = %moved.position, sticky, "move to end of line");
        moved
    }
}

fn first_non_blank_column<M: LineModel + ?Sized>(model: &M, line_number: u32) -> u32 {
    match model.line_first_non_whitespace_column(line_number) {
        0 => model.line_min_column(line_number),
        column => column,
    }
}
