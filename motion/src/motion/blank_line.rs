//! Paragraph-wise motion between blank lines.
//!
//! A line is blank when it has no non-whitespace character. Both directions
//! first leave the run of blank lines the cursor is in, then cross the next run
//! of non-blank lines and stop on the first blank line after it, or at the
//! buffer edge.

use super::CursorMotion;
use crate::{config::CursorConfiguration, model::LineModel, state::SingleCursorState};
use tracing::trace;

fn is_blank_line<M: LineModel + ?Sized>(model: &M, line_number: u32) -> bool {
    model.line_first_non_whitespace_column(line_number) == 0
}

impl CursorMotion {
    pub fn move_to_prev_blank_line<M: LineModel + ?Sized>(
        _config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
    ) -> SingleCursorState {
        let mut line_number = cursor.position.line_number;
        while line_number > 1 && is_blank_line(model, line_number) {
            line_number -= 1;
        }
        while line_number > 1 && !is_blank_line(model, line_number) {
            line_number -= 1;
        }

        let moved = cursor.move_to(extend, line_number, model.line_min_column(line_number), 0, None);
        trace!(from = %cursor.position, to = %moved.position, "move to previous blank line");
        moved
    }

    pub fn move_to_next_blank_line<M: LineModel + ?Sized>(
        _config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
    ) -> SingleCursorState {
        let line_count = model.line_count();
        let mut line_number = cursor.position.line_number;
        while line_number < line_count && is_blank_line(model, line_number) {
            line_number += 1;
        }
        while line_number < line_count && !is_blank_line(model, line_number) {
            line_number += 1;
        }

        let moved = cursor.move_to(extend, line_number, model.line_min_column(line_number), 0, None);
        trace!(from = %cursor.position, to = %moved.position, "move to next blank line");
        moved
    }
}
