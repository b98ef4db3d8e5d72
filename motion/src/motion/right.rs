//! Move cursor right
//!
//! Moves the cursor (or the active end of its selection) right by a number of
//! columns. Leaving a selection without extending it collapses to its end.

use super::{
    horizontal::{HorizontalStrategy, RealSpace, VirtualSpace},
    CursorMotion,
};
use crate::{config::CursorConfiguration, model::LineModel, state::SingleCursorState};
use tracing::trace;

impl CursorMotion {
    /// Move right by `column_count` characters.
    ///
    /// # Behavior
    ///
    /// - Mid-line: moves right, stepping over whole graphemes
    /// - At line end: wraps to the start of the next line
    /// - At buffer end: no effect
    /// - With a selection and `extend` unset: collapses to the selection end
    /// - With virtual space: never wraps; moves into virtual space instead
    ///
    /// # Related
    ///
    /// See also [`CursorMotion::move_left`] for leftward movement.
    pub fn move_right<M: LineModel + ?Sized>(
        config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
        column_count: u32,
    ) -> SingleCursorState {
        let moved = if config.virtual_space {
            VirtualSpace.move_right(config, model, cursor, extend, column_count)
        } else {
            RealSpace.move_right(config, model, cursor, extend, column_count)
        };
        trace!(
            from = %cursor.position,
            to = %moved.position,
            leftover = moved.leftover_visible_columns,
            extend,
            "move right"
        );
        moved
    }
}
