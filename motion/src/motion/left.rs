//! Move cursor left
//!
//! Moves the cursor (or the active end of its selection) left by a number of
//! columns. Leaving a selection without extending it collapses to its start.

use super::{
    horizontal::{HorizontalStrategy, RealSpace, VirtualSpace},
    CursorMotion,
};
use crate::{config::CursorConfiguration, model::LineModel, state::SingleCursorState};
use tracing::trace;

impl CursorMotion {
    /// Move left by `column_count` characters.
    ///
    /// # Behavior
    ///
    /// - Mid-line: moves left, stepping over whole graphemes
    /// - At line start: wraps to the end of the previous line
    /// - At buffer start: no effect
    /// - With a selection and `extend` unset: collapses to the selection start
    /// - With sticky tab stops: jumps whole indentation units inside leading whitespace
    /// - With virtual space: consumes leftover columns before any real step
    ///
    /// # Related
    ///
    /// See also [`CursorMotion::move_right`] for rightward movement.
    pub fn move_left<M: LineModel + ?Sized>(
        config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        extend: bool,
        column_count: u32,
    ) -> SingleCursorState {
        let moved = if config.virtual_space {
            VirtualSpace.move_left(config, model, cursor, extend, column_count)
        } else {
            RealSpace.move_left(config, model, cursor, extend, column_count)
        };
        trace!(
            from = %cursor.position,
            to = %moved.position,
            leftover = moved.leftover_visible_columns,
            extend,
            "move left"
        );
        moved
    }
}
