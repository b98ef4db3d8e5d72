//! The vertical motion primitive shared by up, down and translate.

use super::{clip_range, CursorMotion};
use crate::{
    config::CursorConfiguration,
    coords::Position,
    model::{LineModel, PositionAffinity},
    state::{is_sticky_end_of_line, CursorMotionResult, MAX_LEFTOVER_VISIBLE_COLUMNS},
};

impl CursorMotion {
    /// Move from `(line_number, column)` to `new_line_number`, keeping the visible column.
    ///
    /// The visible column comes from `column_hint` when present, otherwise from the
    /// tab-expanded `column` plus `leftover_visible_columns`. It is returned as the
    /// new hint so a run of vertical moves stays in one visual column.
    ///
    /// Out-of-range target lines are clamped. Without virtual space, landing
    /// outside the buffer moves to the edge line's start (up) or end (down) when
    /// `allow_edge` is set, and a cursor already at the buffer start (up) or end
    /// (down) loses its hint. With virtual space the column is clamped to the
    /// line and any remaining visible columns become leftover.
    #[allow(clippy::too_many_arguments)]
    pub fn vertical<M: LineModel + ?Sized>(
        config: &CursorConfiguration,
        model: &M,
        line_number: u32,
        column: u32,
        leftover_visible_columns: u32,
        column_hint: Option<u32>,
        new_line_number: i64,
        allow_edge: bool,
        affinity: Option<PositionAffinity>,
    ) -> CursorMotionResult {
        let visible_column = column_hint.unwrap_or_else(|| {
            config
                .visible_column_from_column(model, Position::new(line_number, column))
                .saturating_add(leftover_visible_columns)
        });
        let line_count = model.line_count().max(1);
        let moving_up = new_line_number < i64::from(line_number);

        let (target_line, target_column, at_edge) = if config.virtual_space {
            let target_line = clip_range(new_line_number, 1, line_count);
            let target_column =
                config.column_from_visible_column(model, target_line, i64::from(visible_column));
            (target_line, target_column, false)
        } else {
            let at_edge = if moving_up {
                line_number == 1 && column <= model.line_min_column(1)
            } else {
                line_number == line_count && column >= model.line_max_column(line_count)
            };

            if new_line_number < 1 {
                let edge_column = if allow_edge {
                    model.line_min_column(1)
                } else {
                    column.min(model.line_max_column(1))
                };
                (1, edge_column, at_edge)
            } else if new_line_number > i64::from(line_count) {
                let edge_column = if allow_edge {
                    model.line_max_column(line_count)
                } else {
                    column.min(model.line_max_column(line_count))
                };
                (line_count, edge_column, at_edge)
            } else {
                let target_line = new_line_number as u32;
                let target_column = config.column_from_visible_column(
                    model,
                    target_line,
                    i64::from(visible_column),
                );
                (target_line, target_column, at_edge)
            }
        };

        let mut position = Position::new(target_line, target_column);
        if let Some(affinity) = affinity {
            position = model.normalize_position(position, affinity);
        }

        let leftover_visible_columns = if config.virtual_space
            && !at_edge
            && !is_sticky_end_of_line(visible_column)
            && position.column >= model.line_max_column(position.line_number)
        {
            visible_column
                .saturating_sub(config.visible_column_from_column(model, position))
                .min(MAX_LEFTOVER_VISIBLE_COLUMNS)
        } else {
            0
        };

        CursorMotionResult {
            line_number: position.line_number,
            column: position.column,
            leftover_visible_columns,
            column_hint: (!at_edge).then_some(visible_column),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::CursorConfiguration,
        coords::Position,
        model::{PositionAffinity, TextModel},
        motion::CursorMotion,
        state::sticky_end_of_line_leftover,
    };

    fn model() -> TextModel {
        TextModel::from_lines(["hello world", "ab", "\tx", "last line"])
    }

    #[test]
    fn computes_hint_from_column_and_leftover() {
        let config = CursorConfiguration::default();
        let r = CursorMotion::vertical(&config, &model(), 1, 8, 0, None, 2, true, None);
        assert_eq!(r.position(), Position::new(2, 3));
        assert_eq!(r.column_hint, Some(7));
        assert_eq!(r.leftover_visible_columns, 0);
    }

    #[test]
    fn hint_wins_over_column() {
        let config = CursorConfiguration::default();
        let r = CursorMotion::vertical(&config, &model(), 2, 3, 0, Some(7), 4, true, None);
        assert_eq!(r.position(), Position::new(4, 8));
        assert_eq!(r.column_hint, Some(7));
    }

    #[test]
    fn tabs_round_to_nearer_edge() {
        let config = CursorConfiguration::default();
        // Visible column 1 lies inside the tab (0..4) and rounds left.
        let r = CursorMotion::vertical(&config, &model(), 1, 2, 0, None, 3, true, None);
        assert_eq!(r.position(), Position::new(3, 1));
        // Visible column 3 rounds right, past the tab.
        let r = CursorMotion::vertical(&config, &model(), 1, 4, 0, None, 3, true, None);
        assert_eq!(r.position(), Position::new(3, 2));
    }

    #[test]
    fn past_last_line_moves_to_its_end() {
        let config = CursorConfiguration::default();
        let r = CursorMotion::vertical(&config, &model(), 4, 2, 0, None, 5, true, None);
        assert_eq!(r.position(), Position::new(4, 10));
        assert_eq!(r.column_hint, Some(1));

        let r = CursorMotion::vertical(&config, &model(), 4, 2, 0, None, 5, false, None);
        assert_eq!(r.position(), Position::new(4, 2));
    }

    #[test]
    fn before_first_line_moves_to_its_start() {
        let config = CursorConfiguration::default();
        let r = CursorMotion::vertical(&config, &model(), 1, 5, 0, None, 0, true, None);
        assert_eq!(r.position(), Position::new(1, 1));
    }

    #[test]
    fn edge_position_drops_hint() {
        let config = CursorConfiguration::default();
        let r = CursorMotion::vertical(&config, &model(), 4, 10, 0, Some(3), 5, true, None);
        assert_eq!(r.position(), Position::new(4, 10));
        assert_eq!(r.column_hint, None);

        let r = CursorMotion::vertical(&config, &model(), 1, 1, 0, Some(3), 0, true, None);
        assert_eq!(r.column_hint, None);
    }

    #[test]
    fn virtual_space_keeps_overflow_as_leftover() {
        let config = CursorConfiguration::default().with_virtual_space(true);
        let r = CursorMotion::vertical(&config, &model(), 1, 8, 0, None, 2, true, None);
        assert_eq!(r.position(), Position::new(2, 3));
        assert_eq!(r.leftover_visible_columns, 5);
        assert_eq!(r.column_hint, Some(7));
    }

    #[test]
    fn virtual_space_clamps_target_line() {
        let config = CursorConfiguration::default().with_virtual_space(true);
        let r = CursorMotion::vertical(&config, &model(), 3, 1, 0, None, 99, true, None);
        assert_eq!(r.line_number, 4);
    }

    #[test]
    fn sticky_hint_tracks_end_of_line_without_leftover() {
        let config = CursorConfiguration::default().with_virtual_space(true);
        let sticky = sticky_end_of_line_leftover(12);
        let r = CursorMotion::vertical(&config, &model(), 1, 12, sticky, None, 2, true, None);
        assert_eq!(r.position(), Position::new(2, 3));
        assert_eq!(r.leftover_visible_columns, 0);
    }

    #[test]
    fn affinity_normalizes_out_of_injected_text() {
        let config = CursorConfiguration::default();
        let model = TextModel::from_lines(["abcdef", "abcdef"]).with_injected_text(2, 2, 3);
        let r = CursorMotion::vertical(
            &config,
            &model,
            1,
            3,
            0,
            None,
            2,
            true,
            Some(PositionAffinity::RightOfInjectedText),
        );
        assert_eq!(r.position(), Position::new(2, 5));

        let r = CursorMotion::vertical(
            &config,
            &model,
            1,
            3,
            0,
            None,
            2,
            true,
            Some(PositionAffinity::LeftOfInjectedText),
        );
        assert_eq!(r.position(), Position::new(2, 2));
    }
}
