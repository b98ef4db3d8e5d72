use glide_motion::{
    CursorConfiguration, CursorMotion, LineModel, Position, PositionAffinity, SingleCursorState,
    TextModel, MAX_DOWN_RETRIES,
};
use std::cell::Cell;

fn at(line_number: u32, column: u32) -> SingleCursorState {
    SingleCursorState::collapsed(Position::new(line_number, column))
}

/// Wraps a [`TextModel`] and counts unbiased normalisations, which
/// `move_down` performs once per attempt.
struct CountingModel {
    inner: TextModel,
    progress_checks: Cell<u32>,
}

impl CountingModel {
    fn new(inner: TextModel) -> Self {
        Self {
            inner,
            progress_checks: Cell::new(0),
        }
    }
}

impl LineModel for CountingModel {
    fn line_count(&self) -> u32 {
        self.inner.line_count()
    }

    fn line_content(&self, line_number: u32) -> &str {
        self.inner.line_content(line_number)
    }

    fn normalize_position(&self, position: Position, affinity: PositionAffinity) -> Position {
        if affinity == PositionAffinity::None {
            self.progress_checks.set(self.progress_checks.get() + 1);
        }
        self.inner.normalize_position(position, affinity)
    }
}

/// `first` followed by `hidden` collapsed lines and one visible line.
fn folded(first: &str, hidden: u32) -> TextModel {
    let mut lines = vec![first.to_string()];
    lines.extend((0..hidden).map(|i| format!("hidden {i}")));
    lines.push("visible".to_string());
    (2..=hidden + 1).fold(TextModel::from_lines(lines), |model, line| {
        model.with_collapsed_line(line)
    })
}

#[test]
fn horizontal_motion_skips_injected_text() {
    glide_log::test();
    let config = CursorConfiguration::default();
    // "let x: i32 = 1" where ": i32" (columns 6..11) is an inlay hint.
    let model = TextModel::new("let x: i32 = 1").with_injected_text(1, 6, 5);

    let mut state = at(1, 5);
    let mut columns = Vec::new();
    for _ in 0..3 {
        state = CursorMotion::move_right(&config, &model, &state, false, 1);
        columns.push(state.position.column);
    }
    assert_eq!(columns, [6, 11, 12]);

    let mut columns = Vec::new();
    for _ in 0..3 {
        state = CursorMotion::move_left(&config, &model, &state, false, 1);
        columns.push(state.position.column);
    }
    assert_eq!(columns, [11, 6, 5]);
}

#[test]
fn vertical_motion_leaves_injected_text_by_direction() {
    let config = CursorConfiguration::default();
    let model = TextModel::new("abcdefgh\nabcdefgh\nabcdefgh").with_injected_text(2, 3, 3);

    let down = CursorMotion::move_down(&config, &model, &at(1, 4), false, 1);
    assert_eq!(down.position, Position::new(2, 6));

    let up = CursorMotion::move_up(&config, &model, &at(3, 4), false, 1);
    assert_eq!(up.position, Position::new(2, 3));
}

#[test]
fn horizontal_motion_crosses_collapsed_lines() {
    let config = CursorConfiguration::default();
    let model = folded("abc", 2);

    let right = CursorMotion::move_right(&config, &model, &at(1, 4), false, 1);
    assert_eq!(right.position, Position::new(4, 1));
    let left = CursorMotion::move_left(&config, &model, &right, false, 1);
    assert_eq!(left.position, Position::new(1, 4));
}

#[test]
fn move_down_retries_past_collapsed_lines() {
    let config = CursorConfiguration::default();
    let model = CountingModel::new(folded("abcdef", 3));

    let moved = CursorMotion::move_down(&config, &model, &at(1, 3), false, 1);
    assert_eq!(moved.position, Position::new(5, 3));
    assert_eq!(model.progress_checks.get(), 4);
}

#[test]
fn move_down_retry_is_bounded() {
    let config = CursorConfiguration::default();
    let model = CountingModel::new(folded("abc", 40));

    let moved = CursorMotion::move_down(&config, &model, &at(1, 2), false, 1);
    assert_eq!(model.progress_checks.get(), MAX_DOWN_RETRIES + 1);
    // Every candidate normalised back onto the first line.
    assert_eq!(moved.position.line_number, 1);
}

#[test]
fn move_down_retry_stops_at_buffer_end() {
    let config = CursorConfiguration::default();
    let inner = (2..=4).fold(
        TextModel::from_lines(["abc", "x", "y", "z"]),
        |model, line| model.with_collapsed_line(line),
    );
    let model = CountingModel::new(inner);

    let moved = CursorMotion::move_down(&config, &model, &at(1, 2), false, 1);
    assert!(model.progress_checks.get() <= 3);
    assert_eq!(moved.position.line_number, 1);
}
