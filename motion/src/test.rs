//! Test utilities for cursor motion.
//!
//! # Key Components
//!
//! - [`cursor_notation`] - DSL for cursor/selection positions in test strings
//! - [`cursor`] - Parse a notation string straight into a model and cursor state
//! - [`render`] - Print a cursor state back in the same notation
//!
//! # Example
//!
//! ```ignore
//! let (model, cursor) = test::cursor("ab|c\ndef");
//! let moved = CursorMotion::move_down(&config, &model, &cursor, false, 1);
//! assert_eq!(test::render(&model, &moved), "abc\nde|f");
//! ```


use crate::{
    coords::Position,
    model::TextModel,
    state::{is_sticky_end_of_line, SingleCursorState},
};
use cursor_notation::{MarkedSelection, NotationError};

/// Parse `input` into a model and the single cursor or selection it marks.
///
/// # Panics
///
/// Panics if the notation is malformed or does not mark exactly one cursor or
/// selection. Intended for tests only.
pub fn cursor(input: &str) -> (TextModel, SingleCursorState) {
    match try_cursor(input) {
        Ok(parsed) => parsed,
        Err(err) => panic!("invalid cursor notation {input:?}: {err}"),
    }
}

/// Fallible form of [`cursor`].
pub fn try_cursor(input: &str) -> Result<(TextModel, SingleCursorState), NotationError> {
    let parsed = cursor_notation::parse(input)?;
    let marks = parsed.cursors.len() + parsed.selections.len();
    if marks != 1 {
        return Err(NotationError::ExpectedSingleCursor(marks));
    }

    let model = TextModel::new(&parsed.text);
    let state = match (parsed.cursors.first(), parsed.selections.first()) {
        (Some(&position), _) => SingleCursorState::collapsed(position),
        (None, Some(selection)) => {
            let (anchor, active) = selection_ends(selection);
            SingleCursorState::selecting(anchor, active)
        },
        (None, None) => return Err(NotationError::ExpectedSingleCursor(0)),
    };
    Ok((model, state))
}

fn selection_ends(selection: &MarkedSelection) -> (Position, Position) {
    let start = selection.range.start_position();
    let end = selection.range.end_position();
    if selection.cursor_at_start {
        (end, start)
    } else {
        (start, end)
    }
}

/// Render `state` over the text of `model`.
///
/// A collapsed cursor in virtual space is drawn with one `·` per leftover column
/// before the `|` marker.
pub fn render(model: &TextModel, state: &SingleCursorState) -> String {
    let text = model.text();
    let selection = state.selection();
    if !selection.is_empty() {
        let marked = MarkedSelection {
            range: selection.range(),
            cursor_at_start: selection.position == selection.start(),
        };
        return cursor_notation::format(&text, &[], &[marked]);
    }

    let leftover = state.leftover_visible_columns;
    if leftover == 0 || is_sticky_end_of_line(leftover) {
        return cursor_notation::format(&text, &[state.position], &[]);
    }

    let offset = cursor_notation::byte_offset(&text, state.position);
    let mut rendered = String::with_capacity(text.len() + leftover as usize + 1);
    rendered.push_str(&text[..offset]);
    rendered.extend(std::iter::repeat('·').take(leftover as usize));
    rendered.push('|');
    rendered.push_str(&text[offset..]);
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_cursor() {
        let (model, state) = cursor("one\ntw|o");
        assert_eq!(model.text(), "one\ntwo");
        assert_eq!(state.position, Position::new(2, 3));
        assert!(!state.has_selection());
    }

    #[test]
    fn parses_reversed_selection() {
        let (_, state) = cursor("a<||bc|>d");
        let selection = state.selection();
        assert_eq!(selection.selection_start, Position::new(1, 4));
        assert_eq!(selection.position, Position::new(1, 2));
    }

    #[test]
    fn rejects_multiple_cursors() {
        assert_eq!(
            try_cursor("a|b|c").unwrap_err(),
            NotationError::ExpectedSingleCursor(2)
        );
    }

    #[test]
    fn renders_virtual_space() {
        let (model, mut state) = cursor("ab|\ncd");
        state.leftover_visible_columns = 3;
        assert_eq!(render(&model, &state), "ab···|\ncd");
    }

    #[test]
    fn render_round_trips_selection() {
        let input = "x<|yz\nw||>v";
        let (model, state) = cursor(input);
        assert_eq!(render(&model, &state), input);
    }
}
