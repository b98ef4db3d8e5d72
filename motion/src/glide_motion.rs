//! Cursor and selection motion for a single text cursor.
//!
//! Everything here is a pure function of a [`CursorConfiguration`], a read-only
//! [`LineModel`] and the current [`SingleCursorState`]. Every motion returns a
//! new state, so callers keep history by keeping old values.
//!
//! # Layout
//!
//! - [`coords`] - positions, ranges and selections
//! - [`columns`] - visible columns, tab expansion and grapheme boundaries
//! - [`tab_stops`] - atomic movement across soft tabs
//! - [`model`] - the [`LineModel`] trait and the in-memory [`TextModel`]
//! - [`config`] - [`CursorConfiguration`] and its TOML loader
//! - [`state`] - [`SingleCursorState`] and [`CursorMotionResult`]
//! - [`motion`] - the [`CursorMotion`] operations and [`MotionCommand`]

pub mod columns;
pub mod config;
pub mod coords;
pub mod model;
pub mod motion;
pub mod state;
pub mod tab_stops;

#[cfg(test)]
pub mod test;

pub use config::{ConfigError, CursorConfiguration};
pub use coords::{Position, Range, Selection, SelectionDirection, SelectionStartKind};
pub use model::{LineModel, PositionAffinity, TextModel};
pub use motion::{
    command::{CommandParseError, MotionCommand},
    down::MAX_DOWN_RETRIES,
    horizontal::{HorizontalStrategy, RealSpace, VirtualSpace},
    CursorMotion, MotionDirection,
};
pub use state::{CursorMotionResult, SingleCursorState};
