//! Motion commands as values.
//!
//! [`MotionCommand`] names every motion with its arguments so callers can store,
//! replay and print motions. The textual form is what the command line accepts:
//!
//! ```text
//! [shift+]<name>[:<count>][!]
//!
//! left  right:3  shift+down  end!  shift+buffer-end  half-page-down:40
//! ```
//!
//! `shift+` extends the selection, `:<count>` repeats the motion (for half-page
//! motion it is the number of visible lines), and `!` makes `end` sticky.

use super::CursorMotion;
use crate::{config::CursorConfiguration, model::LineModel, state::SingleCursorState};
use std::{fmt, str::FromStr};
use thiserror::Error;

const EXTEND_PREFIX: &str = "shift+";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionCommand {
    Left { extend: bool, count: u32 },
    Right { extend: bool, count: u32 },
    Up { extend: bool, count: u32 },
    Down { extend: bool, count: u32 },
    HalfPageUp { extend: bool, visible_lines: u32 },
    HalfPageDown { extend: bool, visible_lines: u32 },
    TranslateUp,
    TranslateDown,
    LineStart { extend: bool },
    FirstNonWhitespace { extend: bool },
    LineEnd { extend: bool, sticky: bool },
    BufferStart { extend: bool },
    BufferEnd { extend: bool },
    PrevBlankLine { extend: bool },
    NextBlankLine { extend: bool },
}

/// Errors from parsing the textual form of a [`MotionCommand`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("Empty motion command")]
    Empty,

    #[error("Unknown motion command: {0}")]
    UnknownCommand(String),

    #[error("Invalid count {count:?} for {name}")]
    InvalidCount { name: String, count: String },

    #[error("{0} requires a count")]
    MissingCount(String),

    #[error("{0} does not take a count")]
    UnexpectedCount(String),

    #[error("{0} cannot be sticky, only end can")]
    UnexpectedSticky(String),

    #[error("{0} cannot extend the selection")]
    UnexpectedExtend(String),
}

impl MotionCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left { .. } => "left",
            Self::Right { .. } => "right",
            Self::Up { .. } => "up",
            Self::Down { .. } => "down",
            Self::HalfPageUp { .. } => "half-page-up",
            Self::HalfPageDown { .. } => "half-page-down",
            Self::TranslateUp => "translate-up",
            Self::TranslateDown => "translate-down",
            Self::LineStart { .. } => "home",
            Self::FirstNonWhitespace { .. } => "first-non-whitespace",
            Self::LineEnd { .. } => "end",
            Self::BufferStart { .. } => "buffer-start",
            Self::BufferEnd { .. } => "buffer-end",
            Self::PrevBlankLine { .. } => "prev-blank-line",
            Self::NextBlankLine { .. } => "next-blank-line",
        }
    }

    /// Whether the command extends the selection instead of collapsing it.
    pub fn extends(&self) -> bool {
        match *self {
            Self::Left { extend, .. }
            | Self::Right { extend, .. }
            | Self::Up { extend, .. }
            | Self::Down { extend, .. }
            | Self::HalfPageUp { extend, .. }
            | Self::HalfPageDown { extend, .. }
            | Self::LineStart { extend }
            | Self::FirstNonWhitespace { extend }
            | Self::LineEnd { extend, .. }
            | Self::BufferStart { extend }
            | Self::BufferEnd { extend }
            | Self::PrevBlankLine { extend }
            | Self::NextBlankLine { extend } => extend,
            Self::TranslateUp | Self::TranslateDown => false,
        }
    }

    fn count(&self) -> Option<u32> {
        match *self {
            Self::Left { count, .. }
            | Self::Right { count, .. }
            | Self::Up { count, .. }
            | Self::Down { count, .. } => Some(count),
            Self::HalfPageUp { visible_lines, .. } | Self::HalfPageDown { visible_lines, .. } => {
                Some(visible_lines)
            },
            _ => None,
        }
    }
}

impl fmt::Display for MotionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.extends() {
            f.write_str(EXTEND_PREFIX)?;
        }
        f.write_str(self.name())?;
        match (self, self.count()) {
            (Self::HalfPageUp { .. } | Self::HalfPageDown { .. }, Some(count)) => {
                write!(f, ":{count}")?
            },
            (_, Some(count)) if count != 1 => write!(f, ":{count}")?,
            _ => {},
        }
        if let Self::LineEnd { sticky: true, .. } = self {
            f.write_str("!")?;
        }
        Ok(())
    }
}

fn parse_count(name: &str, count: &str) -> Result<u32, CommandParseError> {
    match count.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(CommandParseError::InvalidCount {
            name: name.to_string(),
            count: count.to_string(),
        }),
    }
}

impl FromStr for MotionCommand {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(CommandParseError::Empty);
        }

        let (extend, rest) = match input.strip_prefix(EXTEND_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        let (rest, sticky) = match rest.strip_suffix('!') {
            Some(rest) => (rest, true),
            None => (rest, false),
        };
        let (name, count) = match rest.split_once(':') {
            Some((name, count)) => (name, Some(parse_count(name, count)?)),
            None => (rest, None),
        };

        let repeat = count.unwrap_or(1);
        let no_count = || match count {
            Some(_) => Err(CommandParseError::UnexpectedCount(name.to_string())),
            None => Ok(()),
        };
        let required_count =
            || count.ok_or_else(|| CommandParseError::MissingCount(name.to_string()));

        if sticky && name != "end" {
            return Err(CommandParseError::UnexpectedSticky(name.to_string()));
        }

        let command = match name {
            "left" => Self::Left {
                extend,
                count: repeat,
            },
            "right" => Self::Right {
                extend,
                count: repeat,
            },
            "up" => Self::Up {
                extend,
                count: repeat,
            },
            "down" => Self::Down {
                extend,
                count: repeat,
            },
            "half-page-up" => Self::HalfPageUp {
                extend,
                visible_lines: required_count()?,
            },
            "half-page-down" => Self::HalfPageDown {
                extend,
                visible_lines: required_count()?,
            },
            "translate-up" | "translate-down" => {
                no_count()?;
                if extend {
                    return Err(CommandParseError::UnexpectedExtend(name.to_string()));
                }
                if name == "translate-up" {
                    Self::TranslateUp
                } else {
                    Self::TranslateDown
                }
            },
            "home" => {
                no_count()?;
                Self::LineStart { extend }
            },
            "first-non-whitespace" => {
                no_count()?;
                Self::FirstNonWhitespace { extend }
            },
            "end" => {
                no_count()?;
                Self::LineEnd { extend, sticky }
            },
            "buffer-start" => {
                no_count()?;
                Self::BufferStart { extend }
            },
            "buffer-end" => {
                no_count()?;
                Self::BufferEnd { extend }
            },
            "prev-blank-line" => {
                no_count()?;
                Self::PrevBlankLine { extend }
            },
            "next-blank-line" => {
                no_count()?;
                Self::NextBlankLine { extend }
            },
            _ => return Err(CommandParseError::UnknownCommand(name.to_string())),
        };
        Ok(command)
    }
}

impl CursorMotion {
    /// Apply `command` to `cursor`.
    pub fn run<M: LineModel + ?Sized>(
        config: &CursorConfiguration,
        model: &M,
        cursor: &SingleCursorState,
        command: MotionCommand,
    ) -> SingleCursorState {
        match command {
            MotionCommand::Left { extend, count } => {
                Self::move_left(config, model, cursor, extend, count)
            },
            MotionCommand::Right { extend, count } => {
                Self::move_right(config, model, cursor, extend, count)
            },
            MotionCommand::Up { extend, count } => Self::move_up(config, model, cursor, extend, count),
            MotionCommand::Down { extend, count } => {
                Self::move_down(config, model, cursor, extend, count)
            },
            MotionCommand::HalfPageUp {
                extend,
                visible_lines,
            } => Self::move_half_page_up(config, model, cursor, extend, visible_lines),
            MotionCommand::HalfPageDown {
                extend,
                visible_lines,
            } => Self::move_half_page_down(config, model, cursor, extend, visible_lines),
            MotionCommand::TranslateUp => Self::translate_up(config, model, cursor),
            MotionCommand::TranslateDown => Self::translate_down(config, model, cursor),
            MotionCommand::LineStart { extend } => {
                Self::move_to_beginning_of_line(config, model, cursor, extend)
            },
            MotionCommand::FirstNonWhitespace { extend } => {
                Self::move_to_first_non_whitespace(config, model, cursor, extend)
            },
            MotionCommand::LineEnd { extend, sticky } => {
                Self::move_to_end_of_line(config, model, cursor, extend, sticky)
            },
            MotionCommand::BufferStart { extend } => {
                Self::move_to_beginning_of_buffer(config, model, cursor, extend)
            },
            MotionCommand::BufferEnd { extend } => {
                Self::move_to_end_of_buffer(config, model, cursor, extend)
            },
            MotionCommand::PrevBlankLine { extend } => {
                Self::move_to_prev_blank_line(config, model, cursor, extend)
            },
            MotionCommand::NextBlankLine { extend } => {
                Self::move_to_next_blank_line(config, model, cursor, extend)
            },
        }
    }
}
