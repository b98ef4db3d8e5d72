//! Cursor configuration.
//!
//! [`CursorConfiguration`] is a read-only snapshot handed to every motion call.
//! It can be built in code or loaded from a `config.toml`:
//!
//! ```toml
//! tab_size = 4
//! indent_size = 4
//! sticky_tab_stops = true
//! virtual_space = false
//! ```
//!
//! # Loading
//!
//! [`CursorConfiguration::load_with_overrides`] picks the file by priority:
//! CLI override > discovered path > built-in defaults.

use crate::{
    columns::{self, visible_column_from_column},
    coords::Position,
    model::LineModel,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Values a loaded configuration may not take.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tab_size must be at least 1, got {0}")]
    InvalidTabSize(u32),

    #[error("indent_size must be at least 1, got {0}")]
    InvalidIndentSize(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CursorConfiguration {
    /// Width of a tab stop in visible columns.
    pub tab_size: u32,
    /// Width of one indentation level in visible columns.
    pub indent_size: u32,
    /// Step over whole indentation units inside leading whitespace.
    pub sticky_tab_stops: bool,
    /// Allow the cursor to rest past the end of a line.
    pub virtual_space: bool,
}

impl Default for CursorConfiguration {
    fn default() -> Self {
        Self {
            tab_size: 4,
            indent_size: 4,
            sticky_tab_stops: false,
            virtual_space: false,
        }
    }
}

impl CursorConfiguration {
    pub fn with_tab_size(mut self, tab_size: u32) -> Self {
        self.tab_size = tab_size;
        self
    }

    pub fn with_sticky_tab_stops(mut self, sticky_tab_stops: bool) -> Self {
        self.sticky_tab_stops = sticky_tab_stops;
        self
    }

    pub fn with_virtual_space(mut self, virtual_space: bool) -> Self {
        self.virtual_space = virtual_space;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_size == 0 {
            return Err(ConfigError::InvalidTabSize(self.tab_size));
        }
        if self.indent_size == 0 {
            return Err(ConfigError::InvalidIndentSize(self.indent_size));
        }
        Ok(())
    }

    /// Real column on `line_number` closest to `visible_column`, clamped to the line.
    ///
    /// Anything past the end of the line maps to the max column; virtual-space
    /// overflow is carried separately as leftover visible columns.
    pub fn column_from_visible_column<M: LineModel + ?Sized>(
        &self,
        model: &M,
        line_number: u32,
        visible_column: i64,
    ) -> u32 {
        let column = columns::column_from_visible_column(
            model.line_content(line_number),
            visible_column,
            self.tab_size,
        );
        column.clamp(
            model.line_min_column(line_number),
            model.line_max_column(line_number),
        )
    }

    /// Tab-expanded visible column of `position`.
    pub fn visible_column_from_column<M: LineModel + ?Sized>(
        &self,
        model: &M,
        position: Position,
    ) -> u32 {
        visible_column_from_column(
            model.line_content(position.line_number),
            position.column,
            self.tab_size,
        )
    }

    /// Read, deserialize and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CursorConfiguration = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), ?config, "loaded cursor configuration");
        Ok(config)
    }

    /// Load configuration with priority: CLI override > discovered path > defaults.
    pub fn load_with_overrides(
        cli_override: Option<&Path>,
        discovered_path: Option<&Path>,
    ) -> Result<Self> {
        if let Some(path) = cli_override {
            return Self::load(path);
        }
        if let Some(path) = discovered_path {
            return Self::load(path);
        }
        Ok(Self::default())
    }
}
