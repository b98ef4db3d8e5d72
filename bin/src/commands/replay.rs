//! `glide replay`: apply motion commands to a cursor over a file.
//!
//! Each step prints one line:
//!
//! ```text
//! <command>\t<line>:<col> leftover=<n|eol> hint=<h|eol|-> [selection <anchor>-<active>]
//! ```

use crate::{cli::ReplayArgs, paths};
use anyhow::{bail, Context, Result};
use glide_motion::{
    state::is_sticky_end_of_line, CursorConfiguration, CursorMotion, LineModel, MotionCommand,
    SingleCursorState, TextModel,
};
use std::{io::Write, path::Path};
use tracing::{debug, info};

pub fn handle(args: ReplayArgs, out: &mut impl Write) -> Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let model = TextModel::new(&text);

    let start_dir = args
        .file
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let paths = paths::discover(start_dir);
    let config = resolve_config(&args, paths.config_path.as_deref())?;
    debug!(?config, glide_dir = ?paths.glide_dir, file = %args.file.display(), "replaying");

    let start = args.at;
    if start.line_number > model.line_count()
        || start.column > model.line_max_column(start.line_number)
    {
        bail!(
            "Start position {start} is outside {} ({} lines)",
            args.file.display(),
            model.line_count()
        );
    }

    let mut state = SingleCursorState::collapsed(start);
    for &command in &args.commands {
        state = CursorMotion::run(&config, &model, &state, command)
            .with_virtual_space(config.virtual_space);
        writeln!(out, "{}", describe(command, &state))?;
    }

    info!(steps = args.commands.len(), end = %state.position, "replay finished");
    Ok(())
}

/// Config file (CLI path, else discovered) with command-line flags applied on top.
fn resolve_config(args: &ReplayArgs, discovered: Option<&Path>) -> Result<CursorConfiguration> {
    let mut config = CursorConfiguration::load_with_overrides(args.config.as_deref(), discovered)?;
    if let Some(tab_size) = args.tab_size {
        config = config.with_tab_size(tab_size);
    }
    if args.virtual_space {
        config = config.with_virtual_space(true);
    }
    if args.sticky_tab_stops {
        config = config.with_sticky_tab_stops(true);
    }
    config.validate().context("Invalid command-line configuration")?;
    Ok(config)
}

/// Sticky end-of-line values print as `eol`.
fn column_value(value: u32) -> String {
    if is_sticky_end_of_line(value) {
        "eol".to_string()
    } else {
        value.to_string()
    }
}

fn describe(command: MotionCommand, state: &SingleCursorState) -> String {
    let leftover = column_value(state.leftover_visible_columns);
    let hint = state.column_hint.map_or_else(|| "-".to_string(), column_value);

    let mut line = format!("{command}\t{} leftover={leftover} hint={hint}", state.position);
    if state.has_selection() {
        let selection = state.selection();
        line.push_str(&format!(
            " selection {}-{}",
            selection.selection_start, selection.position
        ));
    }
    line
}
