use clap::{Args, Parser, Subcommand};
use glide_motion::{MotionCommand, Position};
use std::path::PathBuf;

/// Command-line interface configuration
#[derive(Debug, Parser)]
#[command(name = "glide", author, version, about, long_about = None)]
pub struct Cli {
    /// Write logs to this file (or directory)
    #[arg(long, global = true, env = "GLIDE_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply motion commands to a cursor over a file and print each step
    Replay(ReplayArgs),
}

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Text file to move over
    pub file: PathBuf,

    /// Commands to apply in order, e.g. `right:3`, `shift+down`, `end!`
    #[arg(required = true, value_parser = parse_command)]
    pub commands: Vec<MotionCommand>,

    /// Starting cursor position as LINE:COL (1-based)
    #[arg(long, default_value = "1:1", value_parser = parse_position)]
    pub at: Position,

    /// Config file (overrides the discovered `config.toml`)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Allow the cursor past the end of lines
    #[arg(long)]
    pub virtual_space: bool,

    /// Move over indentation one tab stop at a time
    #[arg(long)]
    pub sticky_tab_stops: bool,

    /// Tab size in columns
    #[arg(long)]
    pub tab_size: Option<u32>,
}

fn parse_command(value: &str) -> Result<MotionCommand, String> {
    value.parse().map_err(|e| format!("{e}"))
}

/// Parse `LINE:COL` into a 1-based position.
pub fn parse_position(value: &str) -> Result<Position, String> {
    let (line, column) = value
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got {value:?}"))?;
    let parse = |part: &str| match part.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a positive number, got {part:?}")),
    };
    Ok(Position::new(parse(line)?, parse(column)?))
}
