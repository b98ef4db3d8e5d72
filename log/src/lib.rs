//! Logging setup for glide with file output and optional stdout.
//!
//! Logs always go to a file at `warn` level (or whatever `GLIDE_LOG`/`RUST_LOG` asks for).
//! Stdout logging is enabled when `GLIDE_LOG` or `RUST_LOG` is set, or in debug builds.
//!
//! ## Environment Variables
//!
//! 1. **`GLIDE_LOG`** (highest priority) - glide-specific logging control
//! 2. **`RUST_LOG`** - Standard tracing environment variable
//! 3. **Default** - `warn` globally, `info` for glide crates
//!
//! ## Log File Location
//!
//! Default: `<data_local_dir>/glide/logs/glide-<pid>.log`
//! - macOS: `~/Library/Application Support/glide/logs/glide-12345.log`
//! - Linux: `~/.local/share/glide/logs/glide-12345.log`
//!
//! Override with `--log-file <path>`. A path with an extension names the file,
//! anything else names the directory.

use std::{
    env,
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type InitError = Box<dyn std::error::Error + Send + Sync>;

/// Crates whose level a bare `GLIDE_LOG=<level>` controls.
const GLIDE_CRATES: &[&str] = &["glide_motion", "glide_bin", "glide_log"];

/// Returned from [`init`]; must be held alive to ensure log file flushing.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

#[derive(Debug, Default, Clone)]
pub struct LogConfig {
    pub log_file_path: Option<PathBuf>,
}

/// Initialize logging.
///
/// This function respects the environment variable priority described in the module docs:
/// `GLIDE_LOG` > `RUST_LOG` > default settings.
///
/// The returned [`LogGuard`] must be held for the lifetime of the program;
/// dropping it flushes and stops the background file writer.
///
/// Fails if a global subscriber is already installed.
pub fn init(config: LogConfig) -> Result<LogGuard, InitError> {
    let (log_dir, filename) = resolve_log_path(config.log_file_path);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(create_file_filter());

    let stdout_layer = stdout_enabled().then(|| fmt::layer().with_filter(create_filter()));

    Registry::default()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

/// Initialize logging for tests.
///
/// Stdout-only (no file output). Safe to call from every test: later calls, or
/// calls after another test installed a subscriber, do nothing.
pub fn test() {
    let _ = fmt()
        .with_env_filter(create_filter())
        .with_test_writer()
        .try_init();
}

fn stdout_enabled() -> bool {
    env::var("GLIDE_LOG").is_ok() || env::var("RUST_LOG").is_ok() || cfg!(debug_assertions)
}

fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("glide-{}.log", std::process::id());

    if let Some(path) = override_path {
        if path.extension().is_some() {
            let dir = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(filename);
            return (dir.to_path_buf(), name);
        }
        return (path, filename);
    }

    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("glide")
        .join("logs");

    (dir, filename)
}

/// File filter: uses the user-specified level if set, otherwise `warn`.
fn create_file_filter() -> EnvFilter {
    if env::var("GLIDE_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
        return create_filter();
    }
    EnvFilter::new("warn")
}

/// Create the [`EnvFilter`] for `GLIDE_LOG` > `RUST_LOG` > defaults.
fn create_filter() -> EnvFilter {
    if let Ok(glide_log) = env::var("GLIDE_LOG") {
        return EnvFilter::new(expand_glide_log(&glide_log));
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }

    EnvFilter::new(expand_glide_log("info"))
}

/// Expand a `GLIDE_LOG` value into a full filter string.
///
/// - `GLIDE_LOG=debug` becomes `warn,glide_motion=debug,glide_bin=debug,...`
/// - `GLIDE_LOG=glide_motion=trace` is used as-is (advanced syntax)
fn expand_glide_log(glide_log: &str) -> String {
    if glide_log.contains('=') || glide_log.contains(':') || glide_log.contains(',') {
        return glide_log.to_string();
    }

    GLIDE_CRATES
        .iter()
        .fold(String::from("warn"), |mut filter, krate| {
            filter.push_str(&format!(",{krate}={glide_log}"));
            filter
        })
}
