//! Config discovery.
//!
//! The nearest `.glide` directory walking up from the start directory wins,
//! then the system config directory (`<config_dir>/glide`).

use std::path::{Path, PathBuf};

pub struct GlidePaths {
    pub glide_dir: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
}

pub fn discover(start_dir: &Path) -> GlidePaths {
    let dir = walk_ancestors(start_dir).or_else(system_config_dir);

    match dir {
        Some(d) => {
            tracing::debug!("using glide directory: {}", d.display());
            let config = d.join("config.toml");
            GlidePaths {
                config_path: config.is_file().then_some(config),
                glide_dir: Some(d),
            }
        },
        None => {
            tracing::debug!("no .glide directory found");
            GlidePaths {
                glide_dir: None,
                config_path: None,
            }
        },
    }
}

fn walk_ancestors(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(".glide"))
        .find(|candidate| candidate.is_dir())
}

fn system_config_dir() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join("glide");
    dir.is_dir().then_some(dir)
}
