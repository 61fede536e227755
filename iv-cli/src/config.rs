// ABOUTME: Locates the grid config file and resolves the grid shape for a run
// ABOUTME: Follows XDG Base Directory conventions, falling back to the default 1x1 grid

use anyhow::{Context, Result};
use iv_core::{GridShape, IvError, TileSize, WindowGeometry};
use std::path::{Path, PathBuf};

pub const PROJECT_CONFIG_FILE: &str = "iv.yaml";
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Where the grid shape for a run came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeSource {
    CommandLine,
    Window(WindowGeometry),
    File(PathBuf),
    Default,
}

impl std::fmt::Display for ShapeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeSource::CommandLine => write!(f, "command line"),
            ShapeSource::Window(geometry) => {
                write!(f, "{}x{} terminal", geometry.columns, geometry.rows)
            }
            ShapeSource::File(path) => write!(f, "{}", path.display()),
            ShapeSource::Default => write!(f, "built-in default"),
        }
    }
}

/// Standard config file paths in order of precedence (highest first)
pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Project-specific config
    if let Ok(current_dir) = std::env::current_dir() {
        paths.push(current_dir.join(PROJECT_CONFIG_FILE));
    }

    // 2. XDG config home
    if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
        paths.push(PathBuf::from(config_home).join("iv").join(CONFIG_FILE_NAME));
    }

    // 3. User config directory fallback
    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(".config").join("iv").join(CONFIG_FILE_NAME));
    }

    paths
}

/// Load the grid from an explicit config path, or the first existing standard path.
///
/// An explicit path must exist. Without one, missing standard files are
/// skipped and the default grid is used when none exist.
pub fn resolve_config_shape(explicit: Option<&Path>) -> Result<(GridShape, ShapeSource)> {
    match explicit {
        Some(path) => {
            let shape = iv_core::load_config(path)?;
            Ok((shape, ShapeSource::File(path.to_path_buf())))
        }
        None => load_from_paths(&get_config_paths()),
    }
}

/// Load the grid from the first path in `paths` that exists.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<(GridShape, ShapeSource)> {
    for path in paths {
        match iv_core::load_config(path) {
            Ok(shape) => {
                log::debug!("Found config at {}", path.display());
                return Ok((shape, ShapeSource::File(path.clone())));
            }
            Err(IvError::ConfigNotFound(_)) => {
                log::debug!("No config at {}", path.display());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to load config file: {}", path.display()));
            }
        }
    }

    log::debug!("No config file found, using {}", GridShape::DEFAULT);
    Ok((GridShape::DEFAULT, ShapeSource::Default))
}

/// Pick the grid for a run: command line, then window fitting, then config files.
pub fn resolve_shape(
    explicit: Option<(u32, u32)>,
    fit: Option<(WindowGeometry, TileSize)>,
    config_path: Option<&Path>,
) -> Result<(GridShape, ShapeSource)> {
    if let Some((columns, rows)) = explicit {
        return Ok((GridShape::new(columns, rows)?, ShapeSource::CommandLine));
    }

    if let Some((geometry, tile)) = fit {
        let shape = GridShape::fit_window(geometry, tile);
        return Ok((shape, ShapeSource::Window(geometry)));
    }

    resolve_config_shape(config_path)
}
