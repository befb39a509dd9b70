//! Configuration loading and discovery for `spritegrid.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{ConfigSection, SpritegridConfig};
use log::{debug, info};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for during discovery
pub const CONFIG_FILE_NAME: &str = "spritegrid.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse spritegrid.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override encode description
    pub description: Option<String>,
    /// Override tile output directory
    pub out_dir: Option<PathBuf>,
}

/// Find spritegrid.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for spritegrid.toml
/// 2. Check XDG_CONFIG_HOME/spritegrid/spritegrid.toml (or ~/.config/spritegrid/spritegrid.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find spritegrid.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("spritegrid").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find spritegrid.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// If a path is provided, loads from that file (which must exist). Otherwise
/// uses [`find_config`], falling back to the defaults when nothing is found.
pub fn load_config(path: Option<&Path>) -> Result<SpritegridConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            info!("loading config from {}", p.display());
            load_config_file(&p)
        }
        None => {
            debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(SpritegridConfig::default())
        }
    }
}

/// Load configuration from a specific file path.
///
/// Values are only parsed here; see [`check_section`].
fn load_config_file(path: &Path) -> Result<SpritegridConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Validate the one section a command reads.
pub fn check_section(config: &SpritegridConfig, section: ConfigSection) -> Result<(), ConfigError> {
    let errors = config.validate_section(section);
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(())
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut SpritegridConfig, overrides: &CliOverrides) {
    if let Some(ref description) = overrides.description {
        config.encode.description = Some(description.clone());
    }

    if let Some(ref out_dir) = overrides.out_dir {
        config.split.out_dir = Some(out_dir.clone());
    }
}
