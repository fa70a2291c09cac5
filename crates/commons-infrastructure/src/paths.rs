//! Path management for commons configuration and data files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/commons/           # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/commons/      # Data directory (or [storage] data_dir)
//! └── communities.toml         # Created communities
//! ```

use std::path::{Path, PathBuf};

use commons_core::CommonsError;

const APP_DIR: &str = "commons";
const CONFIG_FILE: &str = "config.toml";
const COMMUNITIES_FILE: &str = "communities.toml";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform config directory could not be determined.
    ConfigDirNotFound,
    /// The platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for CommonsError {
    fn from(e: PathError) -> Self {
        CommonsError::config(e.to_string())
    }
}

/// Resolves where commons keeps its files.
pub struct CommonsPaths;

impl CommonsPaths {
    /// `~/.config/commons` on Linux, the platform equivalent elsewhere.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// `~/.local/share/commons` on Linux, the platform equivalent elsewhere.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DataDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// The communities file, under `data_dir_override` when one is configured.
    pub fn communities_file(data_dir_override: Option<&Path>) -> Result<PathBuf, PathError> {
        let dir = match data_dir_override {
            Some(dir) => dir.to_path_buf(),
            None => Self::data_dir()?,
        };
        Ok(dir.join(COMMUNITIES_FILE))
    }
}
