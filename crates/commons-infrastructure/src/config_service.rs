//! Configuration service implementation.
//!
//! Loads `CommonsConfig` from `config.toml` and caches it.

use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use commons_core::config::CommonsConfig;
use commons_core::error::Result;
use tracing::{debug, warn};

use crate::paths::CommonsPaths;
use crate::storage::AtomicTomlFile;

/// Configuration service that loads and caches the root configuration.
///
/// A missing file yields the defaults; it is never created implicitly.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    config: Arc<RwLock<Option<CommonsConfig>>>,
}

impl ConfigService {
    /// Uses the platform config file (`~/.config/commons/config.toml`).
    pub fn new() -> Self {
        let path = match CommonsPaths::config_file() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("{}; using default configuration", e);
                None
            }
        };
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Uses a specific config file (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the configuration, loading it on first access.
    ///
    /// Unreadable or malformed files are reported and replaced by defaults.
    pub fn get_config(&self) -> CommonsConfig {
        if let Some(cached) = self
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return cached.clone();
        }

        let loaded = self.load_config().unwrap_or_else(|e| {
            warn!("Failed to load configuration: {}; using defaults", e);
            CommonsConfig::default()
        });

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(loaded.clone());
        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Reads the config file without touching the cache.
    pub fn load_config(&self) -> Result<CommonsConfig> {
        let Some(path) = &self.path else {
            return Ok(CommonsConfig::default());
        };
        debug!("Loading configuration from {}", path.display());
        let loaded = AtomicTomlFile::<CommonsConfig>::new(path.clone()).load()?;
        Ok(loaded.unwrap_or_default())
    }

    /// Writes `config` to the config file and refreshes the cache.
    pub fn save_config(&self, config: &CommonsConfig) -> Result<()> {
        if let Some(path) = &self.path {
            AtomicTomlFile::<CommonsConfig>::new(path.clone()).save(config)?;
        }
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(config.clone());
        Ok(())
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
