//! Configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer; every section and
//! key is optional and falls back to the defaults below.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 500;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CommonsConfig {
    pub limits: CommunityLimits,
    pub view: ViewSettings,
    pub logging: LoggingSettings,
    pub storage: StorageSettings,
}

impl CommonsConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Length limits for a community's title and description, in characters.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct CommunityLimits {
    pub max_title_length: usize,
    pub max_description_length: usize,
}

impl Default for CommunityLimits {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ViewSettings {
    /// Seed a community without responses with the demonstration dataset.
    pub seed_demo_responses: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            seed_demo_responses: true,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct StorageSettings {
    /// Overrides the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}
