//! Configuration System
//!
//! TOML-backed configuration for the porter: logging settings plus the
//! default target-component toggles used when an apply run names none
//! explicitly. Loading falls back to defaults when no file is present.

use crate::error::PortError;
use crate::logging::LoggingConfig;
use crate::porter::PortTargets;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "porter.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PorterConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default target component toggles
    #[serde(default)]
    pub targets: TargetConfig,
}

/// Default toggles applied when the CLI names no target flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    #[serde(default = "default_true")]
    pub avatar_descriptor: bool,

    #[serde(default = "default_true")]
    pub animator: bool,

    #[serde(default = "default_true")]
    pub dynamic_bone: bool,

    #[serde(default = "default_true")]
    pub dynamic_bone_collider: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            avatar_descriptor: true,
            animator: true,
            dynamic_bone: true,
            dynamic_bone_collider: true,
        }
    }
}

impl From<&TargetConfig> for PortTargets {
    fn from(config: &TargetConfig) -> Self {
        Self {
            avatar_descriptor: config.avatar_descriptor,
            animator: config.animator,
            dynamic_bone: config.dynamic_bone,
            dynamic_bone_collider: config.dynamic_bone_collider,
        }
    }
}

/// Configuration loading facade
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from `porter.toml` under `dir`, falling back to
    /// defaults if the file does not exist.
    pub fn load(dir: &Path) -> Result<PorterConfig, PortError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(PorterConfig::default())
        }
    }

    /// Load configuration from an explicit file path.
    pub fn load_from_file(path: &Path) -> Result<PorterConfig, PortError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PortError::ConfigError(format!("Failed to read config {:?}: {}", path, e))
        })?;
        let config: PorterConfig = toml::from_str(&text)?;
        Ok(config)
    }
}
