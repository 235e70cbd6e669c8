//! Configuration for zonenet (stored in ~/.config/zonenet/config.toml)

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ZoneNetError};

pub use types::ZoneNetConfig;

const CONFIG_DIR: &str = "zonenet";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ZONENET_CONFIG_DIR";

impl ZoneNetConfig {
    /// Resolve the config file path.
    ///
    /// An explicit path wins, then `ZONENET_CONFIG_DIR`, then the platform
    /// config directory.
    pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }

        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    ZoneNetError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the configuration, falling back to defaults when no file exists
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = Self::config_path(explicit)?;

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ZoneNetError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: ZoneNetConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ZoneNetError::Other(format!(
                    "failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ZoneNetError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the engine would give unspecified results for
    pub fn validate(&self) -> Result<()> {
        if !self.default_weight.is_finite() || self.default_weight < 0.0 {
            crate::bail_invalid!("default_weight", self.default_weight);
        }
        Ok(())
    }
}
