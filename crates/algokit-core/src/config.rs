//! Configuration for algokit
//!
//! Defaults for traversals and moving averages can be kept in a TOML file,
//! by default `~/.config/algokit/config.toml`.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{AlgoError, Result};

pub use types::{
    AlgoConfig, MovingAverageConfig, TraversalConfig, CONFIG_FORMAT_VERSION, DEFAULT_SMA_WINDOW,
};

const CONFIG_DIR: &str = "algokit";
const CONFIG_FILE: &str = "config.toml";
/// Overrides the directory searched by [`AlgoConfig::discover`]
pub const CONFIG_DIR_ENV_VAR: &str = "ALGOKIT_CONFIG_DIR";

impl AlgoConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AlgoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Default location of the configuration file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    AlgoError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the configuration file at [`AlgoConfig::default_path`], or the
    /// defaults when there is none
    pub fn discover() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Reject values no algorithm can run with
    pub fn validate(&self) -> Result<()> {
        if self.version > CONFIG_FORMAT_VERSION {
            bail_invalid!("config version", self.version);
        }
        if self.moving_average.window == 0 {
            bail_invalid!("moving_average.window", self.moving_average.window);
        }
        if self.traversal.max_nodes == Some(0) {
            bail_invalid!("traversal.max_nodes", 0);
        }
        Ok(())
    }
}
