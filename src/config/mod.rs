//! Configuration management for the conan installer

pub mod schema;

pub use schema::Config;

use crate::error::{InstallerError, InstallerResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the project-local config file
pub const LOCAL_CONFIG_NAME: &str = ".conan-installer.toml";

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("conan-installer")
            .join("config.toml")
    }

    /// Find a project-local config by walking up from `start`
    pub fn find_local_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load configuration, falling back to defaults if missing
    pub fn load(&self) -> InstallerResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(&self, path: &Path) -> InstallerResult<Config> {
        let value = read_table(path)?;
        value.try_into().map_err(|e: toml::de::Error| InstallerError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load the global config with a project-local config layered on top
    pub fn load_merged(&self, local: Option<&Path>) -> InstallerResult<Config> {
        let Some(local) = local else {
            return self.load();
        };

        let mut merged = if self.config_path.exists() {
            read_table(&self.config_path)?
        } else {
            toml::Value::Table(toml::map::Map::new())
        };
        merge_values(&mut merged, read_table(local)?);

        merged.try_into().map_err(|e: toml::de::Error| InstallerError::ConfigInvalid {
            path: local.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Save configuration to file
    pub fn save(&self, config: &Config) -> InstallerResult<()> {
        self.ensure_config_dir()?;

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).map_err(|e| {
            InstallerError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Ensure the config directory exists
    fn ensure_config_dir(&self) -> InstallerResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| InstallerError::ConfigDirCreate {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn read_table(path: &Path) -> InstallerResult<toml::Value> {
    let content = fs::read_to_string(path)
        .map_err(|e| InstallerError::io(format!("reading config from {}", path.display()), e))?;

    toml::from_str(&content).map_err(|e| InstallerError::ConfigInvalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Merge `overlay` into `base`; tables merge recursively, other values replace
fn merge_values(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
