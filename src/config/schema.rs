//! Configuration schema for the conan installer
//!
//! Configuration is stored at `~/.config/conan-installer/config.toml`

use crate::tool::{VersionProtocol, DEFAULT_EXTENSIONS_SOURCE_FOLDER, DEFAULT_EXTENSIONS_URL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Conan tool settings
    pub conan: ConanConfig,

    /// Workspace file layout
    pub workspace: WorkspaceConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Conan tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConanConfig {
    /// Executable name or path
    pub executable: String,

    /// How to query the conan version
    pub version_protocol: VersionProtocol,

    /// Generator passed to `conan install --generator`
    pub generator: String,

    /// Build policy passed to `conan install --build`
    pub build_policy: String,

    /// Configuration source providing the generator
    pub extensions_url: String,

    /// Subfolder of the configuration source
    pub extensions_source_folder: Option<String>,
}

impl Default for ConanConfig {
    fn default() -> Self {
        Self {
            executable: "conan".to_string(),
            version_protocol: VersionProtocol::Json,
            generator: "Ament".to_string(),
            build_policy: "missing".to_string(),
            extensions_url: DEFAULT_EXTENSIONS_URL.to_string(),
            extensions_source_folder: Some(DEFAULT_EXTENSIONS_SOURCE_FOLDER.to_string()),
        }
    }
}

/// Workspace layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Directory holding the workspace (defaults to the current directory)
    pub working_dir: Option<PathBuf>,

    /// Output directory relative to the working directory
    pub output_dir: PathBuf,

    /// Lockfile name inside the output directory
    pub lockfile_name: String,

    /// Cached profile name inside the output directory
    pub profiles_cache_name: String,

    /// Profile file whose presence selects an explicit conan profile
    pub profile_file: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            working_dir: None,
            output_dir: PathBuf::from("install"),
            lockfile_name: "rosdep_conan.lock".to_string(),
            profiles_cache_name: "conan_profiles.json".to_string(),
            profile_file: "conan_profile".to_string(),
        }
    }
}
