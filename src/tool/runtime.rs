//! Conan tool abstraction
//!
//! Narrow interface over the conan CLI: liveness, profile and version
//! queries, and configuration bootstrapping.

use crate::error::InstallerResult;
use crate::profile::ProfileDescriptor;
use crate::tool::version::VersionInfo;
use std::path::Path;

/// Default repository providing the Ament generator
pub const DEFAULT_EXTENSIONS_URL: &str = "https://github.com/conan-io/conan-extensions.git";

/// Folder inside the extensions repository holding the generators
pub const DEFAULT_EXTENSIONS_SOURCE_FOLDER: &str = "extensions/generators";

/// Remote configuration installed with `conan config install`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    /// Repository or archive URL
    pub url: String,
    /// Subfolder of the source to install from
    pub source_folder: Option<String>,
}

impl Default for ConfigSource {
    fn default() -> Self {
        Self {
            url: DEFAULT_EXTENSIONS_URL.to_string(),
            source_folder: Some(DEFAULT_EXTENSIONS_SOURCE_FOLDER.to_string()),
        }
    }
}

/// Abstract conan tool interface
pub trait ConanTool {
    /// Program name used as the first token of generated commands
    fn program(&self) -> &str;

    /// Check whether the tool can be spawned at all
    ///
    /// A missing executable yields `Ok(false)`. Other spawn errors are
    /// returned as errors since they do not mean the tool is absent.
    fn probe(&self) -> InstallerResult<bool>;

    /// Query the active profile, optionally selecting a profile file
    fn query_profile(&self, profile: Option<&Path>) -> InstallerResult<ProfileDescriptor>;

    /// Query the tool version
    fn query_version(&self) -> InstallerResult<VersionInfo>;

    /// Install remote configuration into the conan home
    fn install_config(&self, source: &ConfigSource, quiet: bool) -> InstallerResult<()>;
}
