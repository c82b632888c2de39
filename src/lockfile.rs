//! Conan lockfile reading
//!
//! The lockfile is written by `conan install --lockfile-out` and is only
//! ever read here. Its `requires` entries look like `name/version#revision`.

use crate::error::{InstallerError, InstallerResult};
use crate::package::PackageSpec;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// The subset of a conan lockfile this crate cares about
///
/// Other fields (`version`, `python_requires`, `config_requires`) are
/// ignored on read.
#[derive(Debug, Clone, Deserialize)]
pub struct Lockfile {
    /// Host requirements, in resolution order
    pub requires: Vec<String>,
    /// Tool requirements. Never counted as installed packages.
    #[serde(default)]
    pub build_requires: Vec<String>,
}

impl Lockfile {
    /// Parse a lockfile from its JSON text
    pub fn from_json_str(content: &str) -> InstallerResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a lockfile from disk
    pub fn load(path: &Path) -> InstallerResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            InstallerError::io(format!("reading lockfile {}", path.display()), e)
        })?;
        Self::from_json_str(&content)
    }

    /// References pinned by `requires`, with revisions stripped
    pub fn installed_references(&self) -> HashSet<String> {
        self.requires
            .iter()
            .filter_map(|entry| match PackageSpec::parse(entry) {
                Ok(spec) => Some(spec.reference().to_string()),
                Err(_) => {
                    debug!("Skipping malformed lockfile entry: {:?}", entry);
                    None
                }
            })
            .collect()
    }
}
