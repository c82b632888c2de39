//! Conan profile descriptors
//!
//! The profile is the JSON printed by `conan profile show --format json`.
//! Its contents are opaque here; a cached copy is only ever compared for
//! equality against a fresh query to decide whether the lockfile still
//! describes what would be installed.

use crate::error::{InstallerError, InstallerResult};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// Resolved conan profile as structured JSON
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDescriptor(Value);

impl ProfileDescriptor {
    /// Wrap an already parsed JSON value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse the output of a profile query
    pub fn from_json_str(content: &str) -> InstallerResult<Self> {
        Ok(Self(serde_json::from_str(content.trim())?))
    }

    /// Load a previously persisted profile
    pub fn load(path: &Path) -> InstallerResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            InstallerError::io(format!("reading profile cache {}", path.display()), e)
        })?;
        Self::from_json_str(&content)
    }

    /// Write the profile to `path`, replacing any previous copy
    pub fn persist(&self, path: &Path) -> InstallerResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                InstallerError::io(format!("creating directory {}", parent.display()), e)
            })?;
        }

        let content = serde_json::to_string(&self.0)?;
        fs::write(path, content).map_err(|e| {
            InstallerError::io(format!("writing profile cache {}", path.display()), e)
        })?;

        info!("Profile cached at {}", path.display());
        Ok(())
    }

    /// The underlying JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
