//! Workspace layout for conan state files
//!
//! All paths are derived from an explicit working directory rather than
//! the process current directory.

use crate::config::schema::WorkspaceConfig;
use std::path::{Path, PathBuf};

/// Locations of the files the conan installer reads and writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    working_dir: PathBuf,
    output_dir: PathBuf,
    lockfile_name: String,
    profiles_cache_name: String,
    profile_file: String,
}

impl WorkspaceLayout {
    /// Layout rooted at `working_dir` with default file names
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self::from_config(working_dir, &WorkspaceConfig::default())
    }

    /// Layout rooted at `working_dir` with names from configuration
    pub fn from_config(working_dir: impl Into<PathBuf>, config: &WorkspaceConfig) -> Self {
        Self {
            working_dir: working_dir.into(),
            output_dir: config.output_dir.clone(),
            lockfile_name: config.lockfile_name.clone(),
            profiles_cache_name: config.profiles_cache_name.clone(),
            profile_file: config.profile_file.clone(),
        }
    }

    /// Override the profile-name file
    pub fn with_profile_file(mut self, name: impl Into<String>) -> Self {
        self.profile_file = name.into();
        self
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Directory conan writes generated files into
    pub fn output_path(&self) -> PathBuf {
        self.working_dir.join(&self.output_dir)
    }

    /// Lockfile produced by `conan install --lockfile-out`
    pub fn lockfile_path(&self) -> PathBuf {
        self.output_path().join(&self.lockfile_name)
    }

    /// Cached copy of the profile used for the last install
    pub fn profiles_path(&self) -> PathBuf {
        self.output_path().join(&self.profiles_cache_name)
    }

    /// Conventional profile file in the working directory
    pub fn profile_path(&self) -> PathBuf {
        self.working_dir.join(&self.profile_file)
    }

    /// Profile to pass to conan, only when the profile file exists
    pub fn profile_selector(&self) -> Option<PathBuf> {
        let path = self.profile_path();
        path.exists().then_some(path)
    }
}
