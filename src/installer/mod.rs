//! Uniform installer interface
//!
//! A dependency resolver drives every package manager adapter through the
//! [`Installer`] trait:
//! - detect which requested packages are already satisfied
//! - build the command lines that install the rest
//! - report the tool version for diagnostics

mod conan;
mod layout;
mod registry;

pub use conan::{ConanInstaller, ConanSettings, CONAN_INSTALLER};
pub use layout::WorkspaceLayout;
pub use registry::{register_installers, InstallerRegistry};

use crate::error::InstallerResult;
use std::collections::HashSet;

/// One command invocation as a list of argument tokens
pub type CommandLine = Vec<String>;

/// Flags shared by every installer's command builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallOptions {
    /// Whether the caller can answer prompts
    pub interactive: bool,
    /// Install every requested package even if already present
    pub reinstall: bool,
    /// Ask the tool to suppress its own output
    pub quiet: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            interactive: true,
            reinstall: false,
            quiet: false,
        }
    }
}

/// Package manager adapter
pub trait Installer {
    /// Registration key for this installer
    fn key(&self) -> &'static str;

    /// Whether the backing tool can be used on this system
    fn is_available(&self) -> InstallerResult<bool>;

    /// Return the requested packages that are already installed, in input order
    fn detect(&self, packages: &[String]) -> InstallerResult<Vec<String>>;

    /// Build the commands that install `resolved`
    fn install_commands(
        &self,
        resolved: &[String],
        options: &InstallOptions,
    ) -> InstallerResult<Vec<CommandLine>>;

    /// Human-readable tool versions
    fn version_strings(&self) -> InstallerResult<Vec<String>>;

    /// Whether the installer resolves transitive dependencies itself
    fn supports_depends(&self) -> bool {
        false
    }

    /// Packages from `resolved` that still need installing
    fn packages_to_install(
        &self,
        resolved: &[String],
        reinstall: bool,
    ) -> InstallerResult<Vec<String>> {
        if reinstall {
            return Ok(resolved.to_vec());
        }

        let installed: HashSet<String> = self.detect(resolved)?.into_iter().collect();
        Ok(resolved
            .iter()
            .filter(|pkg| !installed.contains(*pkg))
            .cloned()
            .collect())
    }
}
