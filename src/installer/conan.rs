//! Conan installer
//!
//! Detection trusts the lockfile written by a previous `conan install` only
//! while the profile conan would use now matches the profile cached at
//! install time. Any mismatch reports nothing as installed.

use crate::error::{InstallerError, InstallerResult};
use crate::installer::layout::WorkspaceLayout;
use crate::installer::{CommandLine, InstallOptions, Installer};
use crate::lockfile::Lockfile;
use crate::profile::ProfileDescriptor;
use crate::tool::{ConanCli, ConanTool, ConfigSource, QUIET_FLAG};
use tracing::debug;

/// Registration key of the conan installer
pub const CONAN_INSTALLER: &str = "conan";

/// Fixed options of the generated install command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConanSettings {
    /// Generator emitting build-system integration files
    pub generator: String,
    /// Value passed to `--build`
    pub build_policy: String,
    /// Configuration providing the generator
    pub extensions: ConfigSource,
}

impl Default for ConanSettings {
    fn default() -> Self {
        Self {
            generator: "Ament".to_string(),
            build_policy: "missing".to_string(),
            extensions: ConfigSource::default(),
        }
    }
}

/// Installer adapter for the conan package manager
pub struct ConanInstaller<T: ConanTool = ConanCli> {
    tool: T,
    layout: WorkspaceLayout,
    settings: ConanSettings,
}

impl<T: ConanTool> ConanInstaller<T> {
    /// Create an installer with default settings
    pub fn new(tool: T, layout: WorkspaceLayout) -> Self {
        Self::with_settings(tool, layout, ConanSettings::default())
    }

    /// Create an installer with explicit settings
    pub fn with_settings(tool: T, layout: WorkspaceLayout, settings: ConanSettings) -> Self {
        Self {
            tool,
            layout,
            settings,
        }
    }

    pub fn layout(&self) -> &WorkspaceLayout {
        &self.layout
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    fn current_profile(&self) -> InstallerResult<ProfileDescriptor> {
        self.tool
            .query_profile(self.layout.profile_selector().as_deref())
    }

    fn install_command(&self, packages: &[String], quiet: bool) -> CommandLine {
        let output = self.layout.output_path();
        let mut cmd = vec![self.tool.program().to_string(), "install".to_string()];

        if quiet {
            cmd.push(QUIET_FLAG.to_string());
        }
        if let Some(profile) = self.layout.profile_selector() {
            cmd.push("--profile".to_string());
            cmd.push(profile.display().to_string());
        }
        for package in packages {
            cmd.push("--require".to_string());
            cmd.push(package.clone());
        }

        cmd.extend([
            "--update".to_string(),
            "--generator".to_string(),
            self.settings.generator.clone(),
            "--build".to_string(),
            self.settings.build_policy.clone(),
            "--output-folder".to_string(),
            output.display().to_string(),
            "--lockfile-out".to_string(),
            self.layout.lockfile_path().display().to_string(),
        ]);
        cmd
    }
}

impl<T: ConanTool> Installer for ConanInstaller<T> {
    fn key(&self) -> &'static str {
        CONAN_INSTALLER
    }

    fn is_available(&self) -> InstallerResult<bool> {
        self.tool.probe()
    }

    fn detect(&self, packages: &[String]) -> InstallerResult<Vec<String>> {
        if !self.tool.probe()? {
            debug!("conan unavailable, nothing detected");
            return Ok(Vec::new());
        }

        let profiles_path = self.layout.profiles_path();
        if !profiles_path.exists() {
            debug!("No cached profile at {}", profiles_path.display());
            return Ok(Vec::new());
        }

        let lockfile_path = self.layout.lockfile_path();
        if !lockfile_path.exists() {
            debug!("No lockfile at {}", lockfile_path.display());
            return Ok(Vec::new());
        }

        if packages.is_empty() {
            return Ok(Vec::new());
        }

        let current = self.current_profile()?;
        let previous = ProfileDescriptor::load(&profiles_path)?;
        if current != previous {
            debug!("Profile changed since last install, reinstalling everything");
            return Ok(Vec::new());
        }

        let installed = Lockfile::load(&lockfile_path)?.installed_references();
        Ok(packages
            .iter()
            .filter(|pkg| installed.contains(pkg.as_str()))
            .cloned()
            .collect())
    }

    fn install_commands(
        &self,
        resolved: &[String],
        options: &InstallOptions,
    ) -> InstallerResult<Vec<CommandLine>> {
        if !self.tool.probe()? {
            return Err(InstallerError::install_failed(
                CONAN_INSTALLER,
                "conan is not installed",
            ));
        }

        let packages = self.packages_to_install(resolved, options.reinstall)?;
        if packages.is_empty() {
            debug!("All {} requested packages already installed", resolved.len());
            return Ok(Vec::new());
        }

        self.current_profile()?
            .persist(&self.layout.profiles_path())?;

        self.tool
            .install_config(&self.settings.extensions, options.quiet)?;

        Ok(vec![self.install_command(&packages, options.quiet)])
    }

    fn version_strings(&self) -> InstallerResult<Vec<String>> {
        Ok(vec![self.tool.query_version()?.to_string()])
    }

    fn supports_depends(&self) -> bool {
        true
    }
}
