//! Conan CLI backend
//!
//! Implements the ConanTool trait by spawning the conan executable and
//! reading its JSON output. All calls block until conan exits.

use crate::error::{InstallerError, InstallerResult};
use crate::profile::ProfileDescriptor;
use crate::tool::runtime::{ConanTool, ConfigSource};
use crate::tool::version::{VersionInfo, VersionProtocol};
use crate::tool::{display_command, QUIET_FLAG};
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tracing::{debug, info};

/// Conan tool backed by the real executable
#[derive(Debug, Clone)]
pub struct ConanCli {
    executable: String,
    version_protocol: VersionProtocol,
}

impl ConanCli {
    /// Create a backend for `conan` found on PATH
    pub fn new() -> Self {
        Self::with_executable("conan")
    }

    /// Create a backend for a specific executable
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            version_protocol: VersionProtocol::default(),
        }
    }

    /// Select how the version is queried
    pub fn with_version_protocol(mut self, protocol: VersionProtocol) -> Self {
        self.version_protocol = protocol;
        self
    }

    /// Execute a conan command and return the output
    fn exec(&self, args: &[&str]) -> InstallerResult<Output> {
        let rendered = display_command(&self.executable, args);
        debug!("Executing: {}", rendered);

        Command::new(&self.executable)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| InstallerError::command_failed(rendered, e))
    }

    /// Execute a conan command, requiring success, and return its stdout
    fn check_output(&self, args: &[&str]) -> InstallerResult<String> {
        let output = self.exec(args)?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(InstallerError::command_exec(
                display_command(&self.executable, args),
                stderr.trim(),
            ))
        }
    }
}

impl Default for ConanCli {
    fn default() -> Self {
        Self::new()
    }
}

impl ConanTool for ConanCli {
    fn program(&self) -> &str {
        &self.executable
    }

    fn probe(&self) -> InstallerResult<bool> {
        match self.exec(&[]) {
            Ok(_) => Ok(true),
            Err(InstallerError::CommandFailed { source, .. })
                if source.kind() == ErrorKind::NotFound =>
            {
                debug!("{} not found", self.executable);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    fn query_profile(&self, profile: Option<&Path>) -> InstallerResult<ProfileDescriptor> {
        let profile_arg = profile.map(|p| p.to_string_lossy().into_owned());
        let mut args = vec!["profile", "show", "--format", "json"];
        if let Some(ref profile) = profile_arg {
            args.extend(["--profile", profile.as_str()]);
        }

        let output = self.check_output(&args)?;
        ProfileDescriptor::from_json_str(&output)
    }

    fn query_version(&self) -> InstallerResult<VersionInfo> {
        let output = self.check_output(self.version_protocol.args())?;
        self.version_protocol.parse(&output)
    }

    fn install_config(&self, source: &ConfigSource, quiet: bool) -> InstallerResult<()> {
        let mut args = vec!["config", "install"];
        if quiet {
            args.push(QUIET_FLAG);
        }
        args.push(&source.url);
        if let Some(ref folder) = source.source_folder {
            args.extend(["--source-folder", folder.as_str()]);
        }

        info!("Installing conan configuration from {}", source.url);
        self.check_output(&args)?;
        Ok(())
    }
}
