//! Error types for the conan installer
//!
//! All modules use `InstallerResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for installer operations
pub type InstallerResult<T> = Result<T, InstallerError>;

/// All errors that can occur while detecting or installing packages
#[derive(Error, Debug)]
pub enum InstallerError {
    // Installer errors
    #[error("Installation failed for {installer}: {reason}")]
    InstallFailed { installer: String, reason: String },

    #[error("No installer registered for key: {0}")]
    UnknownInstaller(String),

    #[error("Invalid package specifier: {0:?}")]
    InvalidSpecifier(String),

    #[error("Could not parse tool version: {0}")]
    VersionParse(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command execution error: {command}, stderr: {stderr}")]
    CommandExecution { command: String, stderr: String },

    #[error("Command exited unsuccessfully: {command}, exit code: {code}")]
    CommandExit { command: String, code: i32 },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl InstallerError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a command execution error
    pub fn command_exec(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::CommandExecution {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Create an installation failure attributed to an installer
    pub fn install_failed(installer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InstallFailed {
            installer: installer.into(),
            reason: reason.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InstallFailed { .. } => Some("Install conan with: pip install conan"),
            Self::CommandExecution { .. } => Some("Re-run with -vv to see the conan invocation"),
            Self::ConfigInvalid { .. } => Some("Run: conan-installer config show"),
            _ => None,
        }
    }
}
