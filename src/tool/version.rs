//! Conan version reporting

use crate::error::{InstallerError, InstallerResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix printed by `conan --version`
const LEGACY_VERSION_PREFIX: &str = "Conan version ";

/// First conan major version with `--format json` output and `-vquiet`
pub const MIN_SUPPORTED_MAJOR: u64 = 2;

/// How the tool version is queried
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionProtocol {
    /// `conan version --format json`
    #[default]
    Json,
    /// `conan --version`
    Legacy,
}

impl VersionProtocol {
    /// Arguments passed to conan for this protocol
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Self::Json => &["version", "--format", "json"],
            Self::Legacy => &["--version"],
        }
    }

    /// Parse the raw command output for this protocol
    pub fn parse(&self, output: &str) -> InstallerResult<VersionInfo> {
        match self {
            Self::Json => VersionInfo::from_json_str(output),
            Self::Legacy => VersionInfo::from_legacy_output(output),
        }
    }
}

#[derive(Deserialize)]
struct VersionPayload {
    version: String,
}

/// Detected conan version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Version string as reported by conan
    pub version: String,
}

impl VersionInfo {
    /// Parse `conan version --format json` output
    pub fn from_json_str(output: &str) -> InstallerResult<Self> {
        let payload: VersionPayload = serde_json::from_str(output.trim())
            .map_err(|e| InstallerError::VersionParse(e.to_string()))?;
        Ok(Self {
            version: payload.version,
        })
    }

    /// Parse `conan --version` output
    pub fn from_legacy_output(output: &str) -> InstallerResult<Self> {
        let line = output.trim();
        let version = line
            .strip_prefix(LEGACY_VERSION_PREFIX)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| InstallerError::VersionParse(line.to_string()))?;
        Ok(Self {
            version: version.to_string(),
        })
    }

    /// Semantic version, when conan reports one
    pub fn semver(&self) -> Option<semver::Version> {
        semver::Version::parse(&self.version).ok()
    }

    /// Major version, falling back to the leading component for short
    /// versions such as `2.1`
    pub fn major(&self) -> Option<u64> {
        match self.semver() {
            Some(version) => Some(version.major),
            None => self.version.split('.').next()?.trim().parse().ok(),
        }
    }

    /// Whether this conan understands the JSON queries and quiet flag the
    /// installer relies on. Unparseable versions count as supported.
    pub fn is_supported(&self) -> bool {
        self.major().map_or(true, |major| major >= MIN_SUPPORTED_MAJOR)
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conan {}", self.version)
    }
}
