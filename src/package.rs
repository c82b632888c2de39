//! Package specifiers
//!
//! A specifier names a package as `name/version`, optionally followed by
//! `#revision` when it comes out of a lockfile. Matching between requests
//! and lockfile entries always ignores the revision.

use crate::error::{InstallerError, InstallerResult};
use std::fmt;
use std::str::FromStr;

/// Separator between a reference and its revision hash
const REVISION_SEPARATOR: char = '#';

/// A package reference with an optional revision suffix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageSpec {
    reference: String,
    revision: Option<String>,
}

impl PackageSpec {
    /// Parse a specifier, splitting off everything after the first `#`
    pub fn parse(raw: &str) -> InstallerResult<Self> {
        let (reference, revision) = match raw.split_once(REVISION_SEPARATOR) {
            Some((reference, revision)) => (reference, Some(revision)),
            None => (raw, None),
        };

        if reference.is_empty() {
            return Err(InstallerError::InvalidSpecifier(raw.to_string()));
        }

        Ok(Self {
            reference: reference.to_string(),
            revision: revision.filter(|r| !r.is_empty()).map(str::to_string),
        })
    }

    /// The specifier without its revision, e.g. `zlib/1.3.1`
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// The revision hash, if one was present
    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }
}

impl FromStr for PackageSpec {
    type Err = InstallerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.revision {
            Some(revision) => write!(f, "{}{}{}", self.reference, REVISION_SEPARATOR, revision),
            None => write!(f, "{}", self.reference),
        }
    }
}
