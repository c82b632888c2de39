//! In-memory conan tool for tests

use crate::error::{InstallerError, InstallerResult};
use crate::profile::ProfileDescriptor;
use crate::tool::runtime::{ConanTool, ConfigSource};
use crate::tool::version::VersionInfo;
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

/// Scripted ConanTool that records how it was used
pub(crate) struct FakeConan {
    pub available: bool,
    pub profile: Value,
    pub version: String,
    pub fail_config_install: bool,
    pub profile_queries: RefCell<Vec<Option<PathBuf>>>,
    pub config_installs: RefCell<Vec<(ConfigSource, bool)>>,
    pub probes: Cell<usize>,
}

impl FakeConan {
    pub fn available() -> Self {
        Self {
            available: true,
            profile: default_profile(),
            version: "2.3.0".to_string(),
            fail_config_install: false,
            profile_queries: RefCell::new(Vec::new()),
            config_installs: RefCell::new(Vec::new()),
            probes: Cell::new(0),
        }
    }

    pub fn missing() -> Self {
        Self {
            available: false,
            ..Self::available()
        }
    }
}

pub(crate) fn default_profile() -> Value {
    json!({
        "host": {"settings": {"os": "Linux", "arch": "x86_64", "compiler": "gcc"}},
        "build": {"settings": {"os": "Linux", "arch": "x86_64"}}
    })
}

impl ConanTool for FakeConan {
    fn program(&self) -> &str {
        "conan"
    }

    fn probe(&self) -> InstallerResult<bool> {
        self.probes.set(self.probes.get() + 1);
        Ok(self.available)
    }

    fn query_profile(&self, profile: Option<&Path>) -> InstallerResult<ProfileDescriptor> {
        if !self.available {
            return Err(InstallerError::command_failed(
                "conan profile show",
                std::io::Error::from(std::io::ErrorKind::NotFound),
            ));
        }
        self.profile_queries
            .borrow_mut()
            .push(profile.map(Path::to_path_buf));
        Ok(ProfileDescriptor::new(self.profile.clone()))
    }

    fn query_version(&self) -> InstallerResult<VersionInfo> {
        Ok(VersionInfo {
            version: self.version.clone(),
        })
    }

    fn install_config(&self, source: &ConfigSource, quiet: bool) -> InstallerResult<()> {
        self.config_installs
            .borrow_mut()
            .push((source.clone(), quiet));
        if self.fail_config_install {
            return Err(InstallerError::command_exec(
                "conan config install",
                "remote unreachable",
            ));
        }
        Ok(())
    }
}
