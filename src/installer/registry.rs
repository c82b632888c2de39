//! Installer registration
//!
//! Installers are registered under a fixed string key so a resolver can
//! look them up by the package manager named in its rules.

use crate::config::Config;
use crate::error::{InstallerError, InstallerResult};
use crate::installer::conan::{ConanInstaller, ConanSettings, CONAN_INSTALLER};
use crate::installer::layout::WorkspaceLayout;
use crate::installer::Installer;
use crate::tool::{ConanCli, ConfigSource};
use std::collections::BTreeMap;
use tracing::debug;

/// Installers keyed by package manager name
#[derive(Default)]
pub struct InstallerRegistry {
    installers: BTreeMap<String, Box<dyn Installer>>,
}

impl InstallerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an installer, replacing any previous one under `key`
    pub fn set_installer(&mut self, key: impl Into<String>, installer: Box<dyn Installer>) {
        let key = key.into();
        debug!("Registering installer: {}", key);
        self.installers.insert(key, installer);
    }

    /// Look up an installer by key
    pub fn get(&self, key: &str) -> InstallerResult<&dyn Installer> {
        self.installers
            .get(key)
            .map(|installer| installer.as_ref())
            .ok_or_else(|| InstallerError::UnknownInstaller(key.to_string()))
    }

    /// Registered keys in sorted order
    pub fn keys(&self) -> Vec<&str> {
        self.installers.keys().map(String::as_str).collect()
    }
}

/// Register the conan installer built from configuration
pub fn register_installers(
    registry: &mut InstallerRegistry,
    config: &Config,
    layout: WorkspaceLayout,
) {
    let conan = &config.conan;
    let tool = ConanCli::with_executable(conan.executable.clone())
        .with_version_protocol(conan.version_protocol);
    let settings = ConanSettings {
        generator: conan.generator.clone(),
        build_policy: conan.build_policy.clone(),
        extensions: ConfigSource {
            url: conan.extensions_url.clone(),
            source_folder: conan.extensions_source_folder.clone(),
        },
    };

    registry.set_installer(
        CONAN_INSTALLER,
        Box::new(ConanInstaller::with_settings(tool, layout, settings)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::fake::FakeConan;

    #[test]
    fn registers_conan_key() {
        let mut registry = InstallerRegistry::new();
        register_installers(&mut registry, &Config::default(), WorkspaceLayout::new("."));

        assert_eq!(registry.keys(), vec!["conan"]);
        let installer = registry.get("conan").unwrap();
        assert_eq!(installer.key(), "conan");
        assert!(installer.supports_depends());
    }

    #[test]
    fn unknown_key_is_an_error() {
        let registry = InstallerRegistry::new();
        assert!(matches!(
            registry.get("apt"),
            Err(InstallerError::UnknownInstaller(key)) if key == "apt"
        ));
    }

    #[test]
    fn set_installer_replaces_existing() {
        let mut registry = InstallerRegistry::new();
        register_installers(&mut registry, &Config::default(), WorkspaceLayout::new("."));
        registry.set_installer(
            "conan",
            Box::new(ConanInstaller::new(
                FakeConan::missing(),
                WorkspaceLayout::new("."),
            )),
        );

        assert_eq!(registry.keys().len(), 1);
        assert!(!registry.get("conan").unwrap().is_available().unwrap());
    }
}
