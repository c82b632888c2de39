//! CLI command implementations

pub mod config;
pub mod detect;
pub mod install;
pub mod status;
pub mod version;

pub use config::execute as config;
pub use detect::execute as detect;
pub use install::execute as install;
pub use status::execute as status;
pub use version::execute as version;

use crate::config::Config;
use crate::error::InstallerResult;
use crate::installer::{register_installers, Installer, InstallerRegistry, WorkspaceLayout};
use crate::installer::CONAN_INSTALLER;

/// Build the registry and hand the conan installer to `f`
pub(crate) fn with_conan<R>(
    config: &Config,
    layout: &WorkspaceLayout,
    f: impl FnOnce(&dyn Installer) -> InstallerResult<R>,
) -> InstallerResult<R> {
    let mut registry = InstallerRegistry::new();
    register_installers(&mut registry, config, layout.clone());
    f(registry.get(CONAN_INSTALLER)?)
}
