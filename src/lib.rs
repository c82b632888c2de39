//! Conan installer
//!
//! Adapts the conan package manager to a dependency resolver's installer
//! interface: detects which requested packages a workspace already has
//! installed and builds the `conan install` command for the rest.

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod lockfile;
pub mod package;
pub mod profile;
pub mod tool;
pub mod ui;

pub use error::{InstallerError, InstallerResult};
pub use installer::{
    register_installers, ConanInstaller, InstallOptions, Installer, InstallerRegistry,
    WorkspaceLayout,
};
