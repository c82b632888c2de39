//! Version command - print the conan version

use crate::cli::commands::with_conan;
use crate::config::Config;
use crate::error::InstallerResult;
use crate::installer::WorkspaceLayout;

/// Execute the version command
pub fn execute(config: &Config, layout: &WorkspaceLayout) -> InstallerResult<()> {
    for line in with_conan(config, layout, |conan| conan.version_strings())? {
        println!("{}", line);
    }
    Ok(())
}
