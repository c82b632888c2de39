//! Detect command - print already installed packages

use crate::cli::args::{DetectArgs, OutputFormat};
use crate::cli::commands::with_conan;
use crate::config::Config;
use crate::error::InstallerResult;
use crate::installer::WorkspaceLayout;

/// Execute the detect command
pub fn execute(args: DetectArgs, config: &Config, layout: &WorkspaceLayout) -> InstallerResult<()> {
    let installed = with_conan(config, layout, |conan| conan.detect(&args.packages))?;

    match args.format {
        OutputFormat::Plain => {
            for package in &installed {
                println!("{}", package);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&installed)?),
    }

    Ok(())
}
