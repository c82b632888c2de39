//! Install command - build and run conan install commands

use crate::cli::args::InstallArgs;
use crate::cli::commands::with_conan;
use crate::config::Config;
use crate::error::{InstallerError, InstallerResult};
use crate::installer::{CommandLine, InstallOptions, WorkspaceLayout};
use crate::ui::{self, UiContext};
use std::process::{Command, Stdio};
use tracing::debug;

/// Execute the install command
pub fn execute(args: InstallArgs, config: &Config, layout: &WorkspaceLayout) -> InstallerResult<()> {
    let options = InstallOptions {
        interactive: !args.non_interactive,
        reinstall: args.reinstall,
        quiet: args.quiet,
    };

    let commands = with_conan(config, layout, |conan| {
        conan.install_commands(&args.packages, &options)
    })?;

    if commands.is_empty() {
        if !args.quiet {
            ui::step_info(&UiContext::detect(), "All packages already installed");
        }
        return Ok(());
    }

    for command in &commands {
        if args.dry_run {
            println!("{}", command.join(" "));
        } else {
            run(command, layout)?;
        }
    }

    Ok(())
}

/// Run one command in the workspace with inherited stdio
fn run(command: &CommandLine, layout: &WorkspaceLayout) -> InstallerResult<()> {
    let rendered = command.join(" ");
    let Some((program, args)) = command.split_first() else {
        return Ok(());
    };

    debug!("Executing interactively: {}", rendered);
    let status = Command::new(program)
        .args(args)
        .current_dir(layout.working_dir())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| InstallerError::command_failed(rendered.clone(), e))?;

    if status.success() {
        Ok(())
    } else {
        Err(InstallerError::CommandExit {
            command: rendered,
            code: status.code().unwrap_or(-1),
        })
    }
}
