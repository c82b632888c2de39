//! conan-installer CLI entry point
//!
//! Loads configuration, resolves the workspace layout and dispatches to
//! subcommands.

use clap::Parser;
use conan_installer::cli::{Cli, Commands};
use conan_installer::config::{Config, ConfigManager};
use conan_installer::error::{InstallerError, InstallerResult};
use conan_installer::installer::WorkspaceLayout;
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, config: &Config) {
    // 0 = warn, 1 = info, 2+ = debug
    let filter = match verbose {
        0 => EnvFilter::new("conan_installer=warn"),
        1 => EnvFilter::new("conan_installer=info"),
        _ => EnvFilter::new("conan_installer=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run() -> InstallerResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };

    // Install command paths are built from this root and the command runs
    // from it, so a relative -C must not be resolved twice.
    let current_dir = std::env::current_dir()
        .map_err(|e| InstallerError::io("getting current directory", e))?;
    let cwd = match cli.working_dir {
        Some(ref dir) => current_dir.join(dir),
        None => current_dir,
    };

    let local_config_path = if cli.no_local {
        None
    } else {
        ConfigManager::find_local_config(&cwd)
    };

    let config = config_manager.load_merged(local_config_path.as_deref())?;
    init_logging(cli.verbose, &config);
    if let Some(ref path) = local_config_path {
        debug!("Found local config: {}", path.display());
    }

    let working_dir = match (&cli.working_dir, &config.workspace.working_dir) {
        (None, Some(configured)) => cwd.join(configured),
        _ => cwd,
    };
    let mut layout = WorkspaceLayout::from_config(working_dir, &config.workspace);
    if let Some(name) = cli.profile_file {
        layout = layout.with_profile_file(name);
    }
    debug!("Workspace: {}", layout.working_dir().display());

    match cli.command {
        Commands::Detect(args) => conan_installer::cli::commands::detect(args, &config, &layout),
        Commands::Install(args) => conan_installer::cli::commands::install(args, &config, &layout),
        Commands::Version => conan_installer::cli::commands::version(&config, &layout),
        Commands::Status => conan_installer::cli::commands::status(&config, &layout),
        Commands::Config(args) => {
            conan_installer::cli::commands::config(args, &config, &config_manager)
        }
    }
}
