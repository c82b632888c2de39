//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Conan installer for dependency resolvers
///
/// Detects which conan packages a workspace already has and builds the
/// `conan install` command for the rest.
#[derive(Parser, Debug)]
#[command(name = "conan-installer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CONAN_INSTALLER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip local .conan-installer.toml discovery
    #[arg(long, global = true)]
    pub no_local: bool,

    /// Workspace directory (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    pub working_dir: Option<PathBuf>,

    /// Profile file whose presence selects an explicit conan profile
    #[arg(long, global = true)]
    pub profile_file: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the requested packages that are already installed
    Detect(DetectArgs),

    /// Install the requested packages that are missing
    Install(InstallArgs),

    /// Print the conan version
    Version,

    /// Check conan availability and workspace state
    Status,

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the detect command
#[derive(Parser, Debug)]
pub struct DetectArgs {
    /// Package specifiers (name/version)
    #[arg(required = true)]
    pub packages: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for the install command
#[derive(Parser, Debug)]
pub struct InstallArgs {
    /// Package specifiers (name/version)
    #[arg(required = true)]
    pub packages: Vec<String>,

    /// Install every package even if already installed
    #[arg(long)]
    pub reinstall: bool,

    /// Suppress conan output
    #[arg(short, long)]
    pub quiet: bool,

    /// Never prompt
    #[arg(long)]
    pub non_interactive: bool,

    /// Print the commands instead of running them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for package lists
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// One package per line
    Plain,
    /// JSON array
    Json,
}
