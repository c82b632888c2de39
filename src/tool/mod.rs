//! External conan tool access
//!
//! Every interaction with the `conan` executable goes through the
//! [`ConanTool`] trait so detection and command building can be exercised
//! without spawning processes.

mod cli;
#[cfg(test)]
pub(crate) mod fake;
mod runtime;
mod version;

pub use cli::ConanCli;
pub use runtime::{
    ConanTool, ConfigSource, DEFAULT_EXTENSIONS_SOURCE_FOLDER, DEFAULT_EXTENSIONS_URL,
};
pub use version::{VersionInfo, VersionProtocol, MIN_SUPPORTED_MAJOR};

/// Quiet flag understood by conan 2 subcommands
pub const QUIET_FLAG: &str = "-vquiet";

/// Render an argument list for logs and error messages
pub(crate) fn display_command(program: &str, args: &[&str]) -> String {
    let mut rendered = program.to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}
