//! Status command - check conan availability and workspace state

use crate::config::Config;
use crate::error::InstallerResult;
use crate::installer::WorkspaceLayout;
use crate::tool::{ConanCli, ConanTool, MIN_SUPPORTED_MAJOR};
use crate::ui::{self, UiContext};
use console::style;

/// Execute the status command
pub fn execute(config: &Config, layout: &WorkspaceLayout) -> InstallerResult<()> {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Conan Installer Status");

    println!("{}", style("Conan:").bold());
    let tool = ConanCli::with_executable(config.conan.executable.clone())
        .with_version_protocol(config.conan.version_protocol);

    if tool.probe()? {
        match tool.query_version() {
            Ok(info) if info.is_supported() => {
                ui::step_ok_detail(&ctx, "conan found", &info.to_string())
            }
            Ok(info) => ui::step_warn_hint(
                &ctx,
                &format!("{} is too old", info),
                &format!(
                    "--format json and -vquiet need conan {} or newer",
                    MIN_SUPPORTED_MAJOR
                ),
            ),
            Err(e) => ui::step_warn_hint(&ctx, "conan found", &e.to_string()),
        }
    } else {
        ui::step_error(
            &ctx,
            &format!("{} not found - install with: pip install conan", config.conan.executable),
        );
    }

    println!();
    println!("{}", style("Workspace:").bold());
    ui::key_value(&ctx, "working dir", &layout.working_dir().display().to_string());
    ui::key_value(&ctx, "output dir", &layout.output_path().display().to_string());

    let lockfile = layout.lockfile_path();
    ui::key_value_status(
        &ctx,
        "lockfile",
        &lockfile.display().to_string(),
        lockfile.exists(),
    );

    let profiles = layout.profiles_path();
    ui::key_value_status(
        &ctx,
        "profile cache",
        &profiles.display().to_string(),
        profiles.exists(),
    );

    match layout.profile_selector() {
        Some(profile) => ui::key_value(&ctx, "profile", &profile.display().to_string()),
        None => ui::key_value(&ctx, "profile", "conan default"),
    }

    Ok(())
}
