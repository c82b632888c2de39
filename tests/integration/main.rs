//! Integration tests for conan-installer

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;

    fn conan_installer() -> Command {
        cargo_bin_cmd!("conan-installer")
    }

    #[test]
    fn help_displays() {
        conan_installer()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Conan installer for dependency resolvers"));
    }

    #[test]
    fn version_displays() {
        conan_installer()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("conan-installer"));
    }

    #[test]
    fn detect_help() {
        conan_installer()
            .args(["detect", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already installed"));
    }

    #[test]
    fn detect_requires_packages() {
        conan_installer().arg("detect").assert().failure();
    }
}

#[cfg(unix)]
mod workspace_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Stand-in for conan that answers the subcommands the installer uses
    const FAKE_CONAN: &str = r##"#!/bin/sh
case "$1" in
  "") exit 0 ;;
  profile) echo '{"host": {"settings": {"os": "Linux", "arch": "x86_64"}}, "build": {}}' ;;
  version) echo '{"version": "2.3.0"}' ;;
  config) echo "$*" >> "$(dirname "$0")/config.log" ;;
  install)
    out=""
    while [ $# -gt 0 ]; do
      if [ "$1" = "--lockfile-out" ]; then out="$2"; fi
      shift
    done
    echo '{"version": "0.5", "requires": ["zlib/1.3.1#f52e03ae3d251dec"]}' > "$out"
    ;;
  *) echo "unexpected: $*" >&2; exit 1 ;;
esac
"##;

    struct Workspace {
        root: TempDir,
        tools: PathBuf,
        work: PathBuf,
        config: PathBuf,
    }

    impl Workspace {
        fn new() -> Self {
            Self::with_executable(None)
        }

        fn with_executable(executable: Option<&str>) -> Self {
            let root = TempDir::new().unwrap();
            let tools = root.path().join("tools");
            let work = root.path().join("ws");
            fs::create_dir_all(&tools).unwrap();
            fs::create_dir_all(&work).unwrap();

            let script = tools.join("conan");
            fs::write(&script, FAKE_CONAN).unwrap();
            fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

            let executable = executable
                .map(str::to_string)
                .unwrap_or_else(|| script.display().to_string());
            let config = root.path().join("config.toml");
            fs::write(
                &config,
                format!("[conan]\nexecutable = \"{}\"\n", executable),
            )
            .unwrap();

            Self {
                root,
                tools,
                work,
                config,
            }
        }

        fn cmd(&self) -> Command {
            let mut cmd = cargo_bin_cmd!("conan-installer");
            cmd.arg("--no-local")
                .arg("--config")
                .arg(&self.config)
                .arg("-C")
                .arg(&self.work);
            cmd
        }

        /// Like `cmd`, but run from the temp root with `-C ws` relative to it
        fn cmd_from_root(&self) -> Command {
            let mut cmd = cargo_bin_cmd!("conan-installer");
            cmd.current_dir(self.root.path())
                .arg("--no-local")
                .arg("--config")
                .arg(&self.config)
                .arg("-C")
                .arg("ws");
            cmd
        }

        fn replace_conan(&self, script: &str) {
            fs::write(self.tools.join("conan"), script).unwrap();
        }

        fn install_dir(&self) -> PathBuf {
            self.work.join("install")
        }

        fn config_log(&self) -> String {
            fs::read_to_string(self.tools.join("config.log")).unwrap_or_default()
        }
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn detect_fresh_workspace_prints_nothing() {
        let ws = Workspace::new();
        ws.cmd()
            .args(["detect", "zlib/1.3.1"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn install_dry_run_prints_command() {
        let ws = Workspace::new();
        ws.cmd()
            .args(["install", "zlib/1.3.1", "bzip2/1.0.8", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "install --require zlib/1.3.1 --require bzip2/1.0.8 --update --generator Ament --build missing --output-folder",
            ))
            .stdout(predicate::str::contains("rosdep_conan.lock"));

        let cached: serde_json::Value =
            serde_json::from_str(&read(&ws.install_dir().join("conan_profiles.json"))).unwrap();
        assert_eq!(cached["host"]["settings"]["os"], "Linux");
        assert!(ws
            .config_log()
            .contains("config install https://github.com/conan-io/conan-extensions.git"));
    }

    #[test]
    fn install_then_detect() {
        let ws = Workspace::new();
        ws.cmd()
            .args(["install", "zlib/1.3.1"])
            .assert()
            .success();

        ws.cmd()
            .args(["detect", "zlib/1.3.1", "bzip2/1.0.8", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"zlib/1.3.1\""))
            .stdout(predicate::str::contains("bzip2").not());

        // Nothing left to do, so no config bootstrapping either
        let bootstraps = ws.config_log().lines().count();
        ws.cmd()
            .args(["install", "zlib/1.3.1", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--require").not());
        assert_eq!(ws.config_log().lines().count(), bootstraps);
    }

    #[test]
    fn relative_working_dir_install_then_detect() {
        let ws = Workspace::new();
        ws.cmd_from_root()
            .args(["install", "zlib/1.3.1"])
            .assert()
            .success();

        assert!(ws.install_dir().join("rosdep_conan.lock").exists());
        assert!(!ws.work.join("ws").exists());

        ws.cmd_from_root()
            .args(["detect", "zlib/1.3.1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("zlib/1.3.1"));
    }

    #[test]
    fn relative_working_dir_is_absolute_in_command() {
        let ws = Workspace::new();
        let expected = ws.install_dir().join("rosdep_conan.lock");
        ws.cmd_from_root()
            .args(["install", "zlib/1.3.1", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains(expected.display().to_string()));
    }

    #[test]
    fn quiet_install_passes_quiet_flag() {
        let ws = Workspace::new();
        ws.cmd()
            .args(["install", "zlib/1.3.1", "--quiet", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("install -vquiet --require zlib/1.3.1"));
        assert!(ws.config_log().contains("config install -vquiet"));
    }

    #[test]
    fn profile_file_is_passed_to_conan() {
        let ws = Workspace::new();
        fs::write(ws.work.join("conan_profile"), "[settings]\nos=Linux\n").unwrap();

        ws.cmd()
            .args(["install", "zlib/1.3.1", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--profile"))
            .stdout(predicate::str::contains("conan_profile"));
    }

    #[test]
    fn missing_conan_fails_install() {
        let ws = Workspace::with_executable(Some("conan-installer-test-no-such-binary"));
        ws.cmd()
            .args(["install", "zlib/1.3.1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("conan is not installed"));
        assert!(!ws.install_dir().exists());
    }

    #[test]
    fn missing_conan_detects_nothing() {
        let ws = Workspace::with_executable(Some("conan-installer-test-no-such-binary"));
        ws.cmd()
            .args(["detect", "zlib/1.3.1"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn version_prints_conan_version() {
        let ws = Workspace::new();
        ws.cmd()
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::contains("conan 2.3.0"));
    }

    #[test]
    fn status_reports_workspace() {
        let ws = Workspace::new();
        ws.cmd()
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Conan Installer Status"))
            .stdout(predicate::str::contains("conan 2.3.0"));
    }

    #[test]
    fn status_warns_about_conan_1() {
        let ws = Workspace::new();
        ws.replace_conan(&FAKE_CONAN.replace("2.3.0", "1.66.0"));
        ws.cmd()
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("conan 1.66.0 is too old"))
            .stdout(predicate::str::contains("need conan 2 or newer"));
    }

    #[test]
    fn config_show_and_path() {
        let ws = Workspace::new();
        ws.cmd()
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[conan]"))
            .stdout(predicate::str::contains("[workspace]"));

        ws.cmd()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }
}
