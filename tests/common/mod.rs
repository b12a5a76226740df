//! Common test utilities for packbunch integration tests

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Run as `sh install <package>`: logs the call, fails for packages listed in $FAKE_PM_FAIL
const INSTALL_SCRIPT: &str = r#"echo "install $1" >> calls.log
for f in $FAKE_PM_FAIL; do [ "$f" = "$1" ] && exit 100; done
exit 0
"#;

/// Run as `sh remove <package>`: fails for `remove:<package>` entries in $FAKE_PM_FAIL
const REMOVE_SCRIPT: &str = r#"echo "remove $1" >> calls.log
for f in $FAKE_PM_FAIL; do [ "$f" = "remove:$1" ] && exit 100; done
exit 0
"#;

/// A temporary bunch directory plus a fake package manager
#[allow(dead_code)]
pub struct TestEnv {
    /// Temporary directory, also the working directory of every command
    pub temp: TempDir,
    /// Bunch directory inside `temp`
    pub bunch_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let bunch_dir = temp.path().join("bunches");
        // Scripts are read by `sh`, never executed directly
        fs::write(temp.path().join("install"), INSTALL_SCRIPT).expect("Failed to write script");
        fs::write(temp.path().join("remove"), REMOVE_SCRIPT).expect("Failed to write script");
        Self { temp, bunch_dir }
    }

    /// packbunch command running as a regular user
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("packbunch").expect("packbunch binary");
        cmd.current_dir(self.temp.path())
            .env("PACKBUNCH_DIR", &self.bunch_dir)
            .env("PACKBUNCH_PACKAGE_MANAGER", "sh")
            .env_remove("SUDO_USER")
            .env_remove("FAKE_PM_FAIL");
        cmd
    }

    /// packbunch command running as if started through sudo
    pub fn sudo_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("SUDO_USER", "tester");
        cmd
    }

    /// Write a bunch file directly
    pub fn write_bunch(&self, name: &str, contents: &str) {
        fs::create_dir_all(&self.bunch_dir).expect("Failed to create bunch directory");
        fs::write(self.bunch_dir.join(name), contents).expect("Failed to write bunch");
    }

    /// Read a bunch file directly
    pub fn read_bunch(&self, name: &str) -> String {
        fs::read_to_string(self.bunch_dir.join(name)).expect("Failed to read bunch")
    }

    pub fn bunch_exists(&self, name: &str) -> bool {
        self.bunch_dir.join(name).exists()
    }

    /// Package manager calls made so far, e.g. `["install curl", "remove curl"]`
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.temp.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
