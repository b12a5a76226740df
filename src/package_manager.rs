//! External package manager
//!
//! The installer talks to the package manager through [`PackageManager`], one
//! synchronous call per package. [`SystemPackageManager`] runs
//! `<program> install <package>` and `<program> remove <package>`, passing the
//! package name as a single argument without going through a shell.

use std::process::Command;

use crate::error::{Result, package};

/// Install and remove single packages
pub trait PackageManager {
    /// Install one package; `Err` unless the package manager exits with status 0
    fn install_one(&self, package: &str) -> Result<()>;

    /// Remove one package; `Err` unless the package manager exits with status 0
    fn remove_one(&self, package: &str) -> Result<()>;
}

/// Package manager backed by an external program such as `apt`
#[derive(Debug, Clone)]
pub struct SystemPackageManager {
    program: String,
}

impl SystemPackageManager {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, action: &str, package_name: &str) -> Result<()> {
        log::debug!("Running {} {action} {package_name}", self.program);

        let status = Command::new(&self.program)
            .arg(action)
            .arg(package_name)
            .status()
            .map_err(|e| {
                package::manager_failed(
                    action,
                    package_name,
                    format!("failed to run {}: {e}", self.program),
                )
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(package::manager_failed(
                action,
                package_name,
                format!("{} exited with {status}", self.program),
            ))
        }
    }
}

impl PackageManager for SystemPackageManager {
    fn install_one(&self, package: &str) -> Result<()> {
        self.run("install", package)
    }

    fn remove_one(&self, package: &str) -> Result<()> {
        self.run("remove", package)
    }
}
