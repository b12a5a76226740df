//! Bunch installation
//!
//! Installs or removes every package of a bunch through a [`PackageManager`],
//! one package at a time in bunch order.
//!
//! Installing is all or nothing from the caller's point of view: every entry
//! is attempted, and if any of them fails (invalid name or package manager
//! error) the whole bunch is uninstalled again and the install reports failure.


use crate::error::{PackbunchError, Result, package as package_error};
use crate::package_manager::PackageManager;
use crate::store::BunchStore;
use crate::validate::valid_package_name;

/// Installs and uninstalls the packages of a bunch
pub struct Installer<'a, P: PackageManager> {
    /// Store the bunches are read from
    store: &'a BunchStore,

    /// Package manager doing the actual work
    package_manager: P,
}

impl<'a, P: PackageManager> Installer<'a, P> {
    pub fn new(store: &'a BunchStore, package_manager: P) -> Self {
        Self {
            store,
            package_manager,
        }
    }

    #[cfg(test)]
    pub fn package_manager(&self) -> &P {
        &self.package_manager
    }

    /// Install every package in the bunch, reverting everything on any failure
    ///
    /// A failure doesn't stop the loop; the remaining packages are still
    /// validated and installed before the compensating uninstall runs. The
    /// compensation covers the whole bunch, including packages that were
    /// never installed.
    pub fn install(&self, name: &str) -> Result<()> {
        let packages = self.store.view(name)?;
        let mut failed = Vec::new();

        for package in &packages {
            if !valid_package_name(package) {
                log::error!("{}", package_error::invalid_name(package.as_str()));
                failed.push(package.clone());
                continue;
            }

            match self.package_manager.install_one(package) {
                Ok(()) => log::info!("Installed package \"{package}\" from bunch \"{name}\"."),
                Err(e) => {
                    log::error!("{e}");
                    failed.push(package.clone());
                }
            }
        }

        if failed.is_empty() {
            return Ok(());
        }

        log::warn!("Reverting bunch \"{name}\"...");
        if let Err(e) = self.uninstall(name) {
            log::warn!("Revert incomplete: {e}");
        }

        Err(PackbunchError::InstallFailed {
            bunch: name.to_string(),
            failed,
        })
    }

    /// Remove every package in the bunch
    ///
    /// Entries with invalid package names are skipped without counting as
    /// failures. Every remaining entry is attempted even after a failure.
    pub fn uninstall(&self, name: &str) -> Result<()> {
        let packages = self.store.view(name)?;
        let mut failed = Vec::new();

        for package in &packages {
            if !valid_package_name(package) {
                log::debug!("Skipping invalid package name \"{package}\"");
                continue;
            }

            match self.package_manager.remove_one(package) {
                Ok(()) => log::info!("Uninstalled package \"{package}\" from bunch \"{name}\"."),
                Err(e) => {
                    log::error!("{e}");
                    failed.push(package.clone());
                }
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(PackbunchError::UninstallFailed {
                bunch: name.to_string(),
                failed,
            })
        }
    }
}
