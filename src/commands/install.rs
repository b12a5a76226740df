//! Install and uninstall commands

use crate::cli::BunchArgs;
use crate::config::Config;
use crate::error::Result;
use crate::installer::Installer;
use crate::package_manager::SystemPackageManager;
use crate::store::BunchStore;

/// Install every package in a bunch
pub fn install(config: &Config, args: &BunchArgs) -> Result<()> {
    config.require_privilege("install")?;

    let store = BunchStore::new(config);
    let installer = Installer::new(
        &store,
        SystemPackageManager::new(config.package_manager.as_str()),
    );
    installer.install(&args.bunch)?;
    super::print_done("Installed", &format!("bunch \"{}\".", args.bunch));

    Ok(())
}

/// Uninstall every package in a bunch
pub fn uninstall(config: &Config, args: &BunchArgs) -> Result<()> {
    config.require_privilege("uninstall")?;

    let store = BunchStore::new(config);
    let installer = Installer::new(
        &store,
        SystemPackageManager::new(config.package_manager.as_str()),
    );
    installer.uninstall(&args.bunch)?;
    super::print_done("Uninstalled", &format!("bunch \"{}\".", args.bunch));

    Ok(())
}
