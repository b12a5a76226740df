//! Add and remove commands
//!
//! Every package on the command line is attempted on its own. A failure is
//! reported and the next package is still processed; the command fails at the
//! end if any package failed.

use crate::cli::PackagesArgs;
use crate::config::Config;
use crate::error::{PackbunchError, Result};
use crate::store::BunchStore;

/// Add packages to a bunch
pub fn add(config: &Config, args: &PackagesArgs) -> Result<()> {
    let store = BunchStore::new(config);

    for_each_package("add", &args.packages, |package| {
        store.add_package(&args.bunch, package)?;
        super::print_done(
            "Added",
            &format!("package \"{package}\" to bunch \"{}\".", args.bunch),
        );
        Ok(())
    })
}

/// Remove packages from a bunch
pub fn remove(config: &Config, args: &PackagesArgs) -> Result<()> {
    let store = BunchStore::new(config);

    for_each_package("remove", &args.packages, |package| {
        store.remove_package(&args.bunch, package)?;
        super::print_done(
            "Removed",
            &format!("package \"{package}\" from bunch \"{}\".", args.bunch),
        );
        Ok(())
    })
}

/// Run `op` for every package, failing at the end if any call failed
fn for_each_package<F>(action: &str, packages: &[String], mut op: F) -> Result<()>
where
    F: FnMut(&str) -> Result<()>,
{
    let mut failed = 0;
    for package in packages {
        if let Err(e) = op(package) {
            log::error!("{e}");
            failed += 1;
        }
    }

    if failed == 0 {
        Ok(())
    } else {
        Err(PackbunchError::PartialFailure {
            action: action.to_string(),
            failed,
            total: packages.len(),
        })
    }
}
