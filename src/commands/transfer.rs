//! Import and export commands

use crate::cli::{ExportArgs, ImportArgs};
use crate::config::Config;
use crate::error::Result;
use crate::store::BunchStore;

/// Copy a bunch file into the bunch directory
pub fn import(config: &Config, args: &ImportArgs) -> Result<()> {
    let name = BunchStore::new(config).import_bunch(&args.path)?;
    super::print_done("Imported", &format!("bunch \"{name}\"."));

    Ok(())
}

/// Copy a bunch into a directory
pub fn export(config: &Config, args: &ExportArgs) -> Result<()> {
    let written = BunchStore::new(config).export_bunch(&args.bunch, &args.path)?;
    super::print_done(
        "Exported",
        &format!("bunch \"{}\" to \"{}\".", args.bunch, written.display()),
    );

    Ok(())
}
