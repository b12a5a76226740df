//! List, view and create commands

use crate::cli::{BunchArgs, CreateArgs};
use crate::config::Config;
use crate::error::Result;
use crate::store::BunchStore;

/// Print every bunch name
pub fn list(config: &Config) -> Result<()> {
    let store = BunchStore::new(config);
    log::debug!("Listing bunches in {}", store.dir().display());

    for name in store.list()? {
        println!("{}", name?);
    }

    Ok(())
}

/// Print every package in a bunch, in order
pub fn view(config: &Config, args: &BunchArgs) -> Result<()> {
    let store = BunchStore::new(config);

    for package in store.view(&args.bunch)? {
        println!("{package}");
    }

    Ok(())
}

/// Create an empty bunch
pub fn create(config: &Config, args: &CreateArgs) -> Result<()> {
    BunchStore::new(config).create(&args.name)?;
    super::print_done("Created", &format!("bunch \"{}\".", args.name));

    Ok(())
}
