//! Version command
//!
//! Besides the version, shows the package manager and bunch directory override
//! that other commands would use, without touching the bunch directory.

use std::path::Path;

use crate::config::{BUNCH_DIR_ENV, DEFAULT_PACKAGE_MANAGER, PACKAGE_MANAGER_ENV};
use crate::error::Result;

pub fn run(bunch_dir: Option<&Path>, package_manager: &str) -> Result<()> {
    println!("packbunch {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Package manager: {}", describe_package_manager(package_manager));
    println!("Bunch directory: {}", describe_bunch_dir(bunch_dir));
    println!(
        "Build: {}",
        if cfg!(debug_assertions) { "debug" } else { "release" }
    );

    Ok(())
}

fn describe_package_manager(package_manager: &str) -> String {
    if package_manager == DEFAULT_PACKAGE_MANAGER {
        format!("{package_manager} (default, set {PACKAGE_MANAGER_ENV} to change)")
    } else {
        package_manager.to_string()
    }
}

fn describe_bunch_dir(bunch_dir: Option<&Path>) -> String {
    match bunch_dir {
        Some(dir) => dir.display().to_string(),
        None => format!("~/.packbunch/bunches (set {BUNCH_DIR_ENV} to change)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_package_manager() {
        assert!(describe_package_manager("apt").starts_with("apt (default"));
        assert_eq!(describe_package_manager("dnf"), "dnf");
    }

    #[test]
    fn test_describe_bunch_dir() {
        assert_eq!(
            describe_bunch_dir(Some(Path::new("/tmp/bunches"))),
            "/tmp/bunches"
        );
        assert!(describe_bunch_dir(None).contains(BUNCH_DIR_ENV));
    }
}
