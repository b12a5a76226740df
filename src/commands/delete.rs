//! Delete command
//!
//! Deleting a bunch only removes its file. Unless told otherwise the user is
//! asked whether the bunch's packages should be uninstalled first; a failed
//! uninstall is reported but doesn't stop the deletion.

use std::io::{self, BufRead};

use inquire::{Confirm, InquireError};

use crate::cli::DeleteArgs;
use crate::config::Config;
use crate::error::Result;
use crate::installer::Installer;
use crate::package_manager::SystemPackageManager;
use crate::store::BunchStore;

/// Delete a bunch, optionally uninstalling its packages first
pub fn run(config: &Config, args: &DeleteArgs) -> Result<()> {
    config.require_privilege("delete")?;

    let store = BunchStore::new(config);
    // Fail on a missing or invalid bunch before asking anything
    store.view(&args.bunch)?;

    if should_uninstall(args)? {
        let installer = Installer::new(
            &store,
            SystemPackageManager::new(config.package_manager.as_str()),
        );
        if let Err(e) = installer.uninstall(&args.bunch) {
            log::warn!("{e}");
        }
    }

    store.delete(&args.bunch)?;
    super::print_done("Deleted", &format!("bunch \"{}\".", args.bunch));

    Ok(())
}

fn should_uninstall(args: &DeleteArgs) -> Result<bool> {
    if args.keep_packages {
        return Ok(false);
    }
    if args.yes {
        return Ok(true);
    }

    let question = format!(
        "Do you want to uninstall the packages in bunch \"{}\" before deleting it?",
        args.bunch
    );
    let answer = Confirm::new(&question)
        .with_default(true)
        .with_help_message("Press Enter to uninstall them, or 'n' to keep them installed")
        .prompt();

    match answer {
        Ok(answer) => Ok(answer),
        Err(InquireError::NotTTY) => {
            println!("{question} [Y/n]");
            read_answer(io::stdin().lock())
        }
        Err(e) => Err(e.into()),
    }
}

/// Reads a plain answer line: anything but `n` means uninstall
fn read_answer(mut input: impl BufRead) -> Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.trim() != "n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_uninstall_flags() {
        let keep = DeleteArgs {
            bunch: "dev".to_string(),
            yes: false,
            keep_packages: true,
        };
        assert!(!should_uninstall(&keep).unwrap());

        let yes = DeleteArgs {
            bunch: "dev".to_string(),
            yes: true,
            keep_packages: false,
        };
        assert!(should_uninstall(&yes).unwrap());
    }

    #[test]
    fn test_read_answer() {
        assert!(!read_answer("n\n".as_bytes()).unwrap());
        assert!(!read_answer("n".as_bytes()).unwrap());
        assert!(read_answer("\n".as_bytes()).unwrap());
        assert!(read_answer("y\n".as_bytes()).unwrap());
        assert!(read_answer("no\n".as_bytes()).unwrap());
        // EOF
        assert!(read_answer("".as_bytes()).unwrap());
    }
}
