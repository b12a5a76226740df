//! Error types and handling for packbunch
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bunch`]: Bunch and package entry errors
//! - [`fs`]: File system errors
//! - [`package`]: Package manager errors

pub mod bunch;
pub mod fs;
pub mod package;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for packbunch operations
#[derive(Error, Diagnostic, Debug)]
pub enum PackbunchError {
    // Bunch errors
    #[error("Bunch \"{name}\" doesn't exist")]
    #[diagnostic(
        code(packbunch::bunch::not_found),
        help("Run 'packbunch list' to see the available bunches")
    )]
    BunchNotFound { name: String },

    #[error("Bunch \"{name}\" already exists")]
    #[diagnostic(code(packbunch::bunch::already_exists))]
    BunchAlreadyExists { name: String },

    #[error(
        "Bunch name \"{name}\" is invalid. It can only contain letters, digits, and the following characters: \"_\", \"-\", \".\""
    )]
    #[diagnostic(code(packbunch::bunch::invalid_name))]
    InvalidBunchName { name: String },

    #[error("Bunch \"{bunch}\" already contains package \"{package}\"")]
    #[diagnostic(code(packbunch::bunch::duplicate_package))]
    DuplicatePackage { bunch: String, package: String },

    #[error("Bunch \"{bunch}\" doesn't contain package \"{package}\"")]
    #[diagnostic(code(packbunch::bunch::package_not_found))]
    PackageNotInBunch { bunch: String, package: String },

    // Package errors
    #[error(
        "Package name \"{name}\" is invalid. It can only contain lowercase letters, digits, and the following characters: \"+\", \"-\", \".\""
    )]
    #[diagnostic(code(packbunch::package::invalid_name))]
    InvalidPackageName { name: String },

    #[error("Couldn't {action} package \"{package}\": {reason}")]
    #[diagnostic(code(packbunch::package::manager_failed))]
    PackageManagerFailed {
        action: String,
        package: String,
        reason: String,
    },

    #[error("Couldn't install bunch \"{bunch}\" (failed: {}). All changes have been reverted", .failed.join(", "))]
    #[diagnostic(code(packbunch::package::install_failed))]
    InstallFailed { bunch: String, failed: Vec<String> },

    #[error("Couldn't uninstall every package in bunch \"{bunch}\" (failed: {})", .failed.join(", "))]
    #[diagnostic(code(packbunch::package::uninstall_failed))]
    UninstallFailed { bunch: String, failed: Vec<String> },

    #[error("Couldn't {action} {failed} of {total} package(s)")]
    #[diagnostic(code(packbunch::package::partial_failure))]
    PartialFailure {
        action: String,
        failed: usize,
        total: usize,
    },

    // Import/export errors
    #[error("No bunch found at \"{path}\"")]
    #[diagnostic(code(packbunch::fs::source_not_found))]
    SourceNotFound { path: String },

    #[error("Directory \"{path}\" doesn't exist")]
    #[diagnostic(code(packbunch::fs::target_dir_not_found))]
    TargetDirectoryNotFound { path: String },

    #[error("Path \"{path}\" isn't a directory")]
    #[diagnostic(code(packbunch::fs::not_a_directory))]
    NotADirectory { path: String },

    #[error("File \"{path}\" already exists")]
    #[diagnostic(code(packbunch::fs::target_exists))]
    TargetAlreadyExists { path: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(packbunch::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(packbunch::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(packbunch::fs::io_error))]
    IoError { message: String },

    // Environment errors
    #[error("Couldn't get path to home directory")]
    #[diagnostic(
        code(packbunch::config::home_not_found),
        help("Set HOME, or pass --bunch-dir / PACKBUNCH_DIR")
    )]
    HomeDirNotFound,

    #[error("Bunch directory \"{path}\" doesn't exist and couldn't be created: {reason}")]
    #[diagnostic(
        code(packbunch::config::bunch_dir_create_failed),
        help(
            "Try manually creating a \".packbunch\" directory within your home directory, then a \"bunches\" directory inside that"
        )
    )]
    BunchDirCreateFailed { path: String, reason: String },

    #[error("The \"{command}\" command must be run using sudo")]
    #[diagnostic(code(packbunch::config::privilege_required))]
    PrivilegeRequired { command: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(packbunch::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl From<std::io::Error> for PackbunchError {
    fn from(err: std::io::Error) -> Self {
        PackbunchError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for PackbunchError {
    fn from(err: inquire::InquireError) -> Self {
        PackbunchError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PackbunchError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = PackbunchError::BunchNotFound {
            name: "dev-tools".to_string(),
        };
        assert_eq!(err.to_string(), "Bunch \"dev-tools\" doesn't exist");
    }

    #[test]
    fn test_error_code() {
        let err = PackbunchError::BunchNotFound {
            name: "dev-tools".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("packbunch::bunch::not_found".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PackbunchError = io_err.into();
        assert!(matches!(err, PackbunchError::IoError { .. }));
    }

    test_error_contains!(
        test_install_failed_lists_packages,
        PackbunchError::InstallFailed {
            bunch: "web".to_string(),
            failed: vec!["nginx".to_string(), "BAD".to_string()],
        },
        "\"web\"",
        "nginx, BAD",
        "reverted"
    );

    test_error_contains!(
        test_uninstall_failed_lists_packages,
        PackbunchError::UninstallFailed {
            bunch: "web".to_string(),
            failed: vec!["nginx".to_string()],
        },
        "\"web\"",
        "nginx"
    );

    test_error_contains!(
        test_partial_failure_counts,
        PackbunchError::PartialFailure {
            action: "add".to_string(),
            failed: 2,
            total: 3,
        },
        "Couldn't add 2 of 3 package(s)"
    );

    test_error_contains!(
        test_privilege_required,
        PackbunchError::PrivilegeRequired {
            command: "install".to_string(),
        },
        "\"install\"",
        "sudo"
    );

    test_error_contains!(
        test_invalid_bunch_name_explains_rules,
        PackbunchError::InvalidBunchName {
            name: "a b".to_string(),
        },
        "\"a b\"",
        "letters, digits"
    );

    test_error_contains!(
        test_invalid_package_name_explains_rules,
        PackbunchError::InvalidPackageName {
            name: "Curl".to_string(),
        },
        "\"Curl\"",
        "lowercase letters"
    );
}
