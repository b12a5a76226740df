//! Package manager errors

use super::PackbunchError;

/// Creates an invalid package name error
pub fn invalid_name(name: impl Into<String>) -> PackbunchError {
    PackbunchError::InvalidPackageName { name: name.into() }
}

/// Creates a package manager failure for one package
pub fn manager_failed(
    action: impl Into<String>,
    package: impl Into<String>,
    reason: impl Into<String>,
) -> PackbunchError {
    PackbunchError::PackageManagerFailed {
        action: action.into(),
        package: package.into(),
        reason: reason.into(),
    }
}
