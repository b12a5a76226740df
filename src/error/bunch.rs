//! Bunch-related errors

use super::PackbunchError;

/// Creates a bunch not found error
pub fn not_found(name: impl Into<String>) -> PackbunchError {
    PackbunchError::BunchNotFound { name: name.into() }
}

/// Creates a bunch already exists error
pub fn already_exists(name: impl Into<String>) -> PackbunchError {
    PackbunchError::BunchAlreadyExists { name: name.into() }
}

/// Creates an invalid bunch name error
pub fn invalid_name(name: impl Into<String>) -> PackbunchError {
    PackbunchError::InvalidBunchName { name: name.into() }
}

/// Creates a duplicate package error
pub fn duplicate_package(bunch: impl Into<String>, package: impl Into<String>) -> PackbunchError {
    PackbunchError::DuplicatePackage {
        bunch: bunch.into(),
        package: package.into(),
    }
}

/// Creates a package not in bunch error
pub fn package_not_found(bunch: impl Into<String>, package: impl Into<String>) -> PackbunchError {
    PackbunchError::PackageNotInBunch {
        bunch: bunch.into(),
        package: package.into(),
    }
}
