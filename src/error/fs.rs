//! File system errors

use std::path::Path;

use super::PackbunchError;

/// Creates a file read error
pub fn read_failed(path: &Path, err: &std::io::Error) -> PackbunchError {
    PackbunchError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write error
pub fn write_failed(path: &Path, err: &std::io::Error) -> PackbunchError {
    PackbunchError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
