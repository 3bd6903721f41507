//! # Data Error Types
//!
//! Errors raised while reading or decoding input files.
//!
//! ## Error Flow
//! ```text
//! std::io::Error / serde_json::Error
//!       │
//!       ▼
//! DataError (this module) ← Adds the file path
//!       │
//!       ▼
//! AppError (in CLI) ← Printed to stderr
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Data loading errors.
///
/// Kept apart from `CoreError` so a caller can tell "the file is broken"
/// from "the checkout is invalid".
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be read.
    ///
    /// ## When This Occurs
    /// - File doesn't exist
    /// - Permission denied
    /// - Path is a directory
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not the expected JSON shape.
    ///
    /// ## When This Occurs
    /// - Empty or blank file
    /// - Malformed JSON
    /// - Checkout file is not an array of `{code, quantity}` objects
    /// - Product entry missing `price`, or a non-integer number
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DataError {
    /// Path of the file that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            DataError::Read { path, .. } | DataError::Parse { path, .. } => path,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DataError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        DataError::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for Results with DataError.
pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_message_names_path() {
        let err = DataError::read(
            "missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "Failed to read missing.json: no such file");
        assert_eq!(err.path(), std::path::Path::new("missing.json"));
    }
}
