//! Failures while loading or drawing from the pool.

use std::{io, path::PathBuf};

/// A puzzle directory that could not be listed.
///
/// Only the root of the tree is fatal; unreadable subdirectories and files
/// are logged and skipped during loading.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("cannot list puzzle directory {}: {source}", path.display())]
pub struct DirectoryError {
    /// The directory that failed to list.
    pub path: PathBuf,
    /// The underlying I/O failure.
    pub source: io::Error,
}

/// A random draw from a pool that holds no puzzles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("puzzle pool is empty")]
pub struct EmptyPoolError;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_directory_error_reports_path_and_cause() {
        let err = DirectoryError {
            path: PathBuf::from("puzzles"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let message = err.to_string();
        assert!(message.starts_with("cannot list puzzle directory puzzles:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_empty_pool_error_message() {
        assert_eq!(EmptyPoolError.to_string(), "puzzle pool is empty");
    }
}
