//! Error types for repository root discovery.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for locate operations.
pub type LocateResult<T> = Result<T, LocateError>;

/// Errors that can occur while locating a repository root.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The override environment variable names a directory that does not
    /// contain the `.stack-kit` marker (or does not exist at all).
    #[error(
        "STACK_KIT_REPOSITORY_PATH points to {0:?}, which is not a stack-kit repository \
         (missing .stack-kit directory)"
    )]
    InvalidOverridePath(PathBuf),
}
