//! Error types for active-configuration resolution.

use crate::repo::error::LocateError;
use crate::settings::error::SettingsError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur during resolution or layered mutation.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Repository root discovery failed (invalid override path).
    #[error(transparent)]
    Locate(#[from] LocateError),

    /// A settings layer could not be read or written.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// A local-scope mutation was requested but no repository root is
    /// located from the working directory. Recoverable: initialize a
    /// repository first or target the global scope instead.
    #[error("No stack-kit repository found from {0:?}. Run `stack init` first or use --global.")]
    NoRepositoryRoot(PathBuf),

    /// The active stack name must be non-empty.
    #[error("The active stack name cannot be empty")]
    EmptyStackName,
}
