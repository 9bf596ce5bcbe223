//! Repository root discovery.
//!
//! A directory becomes a repository root by containing the `.stack-kit/`
//! marker subdirectory. This module locates the root governing a given
//! working directory, honoring the `STACK_KIT_REPOSITORY_PATH` override.

pub mod error;
pub mod locator;

// Re-export commonly used items for convenience
pub use error::{LocateError, LocateResult};
pub use locator::{locate, locate_with_override, REPOSITORY_MARKER, REPOSITORY_PATH_ENV};
