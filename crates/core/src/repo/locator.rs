//! Upward search for the repository marker directory.

use super::error::{LocateError, LocateResult};
use std::path::{Path, PathBuf};

/// Name of the marker subdirectory that identifies a repository root.
pub const REPOSITORY_MARKER: &str = ".stack-kit";

/// Environment variable naming an explicit repository root.
///
/// When set, it replaces the upward directory search entirely; the named
/// directory must contain the marker subdirectory.
pub const REPOSITORY_PATH_ENV: &str = "STACK_KIT_REPOSITORY_PATH";

/// Locates the repository root governing `start_dir`.
///
/// Reads [`REPOSITORY_PATH_ENV`] from the process environment on every
/// call, then delegates to [`locate_with_override`]. The variable is never
/// cached, so changing it mid-process takes effect on the next call.
///
/// # Errors
///
/// Returns [`LocateError::InvalidOverridePath`] if the environment
/// variable is set but does not name a repository root.
pub fn locate(start_dir: &Path) -> LocateResult<Option<PathBuf>> {
    let override_dir = std::env::var_os(REPOSITORY_PATH_ENV).map(PathBuf::from);
    locate_with_override(start_dir, override_dir.as_deref())
}

/// Locates the repository root governing `start_dir` with an explicit
/// override, without consulting the process environment.
///
/// If `override_dir` is given, it is validated to contain the marker
/// subdirectory and returned as-is. Otherwise the search begins at
/// `start_dir` and moves to the parent directory until a marker is found
/// or the filesystem root is exhausted. Read-only; terminates in at most
/// path-depth steps.
///
/// # Arguments
///
/// * `start_dir` - Directory the search begins at (typically the cwd)
/// * `override_dir` - Explicit repository root, bypassing the search
///
/// # Returns
///
/// The repository root, or `None` when `start_dir` is not inside any
/// repository and no override is set.
///
/// # Errors
///
/// Returns [`LocateError::InvalidOverridePath`] if `override_dir` lacks
/// the marker subdirectory. The upward search itself cannot fail.
pub fn locate_with_override(
    start_dir: &Path,
    override_dir: Option<&Path>,
) -> LocateResult<Option<PathBuf>> {
    if let Some(dir) = override_dir {
        if !dir.join(REPOSITORY_MARKER).is_dir() {
            return Err(LocateError::InvalidOverridePath(dir.to_path_buf()));
        }
        return Ok(Some(dir.to_path_buf()));
    }

    let mut current = start_dir.to_path_buf();
    loop {
        if current.join(REPOSITORY_MARKER).is_dir() {
            return Ok(Some(current));
        }
        if !current.pop() {
            return Ok(None);
        }
    }
}
