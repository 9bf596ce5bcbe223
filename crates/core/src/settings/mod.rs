//! Persisted settings stores.
//!
//! Two layers are persisted as small TOML documents: the machine-wide
//! global record and the per-repository local record inside the
//! `.stack-kit/` marker directory. Both are replaced atomically on write;
//! concurrent invocations follow last-writer-wins with no cross-process
//! locking.

pub mod error;
pub mod global;
pub mod local;

pub use error::{SettingsError, SettingsResult};
pub use global::GlobalSettingsStore;
pub use local::{read_local_settings, settings_path, write_local_settings};

use std::io::Write;
use std::path::Path;

/// Atomically replaces `path` with `content`.
///
/// Writes to a temporary file in the target's directory and renames it
/// over the destination, so readers never observe a partial document.
pub(crate) fn replace_file_atomic(path: &Path, content: &str) -> SettingsResult<()> {
    let dir = path.parent().ok_or_else(|| SettingsError::FileWrite {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no parent"),
    })?;

    let mut temp =
        tempfile::NamedTempFile::new_in(dir).map_err(|source| SettingsError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
    temp.write_all(content.as_bytes())
        .map_err(|source| SettingsError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
    temp.persist(path).map_err(|e| SettingsError::FileWrite {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}
