//! Per-repository settings store.

use super::error::{SettingsError, SettingsResult};
use super::replace_file_atomic;
use crate::repo::REPOSITORY_MARKER;
use sk_protocol::settings_models::LocalSettings;
use std::path::{Path, PathBuf};

/// Name of the settings file inside the marker directory.
pub const SETTINGS_FILE: &str = "config.toml";

/// Path of the settings file for a repository root.
pub fn settings_path(root: &Path) -> PathBuf {
    root.join(REPOSITORY_MARKER).join(SETTINGS_FILE)
}

/// Read the local settings record for a repository root.
///
/// A missing file yields an all-absent record, so a bare marker directory
/// simply defers everything to the global layer. A file that exists but
/// cannot be parsed is treated the same way, except a warning is emitted
/// naming the offending file: a broken local override must not make
/// every invocation inside the repository fatal.
///
/// # Errors
///
/// Returns [`SettingsError::FileRead`] only for I/O failures other than
/// the file being absent.
pub async fn read_local_settings(root: &Path) -> SettingsResult<LocalSettings> {
    let path = settings_path(root);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Ok(LocalSettings::default());
        }
        Err(source) => return Err(SettingsError::FileRead { path, source }),
    };

    match toml::from_str(&content) {
        Ok(settings) => Ok(settings),
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                %error,
                "Ignoring malformed repository settings; falling back to global defaults"
            );
            Ok(LocalSettings::default())
        }
    }
}

/// Atomically replace the local settings record for a repository root.
///
/// The marker directory must already exist (created by `init`); writing
/// does not implicitly initialize a repository.
pub async fn write_local_settings(root: &Path, settings: &LocalSettings) -> SettingsResult<()> {
    let path = settings_path(root);
    let content = toml::to_string(settings)?;
    replace_file_atomic(&path, &content)
}
