//! Machine-wide settings store.

use super::error::{SettingsError, SettingsResult};
use super::replace_file_atomic;
use sk_protocol::settings_models::GlobalSettings;
use std::path::{Path, PathBuf};

/// Environment variable overriding the global settings file location.
pub const GLOBAL_CONFIG_ENV: &str = "STACK_KIT_GLOBAL_CONFIG";

/// Store for the machine-wide [`GlobalSettings`] record.
///
/// The store is bound to an explicit file path so tests can point it at a
/// temporary location; production callers use [`GlobalSettingsStore::default_path`].
/// Reads bootstrap the file with fallback values, so `read` always yields
/// a usable record. Writes replace the whole document atomically;
/// concurrent invocations from separate terminals follow
/// last-writer-wins.
#[derive(Debug, Clone)]
pub struct GlobalSettingsStore {
    path: PathBuf,
}

impl GlobalSettingsStore {
    /// Create a store bound to an explicit settings file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the default location for this machine.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ConfigDirUnavailable`] if the platform
    /// reports no configuration directory and no override is set.
    pub fn open_default() -> SettingsResult<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Default global settings file location.
    ///
    /// Resolution order:
    /// 1. `STACK_KIT_GLOBAL_CONFIG` environment variable
    /// 2. `<platform config dir>/stack-kit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        if let Some(path) = std::env::var_os(GLOBAL_CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        dirs::config_dir()
            .map(|dir| dir.join("stack-kit").join("config.toml"))
            .ok_or(SettingsError::ConfigDirUnavailable)
    }

    /// Path of the persisted settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the global settings record.
    ///
    /// If the file does not exist yet, it is created with fallback values
    /// (stack name `"default"`, no project) and those values are
    /// returned, so a first invocation on a fresh machine always
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML (there is no safe fallback once
    ///   machine-wide defaults cannot be established)
    /// - Bootstrapping the file fails
    pub async fn read(&self) -> SettingsResult<GlobalSettings> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                let defaults = GlobalSettings::default();
                self.write(&defaults).await?;
                return Ok(defaults);
            }
            Err(source) => {
                return Err(SettingsError::FileRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        toml::from_str(&content).map_err(|source| SettingsError::TomlParse {
            path: self.path.clone(),
            source,
        })
    }

    /// Atomically replace the global settings record.
    ///
    /// Parent directories are created as needed.
    pub async fn write(&self, settings: &GlobalSettings) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| SettingsError::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let content = toml::to_string(settings)?;
        replace_file_atomic(&self.path, &content)
    }
}
