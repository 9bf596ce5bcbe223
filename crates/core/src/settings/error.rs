//! Error types for settings persistence.
//!
//! This module defines all errors that can occur while reading or writing
//! the global and per-repository settings files.

use std::path::PathBuf;
use thiserror::Error;

/// Type alias for Result with SettingsError.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors that can occur during settings persistence.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to read a settings file from disk.
    #[error("Failed to read settings file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a settings file.
    #[error("Failed to write settings file at {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create a directory for a settings file.
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse a TOML settings document.
    ///
    /// Fatal only for the global file; a malformed local file degrades to
    /// "no local override" with a warning.
    #[error("Failed to parse TOML file at {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Failed to serialize settings to TOML.
    #[error("Failed to serialize settings: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// The platform reports no configuration directory and no override
    /// is set.
    #[error("Could not determine a configuration directory for this platform")]
    ConfigDirUnavailable,
}
