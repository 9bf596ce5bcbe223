//! Marker directory and settings file generation for repository
//! initialization.

use super::error::{InitError, InitResult};
use super::templates::get_template;
use crate::repo::REPOSITORY_MARKER;
use crate::settings::local::SETTINGS_FILE;
use std::fs;
use std::path::PathBuf;

/// Options for initializing a repository root.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory that becomes the repository root.
    pub target_dir: PathBuf,

    /// Reinitialize even if the marker directory already exists.
    pub force: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
        }
    }
}

/// Turn `target_dir` into a repository root.
///
/// This function creates the following structure:
/// ```text
/// <target_dir>/
/// └── .stack-kit/
///     └── config.toml
/// ```
///
/// The generated settings file names the default stack and leaves the
/// project unset, so a fresh repository behaves exactly like the global
/// defaults until something is overridden.
///
/// # Arguments
/// * `options` - Configuration for the initialization process
///
/// # Returns
/// `Ok(())` if successful, or an `InitError` if:
/// - The marker directory already exists (without force flag)
/// - The settings template cannot be found
/// - File system operations fail
///
/// # Example
/// ```no_run
/// use sk_core::init::{init_repository, InitOptions};
/// use std::path::PathBuf;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// init_repository(InitOptions {
///     target_dir: PathBuf::from("."),
///     force: false,
/// })
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_repository(options: InitOptions) -> InitResult<()> {
    let marker_dir = options.target_dir.join(REPOSITORY_MARKER);

    if marker_dir.exists() && !options.force {
        return Err(InitError::AlreadyInitialized(options.target_dir));
    }

    fs::create_dir_all(&marker_dir).map_err(|source| InitError::DirectoryCreate {
        path: marker_dir.clone(),
        source,
    })?;

    let content = get_template(SETTINGS_FILE)
        .ok_or_else(|| InitError::TemplateNotFound(SETTINGS_FILE.to_string()))?;

    let settings_file = marker_dir.join(SETTINGS_FILE);
    fs::write(&settings_file, content).map_err(|source| InitError::FileWrite {
        path: settings_file,
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_init_creates_marker_and_settings() {
        let dir = tempdir().expect("Failed to create temp dir");
        let options = InitOptions {
            target_dir: dir.path().to_path_buf(),
            force: false,
        };

        let result = init_repository(options).await;
        assert!(result.is_ok(), "Failed: {:?}", result.err());

        let marker_dir = dir.path().join(REPOSITORY_MARKER);
        assert!(marker_dir.exists(), ".stack-kit directory should exist");

        let settings = std::fs::read_to_string(marker_dir.join(SETTINGS_FILE))
            .expect("settings file should exist");
        assert!(
            settings.contains("active_stack_name = \"default\""),
            "Fresh repository should name the default stack"
        );
    }

    #[tokio::test]
    async fn test_init_twice_without_force_fails_and_preserves_settings() {
        let dir = tempdir().expect("Failed to create temp dir");
        let options = InitOptions {
            target_dir: dir.path().to_path_buf(),
            force: false,
        };

        init_repository(options.clone())
            .await
            .expect("First init should succeed");

        // Simulate local edits between the two init calls.
        let settings_file = dir.path().join(REPOSITORY_MARKER).join(SETTINGS_FILE);
        std::fs::write(&settings_file, "active_stack_name = \"edited\"\n")
            .expect("Failed to edit settings");

        let result = init_repository(options).await;
        assert!(
            matches!(result, Err(InitError::AlreadyInitialized(_))),
            "Second init should report AlreadyInitialized"
        );

        let settings = std::fs::read_to_string(&settings_file).expect("Failed to read settings");
        assert!(
            settings.contains("edited"),
            "Failed reinit must leave the first init's settings untouched"
        );
    }

    #[tokio::test]
    async fn test_init_with_force_rewrites_settings() {
        let dir = tempdir().expect("Failed to create temp dir");

        init_repository(InitOptions {
            target_dir: dir.path().to_path_buf(),
            force: false,
        })
        .await
        .expect("First init should succeed");

        let settings_file = dir.path().join(REPOSITORY_MARKER).join(SETTINGS_FILE);
        std::fs::write(&settings_file, "active_stack_name = \"edited\"\n")
            .expect("Failed to edit settings");

        init_repository(InitOptions {
            target_dir: dir.path().to_path_buf(),
            force: true,
        })
        .await
        .expect("Forced init should succeed");

        let settings = std::fs::read_to_string(&settings_file).expect("Failed to read settings");
        assert!(
            settings.contains("active_stack_name = \"default\""),
            "Forced init should restore the default settings file"
        );
    }

    #[test]
    fn test_default_init_options() {
        let options = InitOptions::default();
        assert!(!options.force, "Default force should be false");
        assert!(
            options.target_dir.is_absolute() || options.target_dir == PathBuf::from("."),
            "Default target_dir should be current directory"
        );
    }
}
