//! Test fixtures for layering scenarios.

use sk_core::client::Client;
use sk_core::settings::global::GlobalSettingsStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A self-contained layering environment: an isolated global settings
/// file plus room for repositories, all inside one temp directory.
///
/// Keeps the TempDir alive for the test duration.
pub struct TestEnv {
    _temp_dir: TempDir,
    pub base: PathBuf,
    pub client: Client,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let store = GlobalSettingsStore::new(base.join("global/config.toml"));

        Self {
            _temp_dir: temp_dir,
            base,
            client: Client::with_global_store(store),
        }
    }

    /// Create `name` under the environment base and initialize it as a
    /// repository root. Returns the root path.
    pub async fn init_repository(&self, name: &str) -> PathBuf {
        let root = self.base.join(name);
        std::fs::create_dir_all(&root).expect("Failed to create repository dir");
        self.client
            .init_repository(&root, false)
            .await
            .expect("Failed to initialize repository");
        root
    }

    /// Create a plain (non-repository) directory under the base.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let dir = self.base.join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create dir");
        dir
    }
}

/// Path of the local settings file for a repository root.
#[allow(dead_code)]
pub fn local_settings_file(root: &Path) -> PathBuf {
    sk_core::settings::settings_path(root)
}
