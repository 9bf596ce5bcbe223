//! Active-configuration resolution.
//!
//! The resolver merges the per-repository and machine-wide settings
//! layers into one [`ActiveConfig`], applying precedence per field:
//!
//! 1. The environment root override selects *which* repository's local
//!    settings are consulted (it never supplies a value directly)
//! 2. A present local settings field
//! 3. The global settings field
//! 4. The built-in fallback stack name (safety net, reachable only when
//!    the persisted global stack name is empty)
//!
//! Fields resolve independently: a repository may pin the stack while
//! deferring the project to the global layer.

pub mod error;

pub use error::{ResolveError, ResolveResult};

use crate::repo::locator::{locate_with_override, REPOSITORY_PATH_ENV};
use crate::settings::global::GlobalSettingsStore;
use crate::settings::local::{read_local_settings, write_local_settings};
use sk_protocol::active_models::ActiveConfig;
use sk_protocol::settings_models::{LocalSettings, DEFAULT_STACK_NAME};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Cache key: resolution depends on the starting directory and on the
/// value of the root override at call time.
type CacheKey = (PathBuf, Option<PathBuf>);

/// Merges local and global settings into the effective configuration.
///
/// Resolution is read-only; the only mutations go through the explicit
/// set operations, each of which drops the process-local cache. The
/// environment override variable is re-read on every resolution so a
/// changed override can never serve a stale root from the cache.
#[derive(Debug)]
pub struct Resolver {
    global: GlobalSettingsStore,
    cache: Mutex<HashMap<CacheKey, ActiveConfig>>,
}

impl Resolver {
    /// Create a resolver over the given global settings store.
    pub fn new(global: GlobalSettingsStore) -> Self {
        Self {
            global,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The global settings store this resolver reads and mutates.
    pub fn global_store(&self) -> &GlobalSettingsStore {
        &self.global
    }

    /// Drop every cached resolution.
    ///
    /// Called by every set operation; also the right thing after
    /// out-of-band changes to persisted state (e.g. repository
    /// initialization).
    pub fn invalidate(&self) {
        self.lock_cache().clear();
    }

    /// Resolve the active configuration for `cwd`.
    ///
    /// Reads [`REPOSITORY_PATH_ENV`] from the process environment on
    /// every call and delegates to [`Resolver::resolve_with_override`].
    pub async fn resolve(&self, cwd: &Path) -> ResolveResult<ActiveConfig> {
        let override_dir = std::env::var_os(REPOSITORY_PATH_ENV).map(PathBuf::from);
        self.resolve_with_override(cwd, override_dir.as_deref()).await
    }

    /// Resolve the active configuration with an explicit root override,
    /// without consulting the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError` if:
    /// - The override names a directory without the repository marker
    /// - The located repository's settings file cannot be read
    /// - The global settings cannot be read or bootstrapped
    pub async fn resolve_with_override(
        &self,
        cwd: &Path,
        override_dir: Option<&Path>,
    ) -> ResolveResult<ActiveConfig> {
        let key: CacheKey = (cwd.to_path_buf(), override_dir.map(Path::to_path_buf));
        if let Some(hit) = self.lock_cache().get(&key) {
            return Ok(hit.clone());
        }

        let root = locate_with_override(cwd, override_dir)?;
        let local = match &root {
            Some(root) => read_local_settings(root).await?,
            None => LocalSettings::default(),
        };
        let global = self.global.read().await?;

        let stack_name = local
            .active_stack_name
            .filter(|name| !name.is_empty())
            .or_else(|| Some(global.active_stack_name).filter(|name| !name.is_empty()))
            .unwrap_or_else(|| DEFAULT_STACK_NAME.to_string());
        let project_name = local.active_project_name.or(global.active_project_name);

        let resolved = ActiveConfig {
            repository_root: root,
            project_name,
            stack_name,
        };
        self.lock_cache().insert(key, resolved.clone());

        Ok(resolved)
    }

    /// Set or clear the repository-scoped active stack.
    ///
    /// `None` removes the local override so the repository defers to the
    /// global layer again.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NoRepositoryRoot`] if no repository is
    /// located from `cwd`; the caller must `init` one first or fall
    /// back to the global scope.
    pub async fn set_local_active_stack(&self, cwd: &Path, name: Option<&str>) -> ResolveResult<()> {
        let override_dir = std::env::var_os(REPOSITORY_PATH_ENV).map(PathBuf::from);
        self.set_local_active_stack_with_override(cwd, override_dir.as_deref(), name)
            .await
    }

    /// Explicit-override variant of [`Resolver::set_local_active_stack`].
    pub async fn set_local_active_stack_with_override(
        &self,
        cwd: &Path,
        override_dir: Option<&Path>,
        name: Option<&str>,
    ) -> ResolveResult<()> {
        if matches!(name, Some(n) if n.is_empty()) {
            return Err(ResolveError::EmptyStackName);
        }

        let root = self.require_root(cwd, override_dir)?;
        let mut settings = read_local_settings(&root).await?;
        settings.active_stack_name = name.map(str::to_string);
        write_local_settings(&root, &settings).await?;
        self.invalidate();

        Ok(())
    }

    /// Set or clear the repository-scoped active project.
    pub async fn set_local_active_project(
        &self,
        cwd: &Path,
        name: Option<&str>,
    ) -> ResolveResult<()> {
        let override_dir = std::env::var_os(REPOSITORY_PATH_ENV).map(PathBuf::from);
        self.set_local_active_project_with_override(cwd, override_dir.as_deref(), name)
            .await
    }

    /// Explicit-override variant of [`Resolver::set_local_active_project`].
    pub async fn set_local_active_project_with_override(
        &self,
        cwd: &Path,
        override_dir: Option<&Path>,
        name: Option<&str>,
    ) -> ResolveResult<()> {
        let root = self.require_root(cwd, override_dir)?;
        let mut settings = read_local_settings(&root).await?;
        settings.active_project_name = name.map(str::to_string);
        write_local_settings(&root, &settings).await?;
        self.invalidate();

        Ok(())
    }

    /// Set the machine-wide active stack. Always available, no
    /// repository required.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::EmptyStackName`] for the empty string:
    /// the global stack name is invariantly non-empty.
    pub async fn set_global_active_stack(&self, name: &str) -> ResolveResult<()> {
        if name.is_empty() {
            return Err(ResolveError::EmptyStackName);
        }

        let mut settings = self.global.read().await?;
        settings.active_stack_name = name.to_string();
        self.global.write(&settings).await?;
        self.invalidate();

        Ok(())
    }

    /// Set or clear the machine-wide default project.
    pub async fn set_global_active_project(&self, name: Option<&str>) -> ResolveResult<()> {
        let mut settings = self.global.read().await?;
        settings.active_project_name = name.map(str::to_string);
        self.global.write(&settings).await?;
        self.invalidate();

        Ok(())
    }

    fn require_root(&self, cwd: &Path, override_dir: Option<&Path>) -> ResolveResult<PathBuf> {
        locate_with_override(cwd, override_dir)?
            .ok_or_else(|| ResolveError::NoRepositoryRoot(cwd.to_path_buf()))
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, HashMap<CacheKey, ActiveConfig>> {
        // A poisoned cache only ever holds resolved values; keep using it.
        self.cache
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
