//! Client facade over the resolver.
//!
//! The single entry point other collaborators use to observe or change
//! the active configuration. CLI commands and the stack registry call
//! this; neither ever touches the persisted files directly, and neither
//! needs to know which layer a value came from.

use crate::init::{self, InitOptions, InitResult};
use crate::resolver::{ResolveResult, Resolver};
use crate::settings::global::GlobalSettingsStore;
use crate::settings::SettingsResult;
use sk_protocol::active_models::{ActiveConfig, Scope};
use std::path::Path;

/// Facade hiding the layering behind simple get/set operations.
///
/// Scope selection on the setters decides whether the repository-local
/// or the machine-wide layer changes; reads always return the merged
/// view for the given working directory.
#[derive(Debug)]
pub struct Client {
    resolver: Resolver,
}

impl Client {
    /// Create a client over the default global settings location.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if no global settings path can be
    /// determined for this platform.
    pub fn new() -> SettingsResult<Self> {
        Ok(Self::with_global_store(GlobalSettingsStore::open_default()?))
    }

    /// Create a client over an explicit global settings store.
    pub fn with_global_store(store: GlobalSettingsStore) -> Self {
        Self {
            resolver: Resolver::new(store),
        }
    }

    /// The underlying resolver, for callers that need explicit-override
    /// resolution.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// The merged active configuration as seen from `cwd`.
    pub async fn active_config(&self, cwd: &Path) -> ResolveResult<ActiveConfig> {
        self.resolver.resolve(cwd).await
    }

    /// Name of the active stack as seen from `cwd`.
    pub async fn active_stack_name(&self, cwd: &Path) -> ResolveResult<String> {
        Ok(self.resolver.resolve(cwd).await?.stack_name)
    }

    /// Name of the active project as seen from `cwd`, if any layer sets
    /// one.
    pub async fn active_project_name(&self, cwd: &Path) -> ResolveResult<Option<String>> {
        Ok(self.resolver.resolve(cwd).await?.project_name)
    }

    /// Set the active stack in the chosen scope.
    pub async fn set_active_stack(&self, cwd: &Path, name: &str, scope: Scope) -> ResolveResult<()> {
        match scope {
            Scope::Local => self.resolver.set_local_active_stack(cwd, Some(name)).await,
            Scope::Global => self.resolver.set_global_active_stack(name).await,
        }
    }

    /// Remove the repository-local stack override, deferring to the
    /// global layer. The global stack always has a value and cannot be
    /// cleared.
    pub async fn clear_active_stack(&self, cwd: &Path) -> ResolveResult<()> {
        self.resolver.set_local_active_stack(cwd, None).await
    }

    /// Set the active project in the chosen scope.
    pub async fn set_active_project(
        &self,
        cwd: &Path,
        name: &str,
        scope: Scope,
    ) -> ResolveResult<()> {
        match scope {
            Scope::Local => {
                self.resolver
                    .set_local_active_project(cwd, Some(name))
                    .await
            }
            Scope::Global => self.resolver.set_global_active_project(Some(name)).await,
        }
    }

    /// Clear the active project in the chosen scope.
    pub async fn clear_active_project(&self, cwd: &Path, scope: Scope) -> ResolveResult<()> {
        match scope {
            Scope::Local => self.resolver.set_local_active_project(cwd, None).await,
            Scope::Global => self.resolver.set_global_active_project(None).await,
        }
    }

    /// Initialize `dir` as a repository root.
    ///
    /// Drops cached resolutions afterwards: directories previously
    /// resolving to no root (or an outer root) may now resolve to the
    /// new one.
    pub async fn init_repository(&self, dir: &Path, force: bool) -> InitResult<()> {
        init::init_repository(InitOptions {
            target_dir: dir.to_path_buf(),
            force,
        })
        .await?;
        self.resolver.invalidate();

        Ok(())
    }
}
