//! Persisted settings records for the global and per-repository layers.
//!
//! Both layers share the same TOML shape: a small key-value document with
//! the optional keys `active_project_name` and `active_stack_name`. The
//! global record guarantees a stack name; the local record leaves every
//! field optional so that an absent key defers to the global layer.

use serde::{Deserialize, Serialize};

/// Built-in fallback name for the active stack.
///
/// Used when the global settings file has never been written, and as the
/// stack name seeded into a freshly initialized repository.
pub const DEFAULT_STACK_NAME: &str = "default";

/// Machine-wide default settings, one record per user profile.
///
/// Persisted as TOML in the user's configuration directory. Created with
/// fallback values on first read and only ever overwritten, never deleted.
///
/// # Example
///
/// ```toml
/// # stack-kit/config.toml
/// active_stack_name = "default"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GlobalSettings {
    /// Default active project, used when no repository overrides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_project_name: Option<String>,

    /// Default active stack. Non-empty; falls back to
    /// [`DEFAULT_STACK_NAME`] when the key is missing from the file.
    pub active_stack_name: String,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            active_project_name: None,
            active_stack_name: DEFAULT_STACK_NAME.to_string(),
        }
    }
}

/// Per-repository settings, stored inside the repository marker directory.
///
/// Every field is optional: an absent field means "defer to the global
/// settings" for that field, so a repository may pin the stack while
/// leaving the project to the machine-wide default.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LocalSettings {
    /// Project override scoped to this repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_project_name: Option<String>,

    /// Stack override scoped to this repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_stack_name: Option<String>,
}

impl LocalSettings {
    /// True when no field overrides the global layer.
    pub fn is_empty(&self) -> bool {
        self.active_project_name.is_none() && self.active_stack_name.is_none()
    }
}
