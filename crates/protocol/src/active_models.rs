//! Resolved active configuration and mutation scope.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The effective configuration observed by callers after layering.
///
/// Computed fresh on each resolution from the local and global settings
/// records; never persisted directly.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActiveConfig {
    /// Repository root whose local settings participated in resolution,
    /// if one was located.
    pub repository_root: Option<PathBuf>,

    /// Effective active project, if any layer names one.
    pub project_name: Option<String>,

    /// Effective active stack. Always present: the global layer
    /// guarantees a value.
    pub stack_name: String,
}

/// Which settings layer a mutation targets.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// The located repository's settings record.
    Local,
    /// The machine-wide settings record.
    Global,
}
