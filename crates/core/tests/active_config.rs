//! Integration tests for the client facade.
//!
//! These tests exercise the full layering path: marker discovery,
//! local and global persistence, and the merged view the facade hands
//! to consumers.

mod common;

use common::fixtures::TestEnv;
use sk_core::init::InitError;
use sk_core::resolver::ResolveError;
use sk_protocol::{Scope, DEFAULT_STACK_NAME};

#[tokio::test]
async fn test_fresh_environment_resolves_builtin_defaults() {
    let env = TestEnv::new();
    let cwd = env.create_dir("anywhere");

    let config = env
        .client
        .active_config(&cwd)
        .await
        .expect("Resolution should succeed on a fresh machine");

    assert_eq!(config.stack_name, DEFAULT_STACK_NAME);
    assert_eq!(config.project_name, None);
    assert_eq!(config.repository_root, None);
}

#[tokio::test]
async fn test_global_set_is_visible_everywhere() {
    let env = TestEnv::new();
    let cwd = env.create_dir("anywhere");

    env.client
        .set_active_stack(&cwd, "shared-gpu", Scope::Global)
        .await
        .expect("Global set should succeed");

    let elsewhere = env.create_dir("somewhere/else/entirely");
    let stack = env
        .client
        .active_stack_name(&elsewhere)
        .await
        .expect("Resolution should succeed");
    assert_eq!(stack, "shared-gpu");
}

#[tokio::test]
async fn test_local_set_scopes_to_repository_subtree() {
    let env = TestEnv::new();
    env.client
        .set_active_stack(&env.base, "g", Scope::Global)
        .await
        .expect("Global set should succeed");

    let root = env.init_repository("project-a").await;
    let nested = root.join("pipelines/deep");
    std::fs::create_dir_all(&nested).expect("Failed to create nested dirs");

    env.client
        .set_active_stack(&root, "l", Scope::Local)
        .await
        .expect("Local set should succeed");

    let inside = env
        .client
        .active_stack_name(&nested)
        .await
        .expect("Resolution should succeed");
    assert_eq!(inside, "l", "Override applies at arbitrary depth inside the root");

    let outside_dir = env.create_dir("not-a-project");
    let outside = env
        .client
        .active_stack_name(&outside_dir)
        .await
        .expect("Resolution should succeed");
    assert_eq!(outside, "g", "Override must not leak outside the root");
}

#[tokio::test]
async fn test_stack_override_leaves_project_untouched() {
    let env = TestEnv::new();
    let root = env.init_repository("project-b").await;

    env.client
        .set_active_project(&root, "recsys", Scope::Global)
        .await
        .expect("Global project set should succeed");
    env.client
        .set_active_stack(&root, "local-stack", Scope::Local)
        .await
        .expect("Local stack set should succeed");

    let config = env
        .client
        .active_config(&root)
        .await
        .expect("Resolution should succeed");

    assert_eq!(config.stack_name, "local-stack");
    assert_eq!(
        config.project_name.as_deref(),
        Some("recsys"),
        "Project must keep reflecting the global value"
    );
}

#[tokio::test]
async fn test_local_set_without_repository_is_recoverable() {
    let env = TestEnv::new();
    let cwd = env.create_dir("no-repo-here");

    let result = env
        .client
        .set_active_stack(&cwd, "x", Scope::Local)
        .await;
    assert!(matches!(result, Err(ResolveError::NoRepositoryRoot(_))));

    // The documented recovery: fall back to global scope.
    env.client
        .set_active_stack(&cwd, "x", Scope::Global)
        .await
        .expect("Global fallback should succeed");
    assert_eq!(
        env.client
            .active_stack_name(&cwd)
            .await
            .expect("Resolution should succeed"),
        "x"
    );
}

#[tokio::test]
async fn test_reinit_requires_force() {
    let env = TestEnv::new();
    let root = env.init_repository("project-c").await;

    env.client
        .set_active_stack(&root, "precious", Scope::Local)
        .await
        .expect("Local set should succeed");

    let result = env.client.init_repository(&root, false).await;
    assert!(matches!(result, Err(InitError::AlreadyInitialized(_))));
    assert_eq!(
        env.client
            .active_stack_name(&root)
            .await
            .expect("Resolution should succeed"),
        "precious",
        "A refused reinit must not touch existing settings"
    );

    env.client
        .init_repository(&root, true)
        .await
        .expect("Forced reinit should succeed");
    assert_eq!(
        env.client
            .active_stack_name(&root)
            .await
            .expect("Resolution should succeed"),
        DEFAULT_STACK_NAME,
        "Forced reinit restores the default settings file"
    );
}

#[tokio::test]
async fn test_malformed_local_settings_degrade_to_global() {
    let env = TestEnv::new();
    env.client
        .set_active_stack(&env.base, "g", Scope::Global)
        .await
        .expect("Global set should succeed");

    let root = env.init_repository("project-d").await;
    std::fs::write(
        common::fixtures::local_settings_file(&root),
        "active_stack_name = [definitely not toml",
    )
    .expect("Failed to corrupt settings");

    let stack = env
        .client
        .active_stack_name(&root)
        .await
        .expect("A broken local file must not be fatal");
    assert_eq!(stack, "g", "Malformed local settings read as no override");
}

#[tokio::test]
async fn test_clearing_local_override_restores_global_view() {
    let env = TestEnv::new();
    env.client
        .set_active_stack(&env.base, "g", Scope::Global)
        .await
        .expect("Global set should succeed");

    let root = env.init_repository("project-e").await;
    env.client
        .set_active_stack(&root, "l", Scope::Local)
        .await
        .expect("Local set should succeed");
    env.client
        .clear_active_stack(&root)
        .await
        .expect("Clear should succeed");

    assert_eq!(
        env.client
            .active_stack_name(&root)
            .await
            .expect("Resolution should succeed"),
        "g"
    );
}

#[tokio::test]
async fn test_project_clear_per_scope() {
    let env = TestEnv::new();
    let root = env.init_repository("project-f").await;

    env.client
        .set_active_project(&root, "global-proj", Scope::Global)
        .await
        .expect("Global set should succeed");
    env.client
        .set_active_project(&root, "local-proj", Scope::Local)
        .await
        .expect("Local set should succeed");

    env.client
        .clear_active_project(&root, Scope::Local)
        .await
        .expect("Local clear should succeed");
    assert_eq!(
        env.client
            .active_project_name(&root)
            .await
            .expect("Resolution should succeed")
            .as_deref(),
        Some("global-proj"),
        "Clearing the local layer should reveal the global value"
    );

    env.client
        .clear_active_project(&root, Scope::Global)
        .await
        .expect("Global clear should succeed");
    assert_eq!(
        env.client
            .active_project_name(&root)
            .await
            .expect("Resolution should succeed"),
        None
    );
}

#[tokio::test]
async fn test_explicit_override_routes_resolution() {
    let env = TestEnv::new();
    let root = env.init_repository("project-g").await;
    env.client
        .set_active_stack(&root, "pinned", Scope::Local)
        .await
        .expect("Local set should succeed");

    let unrelated = env.create_dir("unrelated");
    let config = env
        .client
        .resolver()
        .resolve_with_override(&unrelated, Some(&root))
        .await
        .expect("Override resolution should succeed");

    assert_eq!(config.stack_name, "pinned");
    assert_eq!(config.repository_root.as_deref(), Some(root.as_path()));
}
