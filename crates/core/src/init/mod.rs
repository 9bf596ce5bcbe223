//! Initialization module for creating repository marker directories.
//!
//! This module turns a directory into a stack-kit repository root by
//! generating the `.stack-kit/` marker with a default settings file, so
//! local overrides can be scoped to that directory tree.
//!
//! # Example
//!
//! ```no_run
//! use sk_core::init::{init_repository, InitOptions};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     target_dir: PathBuf::from("."),
//!     force: false,
//! };
//!
//! init_repository(options).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

// Re-export commonly used types for convenience
pub use error::{InitError, InitResult};
pub use generator::{init_repository, InitOptions};
pub use templates::get_template;
