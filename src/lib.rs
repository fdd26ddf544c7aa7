//! Staco - project tooling for the Staco web skeleton
//!
//! Renames a freshly cloned skeleton and generates controllers, views and
//! components from a name.

// Public modules
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use context::{Context, Verbosity};
pub use error::{Result, StacoError};

/// Current version of Staco
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
