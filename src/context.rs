//! Execution context shared by every command
//!
//! The context carries the project root explicitly so commands never look
//! at the process working directory on their own.

use crate::ui::Reporter;
use std::env;
use std::path::{Path, PathBuf};

/// State needed while a command runs
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory under which all project files are read and written
    pub root: PathBuf,

    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Context {
    /// Create a context rooted at the current working directory
    pub fn new() -> Self {
        Context {
            root: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            verbosity: Verbosity::Normal,
        }
    }

    /// Use a specific project root
    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = root;
        self
    }

    /// Set the verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Absolute path of a project-relative file
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Status printer for this context's verbosity
    pub fn reporter(&self) -> Reporter {
        Reporter::new(self.verbosity)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
