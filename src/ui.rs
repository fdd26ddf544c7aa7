//! Colored status output

use crate::context::Verbosity;
use colored::Colorize;
use std::fmt::Display;

/// Prints status lines according to a verbosity level
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Reporter { verbosity }
    }

    fn shows(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }

    /// Section heading, e.g. "Renaming project to 'x'..."
    pub fn heading(&self, msg: impl Display) {
        if self.shows(Verbosity::Normal) {
            println!("{}", msg.to_string().cyan());
        }
    }

    /// Plain informational line
    pub fn info(&self, msg: impl Display) {
        if self.shows(Verbosity::Normal) {
            println!("{}", msg);
        }
    }

    /// Completed step
    pub fn success(&self, msg: impl Display) {
        if self.shows(Verbosity::Normal) {
            println!("{}", format!("✓ {}", msg).green());
        }
    }

    /// Step skipped; processing continues
    pub fn warn(&self, msg: impl Display) {
        if self.shows(Verbosity::Quiet) {
            println!("{}", format!("! {}", msg).yellow());
        }
    }

    /// Command could not do its work
    pub fn error(&self, msg: impl Display) {
        if self.shows(Verbosity::Quiet) {
            eprintln!("{}", format!("Error: {}", msg).red());
        }
    }

    /// Extra detail, only with --verbose
    pub fn debug(&self, msg: impl Display) {
        if self.shows(Verbosity::Verbose) {
            println!("{}", msg.to_string().bright_black());
        }
    }
}

/// Turn colored output off for the rest of the process
pub fn disable_color() {
    colored::control::set_override(false);
}
