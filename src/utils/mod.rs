//! Small helpers shared by the commands
//!
//! Name derivation and filesystem access live here so the commands only
//! orchestrate.

pub mod fs;
pub mod names;

pub use fs::*;
pub use names::*;
