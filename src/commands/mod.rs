//! Command handlers
//!
//! Each handler takes the execution context explicitly, performs its file
//! edits and reports progress through the context's [`Reporter`](crate::ui::Reporter).

pub mod generate;
pub mod rename;
pub mod templates;

pub use generate::*;
pub use rename::*;
