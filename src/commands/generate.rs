//! Boilerplate generation for controllers, views and components

use crate::commands::templates;
use crate::context::Context;
use crate::error::{ConflictError, Result, UsageError};
use crate::utils::{controller_class, ensure_parent_dir, slug, write_new};
use std::fmt;
use std::path::PathBuf;

/// Generator target category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Controller,
    View,
    Component,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Controller, Kind::View, Kind::Component];

    /// Resolve a kind from its name or short alias
    pub fn parse(token: &str) -> Option<Kind> {
        match token {
            "controller" | "c" => Some(Kind::Controller),
            "view" | "v" => Some(Kind::View),
            "component" | "comp" => Some(Kind::Component),
            _ => None,
        }
    }

    /// Lowercase name, as typed on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Controller => "controller",
            Kind::View => "view",
            Kind::Component => "component",
        }
    }

    /// Capitalized name used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Controller => "Controller",
            Kind::View => "View",
            Kind::Component => "Component",
        }
    }

    /// Project-relative directory holding this kind of file
    pub fn dir(&self) -> &'static str {
        match self {
            Kind::Controller => "app/Controllers",
            Kind::View => "app/Views",
            Kind::Component => "app/Components",
        }
    }

    /// File name generated for `name`
    pub fn file_name(&self, name: &str) -> String {
        match self {
            Kind::Controller => format!("{}.js", controller_class(name)),
            Kind::View | Kind::Component => format!("{}.html", slug(name)),
        }
    }

    /// Project-relative path generated for `name`, always `/`-separated
    pub fn relative_path(&self, name: &str) -> String {
        format!("{}/{}", self.dir(), self.file_name(name))
    }

    /// Name shown in the "already exists" message
    fn display_name(&self, name: &str) -> String {
        match self {
            Kind::Controller => controller_class(name),
            Kind::View | Kind::Component => name.to_string(),
        }
    }

    /// File contents generated for `name`
    pub fn render(&self, name: &str) -> String {
        match self {
            Kind::Controller => templates::controller(name),
            Kind::View => templates::view(name),
            Kind::Component => templates::component(name),
        }
    }

    /// Comma-separated list of valid kinds
    pub fn available() -> String {
        Kind::ALL
            .iter()
            .map(Kind::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dispatch `generate <kind> <name>` from raw command-line tokens
pub fn generate_from_args(
    ctx: &Context,
    kind: Option<&str>,
    name: Option<&str>,
) -> Result<PathBuf> {
    let kind = match kind {
        Some(token) => Kind::parse(token).ok_or_else(|| UsageError::UnknownKind(token.to_string()))?,
        None => return Err(UsageError::MissingKind.into()),
    };

    generate(ctx, kind, name)
}

/// Create the file for `kind` named `name`, never overwriting.
///
/// Returns the project-relative path that was written.
pub fn generate(ctx: &Context, kind: Kind, name: Option<&str>) -> Result<PathBuf> {
    let reporter = ctx.reporter();
    let name = match name.filter(|n| !n.is_empty()) {
        Some(name) => name,
        None => return Err(UsageError::MissingName(kind.as_str()).into()),
    };

    let relative = kind.relative_path(name);
    let path = ctx.path(&relative);
    reporter.debug(format!("Target: {}", path.display()));

    let conflict = || ConflictError {
        label: kind.label(),
        name: kind.display_name(name),
    };

    if path.exists() {
        return Err(conflict().into());
    }

    ensure_parent_dir(&path)?;
    if !write_new(&path, &kind.render(name))? {
        return Err(conflict().into());
    }

    reporter.success(format!("Created {}: {}", kind, relative));
    Ok(PathBuf::from(relative))
}
