//! Project renaming
//!
//! Rewrites a handful of known literals in `index.html`,
//! `config/base-path.js` and `README.md`. Matching is deliberately narrow:
//! a file that no longer carries the stock literal is left alone.

use crate::context::Context;
use crate::error::{Result, StacoError, UsageError};
use crate::utils::{read_file, write_file};
use regex::{NoExpand, Regex};
use std::io;
use std::path::Path;
use std::sync::OnceLock;

/// Name the skeleton ships with
pub const DEFAULT_NAME: &str = "Staco";

pub const INDEX_HTML: &str = "index.html";
pub const BASE_PATH_JS: &str = "config/base-path.js";
pub const README_MD: &str = "README.md";

const BASE_PATH_RETURN: &str = "return '/Staco/';";
const BASE_PATH_PREFIX_CHECK: &str = "pathname.startsWith('/Staco')";
const README_HEADING: &str = "# Staco";

/// What happened to one file during a rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The file was rewritten
    Updated,
    /// The file does not exist
    Missing,
    /// The file exists but does not hold the expected literal
    Skipped,
    /// The file is not valid UTF-8 text
    Unreadable,
}

/// Per-file result of a rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameReport {
    pub index_html: StepOutcome,
    pub base_path: StepOutcome,
    pub readme: StepOutcome,
}

/// Rename the project to `new_name`.
///
/// The three files are handled independently; a missing or customized file
/// produces a warning and the remaining files are still processed.
pub fn rename_project(ctx: &Context, new_name: Option<&str>) -> Result<RenameReport> {
    let reporter = ctx.reporter();
    let new_name = match new_name.filter(|n| !n.is_empty()) {
        Some(name) => name,
        None => return Err(UsageError::MissingProjectName.into()),
    };

    reporter.heading(format!("Renaming project to '{}'...", new_name));

    let index_html = rewrite(&ctx.path(INDEX_HTML), |c| rewrite_title(c, new_name))?;
    match index_html {
        StepOutcome::Updated => reporter.success("Updated index.html title"),
        StepOutcome::Missing => reporter.warn("index.html not found"),
        StepOutcome::Skipped => reporter.warn("index.html has no <title> element. Skipping."),
        StepOutcome::Unreadable => reporter.warn("index.html is not valid UTF-8. Skipping."),
    }

    let base_path = rewrite(&ctx.path(BASE_PATH_JS), |c| rewrite_base_path(c, new_name))?;
    match base_path {
        StepOutcome::Updated => reporter.success("Updated config/base-path.js"),
        StepOutcome::Missing => reporter.warn("config/base-path.js not found"),
        StepOutcome::Skipped => reporter.warn(format!(
            "config/base-path.js does not contain standard '/{}/' string. Skipping.",
            DEFAULT_NAME
        )),
        StepOutcome::Unreadable => reporter.warn("config/base-path.js is not valid UTF-8. Skipping."),
    }

    let readme = rewrite(&ctx.path(README_MD), |c| rewrite_readme(c, new_name))?;
    match readme {
        StepOutcome::Updated => reporter.success("Updated README.md title"),
        StepOutcome::Missing => reporter.warn("README.md not found"),
        StepOutcome::Skipped => reporter.warn(format!(
            "README.md does not start with '{}'. Skipping.",
            README_HEADING
        )),
        StepOutcome::Unreadable => reporter.warn("README.md is not valid UTF-8. Skipping."),
    }

    reporter.info("");
    reporter.success(format!("Success! Project renamed to '{}'.", new_name));

    Ok(RenameReport {
        index_html,
        base_path,
        readme,
    })
}

/// Apply `transform` to the file at `path`, writing only when it yields new content
fn rewrite<F>(path: &Path, transform: F) -> Result<StepOutcome>
where
    F: FnOnce(&str) -> Option<String>,
{
    if !path.is_file() {
        return Ok(StepOutcome::Missing);
    }

    let content = match read_file(path) {
        Ok(content) => content,
        Err(StacoError::File { error, .. }) if error.kind() == io::ErrorKind::InvalidData => {
            return Ok(StepOutcome::Unreadable);
        }
        Err(e) => return Err(e),
    };
    match transform(&content) {
        Some(updated) => {
            write_file(path, &updated)?;
            Ok(StepOutcome::Updated)
        }
        None => Ok(StepOutcome::Skipped),
    }
}

fn title_regex() -> &'static Regex {
    static TITLE: OnceLock<Regex> = OnceLock::new();
    TITLE.get_or_init(|| Regex::new(r"<title>.*?</title>").expect("title pattern is valid"))
}

/// Replace the first `<title>...</title>` on a single line
pub fn rewrite_title(content: &str, new_name: &str) -> Option<String> {
    let re = title_regex();
    if !re.is_match(content) {
        return None;
    }

    let replacement = format!("<title>{}</title>", new_name);
    Some(re.replacen(content, 1, NoExpand(&replacement)).into_owned())
}

/// Swap the stock base path literals, gated on `return '/Staco/';`
pub fn rewrite_base_path(content: &str, new_name: &str) -> Option<String> {
    if !content.contains(BASE_PATH_RETURN) {
        return None;
    }

    let updated = content.replacen(BASE_PATH_RETURN, &format!("return '/{}/';", new_name), 1);
    let updated = updated.replacen(
        BASE_PATH_PREFIX_CHECK,
        &format!("pathname.startsWith('/{}')", new_name),
        1,
    );
    Some(updated)
}

/// Replace a leading `# Staco` heading
pub fn rewrite_readme(content: &str, new_name: &str) -> Option<String> {
    content
        .strip_prefix(README_HEADING)
        .map(|rest| format!("# {}{}", new_name, rest))
}
