//! Common test utilities
#![allow(dead_code)]

use staco::{Context, Verbosity};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Staco</title>
</head>
<body>
    <div id="app"></div>
</body>
</html>
"#;

pub const BASE_PATH_JS: &str = r#"export function getBasePath() {
    const pathname = window.location.pathname;
    if (pathname.startsWith('/Staco')) {
        return '/Staco/';
    }
    return '/';
}
"#;

pub const README_MD: &str = "# Staco\n\nA tiny static framework.\n";

/// Create an empty temporary project
pub fn create_empty_project() -> TempDir {
    TempDir::new().unwrap()
}

/// Create a temporary project holding the stock skeleton files
pub fn create_test_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "index.html", INDEX_HTML);
    write(temp_dir.path(), "config/base-path.js", BASE_PATH_JS);
    write(temp_dir.path(), "README.md", README_MD);
    temp_dir
}

/// Write a project file, creating parent directories
pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

/// A silent context rooted at `root`
pub fn context_for(root: &Path) -> Context {
    Context::new()
        .with_root(root.to_path_buf())
        .with_verbosity(Verbosity::Silent)
}

/// Count every file and directory under `root`
pub fn entry_count(root: &Path) -> usize {
    let mut count = 0;
    for entry in fs::read_dir(root).unwrap() {
        let path = entry.unwrap().path();
        count += 1;
        if path.is_dir() {
            count += entry_count(&path);
        }
    }
    count
}
