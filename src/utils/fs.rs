//! Filesystem access with path-carrying errors

use crate::error::{Result, StacoError};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Create every missing ancestor of `path`. No-op when the parent exists.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => {
            fs::create_dir_all(dir).map_err(|e| StacoError::file(dir, e))
        }
        _ => Ok(()),
    }
}

/// Read a whole file as UTF-8
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| StacoError::file(path, e))
}

/// Replace the contents of an existing file
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| StacoError::file(path, e))
}

/// Create `path` and write `contents`, refusing to touch an existing file.
///
/// Returns `Ok(false)` without writing when the file is already present.
pub fn write_new(path: &Path, contents: &str) -> Result<bool> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(StacoError::file(path, e)),
    };

    file.write_all(contents.as_bytes())
        .map_err(|e| StacoError::file(path, e))?;

    Ok(true)
}
