//! file_delete: Remove a single file
//!
//! Directories are never removed, not even empty ones.

use std::fs;
use std::path::Path;

use super::errors::{ResourceError, Result};

/// Delete the file at `path`
///
/// Returns an empty string on success so every operation yields a payload.
pub fn file_delete(path: &Path) -> Result<String> {
    if path.is_dir() {
        tracing::debug!(path = %path.display(), "delete: path is a directory");
        return Err(ResourceError::IsADirectory);
    }
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "delete: no such file");
        return Err(ResourceError::FileNotExist);
    }

    fs::remove_file(path)?;

    tracing::debug!(path = %path.display(), "delete: removed");
    Ok(String::new())
}
