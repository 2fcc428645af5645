//! file_read: Read entire file into memory
//!
//! Reads file as UTF-8 string. Missing paths and directories are reported
//! as resource errors, never as raw I/O failures.

use std::fs;
use std::path::Path;

use super::errors::{ResourceError, Result};

/// Read entire file into a UTF-8 string
///
/// # Arguments
/// * `path` - Path to the file to read
///
/// # Returns
/// * `Ok(String)` - File contents
/// * `Err(ResourceError::FileNotExist)` - Nothing at `path`
/// * `Err(ResourceError::IsADirectory)` - `path` is a directory
///
/// # Examples
/// ```ignore
/// use textfs::file_tools::file_read;
/// use std::path::Path;
///
/// let content = file_read(Path::new("notes/today.txt"))?;
/// ```
pub fn file_read(path: &Path) -> Result<String> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "read: no such file");
        return Err(ResourceError::FileNotExist);
    }
    if path.is_dir() {
        tracing::debug!(path = %path.display(), "read: path is a directory");
        return Err(ResourceError::IsADirectory);
    }

    let content = fs::read_to_string(path)?;
    Ok(content)
}
