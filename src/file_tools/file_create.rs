//! file_create: Create file if not exists
//!
//! Creates file and parent directories if needed.
//! Fails if a file or directory already occupies the path (no overwrite).

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use super::errors::{ResourceError, Result};

/// Create a new file with content
///
/// Creates parent directories if they don't exist.
///
/// # Arguments
/// * `path` - Path to the file to create
/// * `content` - Content to write; `None` when the caller supplied no string
///
/// # Returns
/// * `Ok(String)` - The content that was written
/// * `Err(ResourceError)` - Contents missing, file exists, or path is a directory
///
/// # Examples
/// ```ignore
/// use textfs::file_tools::file_create;
/// use std::path::Path;
///
/// file_create(Path::new("new/dir/new.txt"), Some("New content"))?;
/// ```
pub fn file_create(path: &Path, content: Option<&str>) -> Result<String> {
    // Validate payload before touching the filesystem
    let content = content.ok_or(ResourceError::ContentsMustBeString)?;

    if path.is_file() {
        tracing::debug!(path = %path.display(), "create: file already exists");
        return Err(ResourceError::FileExists);
    }
    if path.is_dir() {
        tracing::debug!(path = %path.display(), "create: path is a directory");
        return Err(ResourceError::IsADirectory);
    }

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = open_new(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "create: written");
    Ok(content.to_string())
}

/// Open `path` for writing only if nothing exists there yet
///
/// A file that appeared after the pre-checks is reported as `FileExists`
/// instead of being truncated.
fn open_new(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => ResourceError::FileExists,
            _ => ResourceError::from(e),
        })
}
