//! file_update: Replace the full contents of an existing file
//!
//! Truncates and rewrites the file, then fsyncs.
//! Fails if the file does not exist (no implicit create).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::errors::{ResourceError, Result};

/// Overwrite an existing file with new content
///
/// # Arguments
/// * `path` - Path to the file to replace
/// * `content` - Content to write; `None` when the caller supplied no string
///
/// # Returns
/// * `Ok(String)` - The content that was written
/// * `Err(ResourceError)` - Contents missing, path is a directory, or no file
///
/// # Examples
/// ```ignore
/// use textfs::file_tools::file_update;
/// use std::path::Path;
///
/// file_update(Path::new("output.txt"), Some("Hello, World!"))?;
/// ```
pub fn file_update(path: &Path, content: Option<&str>) -> Result<String> {
    let content = content.ok_or(ResourceError::ContentsMustBeString)?;

    if path.is_dir() {
        tracing::debug!(path = %path.display(), "update: path is a directory");
        return Err(ResourceError::IsADirectory);
    }
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "update: no such file");
        return Err(ResourceError::FileNotExist);
    }

    // File::create truncates, so this is a full replace
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "update: written");
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_update_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.txt");
        fs::write(&path, "a much longer original body").unwrap();

        assert_eq!(file_update(&path, Some("short")).unwrap(), "short");
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_update_missing_file_is_not_created() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        assert_eq!(
            file_update(&path, Some("x")),
            Err(ResourceError::FileNotExist)
        );
        assert!(!path.exists());
    }

    #[test]
    fn test_update_directory() {
        let temp_dir = TempDir::new().unwrap();

        assert_eq!(
            file_update(temp_dir.path(), Some("x")),
            Err(ResourceError::IsADirectory)
        );
    }

    #[test]
    fn test_update_without_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.txt");
        fs::write(&path, "keep").unwrap();

        assert_eq!(
            file_update(&path, None),
            Err(ResourceError::ContentsMustBeString)
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep");
    }
}
