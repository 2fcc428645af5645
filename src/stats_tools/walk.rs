//! walk_files: the one traversal shared by every statistic
//!
//! Depth-first over an explicit stack, so deep trees never grow the call
//! stack. Children are visited in sorted order. Symlinks are followed and
//! there is no cycle detection.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{Result, StatsError};

/// A regular file found during a walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    /// On-disk size in bytes
    pub size: u64,
}

/// Lazy iterator over every file beneath a root
///
/// Call [`walk_files`] again to restart; a walk holds no shared state.
#[derive(Debug)]
pub struct FileWalk {
    pending: Vec<PathBuf>,
}

/// Start a walk at `root`
///
/// A root that is itself a file yields exactly that file.
pub fn walk_files(root: &Path) -> Result<FileWalk> {
    if !root.exists() {
        return Err(StatsError::NotFound(root.display().to_string()));
    }

    Ok(FileWalk {
        pending: vec![root.to_path_buf()],
    })
}

impl Iterator for FileWalk {
    type Item = Result<FileEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(path) = self.pending.pop() {
            let metadata = match fs::metadata(&path) {
                Ok(metadata) => metadata,
                // Dangling symlink, or removed since its parent was listed
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "walk: entry vanished, skipping");
                    continue;
                }
                Err(e) => return Some(Err(StatsError::io(&path, e))),
            };

            if metadata.is_file() {
                return Some(Ok(FileEntry {
                    path,
                    size: metadata.len(),
                }));
            }

            if metadata.is_dir() {
                if let Err(e) = self.push_children(&path) {
                    return Some(Err(e));
                }
            } else {
                tracing::debug!(path = %path.display(), "walk: not a file or directory, skipping");
            }
        }

        None
    }
}

impl FileWalk {
    fn push_children(&mut self, dir: &Path) -> Result<()> {
        let mut children = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| StatsError::io(dir, e))? {
            let entry = entry.map_err(|e| StatsError::io(dir, e))?;
            children.push(entry.path());
        }

        // Reverse-sorted onto the stack so pops come out in sorted order
        children.sort_unstable_by(|a, b| b.cmp(a));
        self.pending.extend(children);
        Ok(())
    }
}
