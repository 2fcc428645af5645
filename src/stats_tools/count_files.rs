//! count_files tool: Count files beneath a path
//!
//! A file root counts as one; a directory root counts every file in its
//! subtree. Directories themselves are not counted.

use std::path::Path;

use super::errors::Result;
use super::walk::walk_files;

/// Count files beneath `root`, recursively
pub fn count_files(root: &Path) -> Result<u64> {
    let mut total = 0;
    for entry in walk_files(root)? {
        entry?;
        total += 1;
    }

    tracing::debug!(root = %root.display(), total, "count_files");
    Ok(total)
}
