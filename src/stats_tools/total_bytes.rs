//! total_bytes tool: Sum of on-disk file sizes beneath a path

use std::path::Path;

use super::errors::Result;
use super::walk::walk_files;

/// Total size in bytes of every file beneath `root`
///
/// Uses file metadata, so multi-byte characters count by encoded length.
pub fn total_bytes(root: &Path) -> Result<u64> {
    let mut total = 0;
    for entry in walk_files(root)? {
        total += entry?.size;
    }

    tracing::debug!(root = %root.display(), total, "total_bytes");
    Ok(total)
}
