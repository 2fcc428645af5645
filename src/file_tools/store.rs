//! ResourceStore: file operations addressed relative to a root directory
//!
//! Request paths are joined onto the root as-is. There is no sandboxing:
//! absolute paths and `..` segments resolve however the OS resolves them.

use std::path::PathBuf;

use super::errors::Result;
use super::{file_create, file_delete, file_read, file_update};

/// Text files under `root`, addressed by request path
#[derive(Debug, Clone)]
pub struct ResourceStore {
    root: PathBuf,
}

impl ResourceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Filesystem location of a request path
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    pub fn read(&self, path: &str) -> Result<String> {
        file_read(&self.resolve(path))
    }

    pub fn create(&self, path: &str, contents: Option<&str>) -> Result<String> {
        file_create(&self.resolve(path), contents)
    }

    pub fn update(&self, path: &str, contents: Option<&str>) -> Result<String> {
        file_update(&self.resolve(path), contents)
    }

    pub fn delete(&self, path: &str) -> Result<String> {
        file_delete(&self.resolve(path))
    }
}
