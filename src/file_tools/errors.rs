//! Resource error taxonomy and the (payload, error) outcome pair
//!
//! Every file operation resolves to either the resulting contents or one of
//! these variants. Callers match on the variant; the message is what goes on
//! the wire.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message for a missing file
pub const FILE_NOT_EXIST: &str = "File does not exist";
/// Message for a file that is already present
pub const FILE_EXISTS: &str = "File already exists";
/// Message for a path that is a directory
pub const IS_A_DIRECTORY: &str = "Path is a directory";
/// Message for a missing or malformed contents payload
pub const CONTENTS_MUST_BE_STRING: &str = "Contents must be a string";

/// Errors that can occur during resource operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("File does not exist")]
    FileNotExist,

    #[error("File already exists")]
    FileExists,

    #[error("Path is a directory")]
    IsADirectory,

    #[error("Contents must be a string")]
    ContentsMustBeString,

    /// Any I/O failure outside the conditions above (permissions,
    /// undecodable content, the file vanishing mid-operation).
    #[error("IO error: {0}")]
    Io(String),
}

impl ResourceError {
    /// Payload string reported to clients for this error
    pub fn message(&self) -> String {
        match self {
            ResourceError::FileNotExist => FILE_NOT_EXIST.to_string(),
            ResourceError::FileExists => FILE_EXISTS.to_string(),
            ResourceError::IsADirectory => IS_A_DIRECTORY.to_string(),
            ResourceError::ContentsMustBeString => CONTENTS_MUST_BE_STRING.to_string(),
            ResourceError::Io(_) => self.to_string(),
        }
    }
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            // Lost a race between the pre-check and the actual call
            std::io::ErrorKind::NotFound => ResourceError::FileNotExist,
            _ => ResourceError::Io(err.to_string()),
        }
    }
}

/// Result type for resource operations
pub type Result<T> = std::result::Result<T, ResourceError>;

/// Flattened outcome of a resource operation
///
/// `error` is authoritative: a successful read of a file whose content
/// happens to equal an error message still has `error == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    /// File contents on success, error message otherwise
    pub contents: String,
    /// Whether the operation failed
    pub error: bool,
}

impl OperationResult {
    pub fn ok(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            error: false,
        }
    }

    pub fn failed(err: &ResourceError) -> Self {
        Self {
            contents: err.message(),
            error: true,
        }
    }
}

impl From<Result<String>> for OperationResult {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(contents) => OperationResult::ok(contents),
            Err(err) => OperationResult::failed(&err),
        }
    }
}
