//! File tools: create/read/replace/delete of single text files
//!
//! All operations use the REAL filesystem. No mocks, no in-memory FS.
//! Each operation runs its existence/type checks in a fixed order before
//! mutating anything.

mod errors;
mod file_create;
mod file_delete;
mod file_read;
mod file_update;
mod store;

pub use errors::{
    OperationResult, ResourceError, Result, CONTENTS_MUST_BE_STRING, FILE_EXISTS, FILE_NOT_EXIST,
    IS_A_DIRECTORY,
};
pub use file_create::file_create;
pub use file_delete::file_delete;
pub use file_read::file_read;
pub use file_update::file_update;
pub use store::ResourceStore;
