//! Result type alias for directory operations.

use crate::DirectoryError;

/// A specialized `Result` type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
