//! Scoped file I/O under the output root.
//!
//! All `path` arguments are relative, forward-slash separated, and already
//! validated by the caller; implementations only resolve them under the
//! root and perform the I/O.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for file operations scoped to the output root.
pub trait OutputStore {
    /// Absolute path of the output root.
    fn root(&self) -> &Path;

    /// Check whether a file exists under the root.
    fn exists(&self, path: &str) -> bool;

    /// Read a file as UTF-8 text.
    fn read(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as
    /// needed.
    fn write(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Hex SHA-256 digest of a file's current content.
    fn content_digest(&self, path: &str) -> Result<String, AppError>;

    /// Create a directory and all parent directories.
    fn create_dirs(&self, path: &str) -> Result<(), AppError>;

    /// All files under the root, relative, forward-slash separated,
    /// sorted.
    fn list_files(&self) -> Result<Vec<String>, AppError>;

    /// Resolve a relative path to its absolute location under the root.
    fn resolve(&self, path: &str) -> PathBuf;
}
