//! Filesystem operations needed to walk assets and write the generated source.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for the filesystem the generator reads from and writes to.
pub trait AssetFilesystem {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a path is a directory (following symlinks).
    fn is_dir(&self, path: &Path) -> bool;

    /// List the immediate entries of a directory as full paths, in listing order.
    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Read a file's entire contents as raw bytes.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError>;

    /// Create or truncate a file and write UTF-8 content to it.
    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
