//! Filesystem adapter for the `AssetFilesystem` port.
//!
//! Paths are used as given: the asset root and the output file come straight from
//! the CLI, so there is no root to confine them to.

mod asset_filesystem;

/// Filesystem-backed implementation of `AssetFilesystem`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemAssets;

impl FilesystemAssets {
    pub fn new() -> Self {
        Self
    }
}
