use crate::ports::AssetFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: AssetFilesystem> {
    filesystem: F,
}

impl<F: AssetFilesystem> AppContext<F> {
    /// Create a new application context.
    pub fn new(filesystem: F) -> Self {
        Self { filesystem }
    }

    /// Get a reference to the asset filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }
}
