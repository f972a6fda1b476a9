//! `AssetFilesystem` implementation for `FilesystemAssets`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::AssetFilesystem;

use super::FilesystemAssets;

impl AssetFilesystem for FilesystemAssets {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, AppError> {
        let entries = fs::read_dir(path).map_err(|err| AppError::directory_read(path, err))?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| AppError::directory_read(path, err))?;
            paths.push(entry.path());
        }
        Ok(paths)
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        fs::read(path).map_err(|err| AppError::asset_read(path, err))
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(|err| AppError::output_write(path, err))
    }
}
