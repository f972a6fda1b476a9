use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io::{Error, ErrorKind};
use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::ports::AssetFilesystem;

/// In-memory asset tree for unit tests.
///
/// Directories are implied by file paths; `list_dir` yields children in the order
/// their first file was added so traversal order is predictable.
#[derive(Default)]
#[allow(dead_code)]
pub struct MemoryAssets {
    files: Vec<(PathBuf, Vec<u8>)>,
    empty_dirs: BTreeSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
    unwritable: HashSet<PathBuf>,
    pub reads: RefCell<Vec<PathBuf>>,
    pub written: RefCell<BTreeMap<PathBuf, String>>,
}

#[allow(dead_code)]
impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files.push((path.into(), content.into()));
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.empty_dirs.insert(path.into());
        self
    }

    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }

    pub fn with_unwritable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unwritable.insert(path.into());
        self
    }

    pub fn written_to(&self, path: &Path) -> Option<String> {
        self.written.borrow().get(path).cloned()
    }

    fn file(&self, path: &Path) -> Option<&[u8]> {
        self.files.iter().find(|(file, _)| file == path).map(|(_, bytes)| bytes.as_slice())
    }

    fn known_paths(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .map(|(path, _)| path.as_path())
            .chain(self.empty_dirs.iter().map(PathBuf::as_path))
    }
}

impl AssetFilesystem for MemoryAssets {
    fn exists(&self, path: &Path) -> bool {
        self.file(path).is_some() || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.empty_dirs.contains(path)
            || self.known_paths().any(|known| known != path && known.starts_with(path))
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, AppError> {
        if !self.is_dir(path) {
            return Err(AppError::directory_read(path, Error::from(ErrorKind::NotFound)));
        }
        if self.unreadable.contains(path) {
            return Err(AppError::directory_read(path, Error::from(ErrorKind::PermissionDenied)));
        }

        let mut children = Vec::new();
        for known in self.known_paths() {
            let Ok(rest) = known.strip_prefix(path) else { continue };
            if let Some(Component::Normal(name)) = rest.components().next() {
                let child = path.join(name);
                if !children.contains(&child) {
                    children.push(child);
                }
            }
        }
        Ok(children)
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        self.reads.borrow_mut().push(path.to_path_buf());
        if self.unreadable.contains(path) {
            return Err(AppError::asset_read(path, Error::from(ErrorKind::PermissionDenied)));
        }
        self.file(path)
            .map(<[u8]>::to_vec)
            .ok_or_else(|| AppError::asset_read(path, Error::from(ErrorKind::NotFound)))
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.unwritable.contains(path) {
            return Err(AppError::output_write(path, Error::from(ErrorKind::PermissionDenied)));
        }
        self.written.borrow_mut().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
