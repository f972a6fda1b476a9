use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::AppError;

/// One encoded asset keyed by its path relative to the asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAsset {
    pub path: PathBuf,
    pub encoded: String,
}

/// Root-relative path to encoded text, in insertion (traversal) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMap {
    entries: Vec<EncodedAsset>,
    index: HashMap<PathBuf, usize>,
}

impl AssetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an asset. Keys must be unique.
    pub fn insert(&mut self, path: PathBuf, encoded: String) -> Result<(), AppError> {
        if self.index.contains_key(&path) {
            return Err(AppError::InternalError(format!(
                "Duplicate asset path: {}",
                path.display()
            )));
        }
        self.index.insert(path.clone(), self.entries.len());
        self.entries.push(EncodedAsset { path, encoded });
        Ok(())
    }

    pub fn get(&self, path: &Path) -> Option<&str> {
        self.index.get(path).map(|&at| self.entries[at].encoded.as_str())
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.index.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EncodedAsset> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|entry| entry.path.as_path())
    }

    /// Total length of all encoded values.
    pub fn encoded_len(&self) -> usize {
        self.entries.iter().map(|entry| entry.encoded.len()).sum()
    }
}
