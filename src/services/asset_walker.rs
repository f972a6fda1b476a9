//! Directory traversal and per-file encoding.
//!
//! The walk is depth-first over whatever order the filesystem lists entries in.
//! There is no cycle detection: a symlink pointing at one of its own ancestors
//! recurses until the OS refuses to resolve the path.

use std::path::Path;

use log::debug;

use crate::domain::{AppError, AssetEncoder, AssetMap};
use crate::ports::AssetFilesystem;

/// Read one file and encode it with the strategy chosen by its extension.
pub fn encode_file<F: AssetFilesystem + ?Sized>(fs: &F, path: &Path) -> Result<String, AppError> {
    let bytes = fs.read_bytes(path)?;
    let encoder = AssetEncoder::for_path(path);
    debug!("encoding {} ({} bytes, {:?})", path.display(), bytes.len(), encoder);
    Ok(encoder.encode(&bytes))
}

/// Encode every file below `root`, keyed by its path relative to `root`.
pub fn encode_directory<F: AssetFilesystem + ?Sized>(
    fs: &F,
    root: &Path,
) -> Result<AssetMap, AppError> {
    if !fs.exists(root) {
        return Err(AppError::SourceNotFound(root.display().to_string()));
    }
    if !fs.is_dir(root) {
        return Err(AppError::SourceNotDirectory(root.display().to_string()));
    }

    let mut assets = AssetMap::new();
    walk(fs, root, root, &mut assets)?;
    Ok(assets)
}

fn walk<F: AssetFilesystem + ?Sized>(
    fs: &F,
    root: &Path,
    dir: &Path,
    assets: &mut AssetMap,
) -> Result<(), AppError> {
    for path in fs.list_dir(dir)? {
        if fs.is_dir(&path) {
            walk(fs, root, &path, assets)?;
            continue;
        }

        let encoded = encode_file(fs, &path)?;
        let relative = path.strip_prefix(root).map_err(|_| {
            AppError::InternalError(format!(
                "{} is not below asset root {}",
                path.display(),
                root.display()
            ))
        })?;
        assets.insert(relative.to_path_buf(), encoded)?;
    }
    Ok(())
}
