use std::io;

use thiserror::Error;

/// Library-wide error type for assetgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Asset directory does not exist.
    #[error("Asset directory not found: {0}")]
    SourceNotFound(String),

    /// Asset directory path points at something other than a directory.
    #[error("Asset path is not a directory: {0}")]
    SourceNotDirectory(String),

    /// Directory listing failed during the walk.
    #[error("Failed to list directory {path}: {source}")]
    DirectoryRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Asset file could not be opened or read.
    #[error("Failed to read asset {path}: {source}")]
    AssetRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Generated source file could not be written.
    #[error("Failed to write output file {path}: {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Relative asset path cannot be rendered as a Rust string literal.
    #[error("Asset path is not valid UTF-8: {0}")]
    NonUtf8Path(String),

    /// No encoder is registered for the file type.
    ///
    /// Reserved: the encoder lookup always falls back to the standard encoder.
    #[error("Unsupported asset type: {0}")]
    UnsupportedType(String),

    /// Template rendering failed.
    #[error("Failed to render generated source: {0}")]
    Render(String),

    /// Encoded asset text is not valid base64.
    #[error("Failed to decode asset: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Internal invariant violation.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn asset_read(path: &std::path::Path, source: io::Error) -> Self {
        AppError::AssetRead { path: path.display().to_string(), source }
    }

    pub fn directory_read(path: &std::path::Path, source: io::Error) -> Self {
        AppError::DirectoryRead { path: path.display().to_string(), source }
    }

    pub fn output_write(path: &std::path::Path, source: io::Error) -> Self {
        AppError::OutputWrite { path: path.display().to_string(), source }
    }

    /// Underlying I/O error kind, when the failure came from the filesystem.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            AppError::Io(err) => Some(err.kind()),
            AppError::DirectoryRead { source, .. }
            | AppError::AssetRead { source, .. }
            | AppError::OutputWrite { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
