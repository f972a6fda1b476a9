//! Byte-to-text encoding strategies for assets.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::AppError;

/// File types recognised by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Png,
    Jpeg,
    Jpg,
}

impl FileType {
    pub const ALL: [FileType; 3] = [FileType::Png, FileType::Jpeg, FileType::Jpg];

    /// Extension without the leading dot, lowercase.
    pub fn extension(&self) -> &'static str {
        match self {
            FileType::Png => "png",
            FileType::Jpeg => "jpeg",
            FileType::Jpg => "jpg",
        }
    }

    /// Case-insensitive lookup by file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::ALL.into_iter().find(|file_type| file_type.extension() == ext)
    }
}

/// Encoder strategy applied to an asset's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetEncoder {
    /// Hook for PNG-specific handling (e.g. recompression). Currently plain base64.
    Png,
    /// Standard base64 applied to every other file.
    Standard,
}

impl AssetEncoder {
    /// Pick the encoder for a path. Always succeeds.
    pub fn for_path(path: &Path) -> Self {
        match FileType::from_path(path) {
            Some(FileType::Png) => AssetEncoder::Png,
            _ => AssetEncoder::Standard,
        }
    }

    pub fn encode(&self, bytes: &[u8]) -> String {
        match self {
            AssetEncoder::Png => encode_png(bytes),
            AssetEncoder::Standard => STANDARD.encode(bytes),
        }
    }
}

fn encode_png(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode text produced by [`AssetEncoder::encode`] back into the original bytes.
pub fn decode_asset(encoded: &str) -> Result<Vec<u8>, AppError> {
    Ok(STANDARD.decode(encoded)?)
}
