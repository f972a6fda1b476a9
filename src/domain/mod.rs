pub mod asset_map;
pub mod config;
pub mod encoding;
pub mod error;

pub use asset_map::{AssetMap, EncodedAsset};
pub use config::{ASSET_MAP_NAME, DEFAULT_OUTPUT_FILE, GeneratorConfig};
pub use encoding::{AssetEncoder, FileType, decode_asset};
pub use error::AppError;
