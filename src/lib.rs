//! assetgen: embed a directory of binary assets into a generated Rust source file.
//!
//! Every file below the asset directory is base64-encoded and rendered into a
//! `pub static ASSETS: LazyLock<HashMap<&'static Path, &'static str>>` keyed by its
//! path relative to that directory. Consumers decode entries with [`decode_asset`].

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


pub use app::api::{GenerateOutcome, encode_directory, generate, generate_with_config};
pub use domain::{
    ASSET_MAP_NAME, AppError, AssetEncoder, AssetMap, DEFAULT_OUTPUT_FILE, EncodedAsset, FileType,
    GeneratorConfig, decode_asset,
};
pub use services::{encode_file, render_source};
