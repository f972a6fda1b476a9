mod asset_filesystem;

pub use asset_filesystem::AssetFilesystem;
