pub mod filesystem;

pub use filesystem::FilesystemAssets;
