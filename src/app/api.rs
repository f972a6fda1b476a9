//! Library entry points backed by the real filesystem.
//!
//! `generate` and `generate_with_config` run the full walk, render and write pipeline;
//! `encode_directory` stops after encoding and returns the in-memory map.

use std::path::{Path, PathBuf};

use crate::adapters::FilesystemAssets;
use crate::app::{AppContext, commands::generate};
use crate::services;

pub use crate::app::commands::generate::GenerateOutcome;
pub use crate::domain::{AppError, AssetMap, GeneratorConfig};

/// Create an `AppContext` backed by the real filesystem.
fn create_context() -> AppContext<FilesystemAssets> {
    AppContext::new(FilesystemAssets::new())
}

/// Encode `source_dir` and write the generated source file.
///
/// When `output_file` is `None` the file is written next to the running executable.
pub fn generate(
    source_dir: impl Into<PathBuf>,
    output_file: Option<PathBuf>,
) -> Result<GenerateOutcome, AppError> {
    let config = GeneratorConfig::new(source_dir.into(), output_file)?;
    generate_with_config(&config)
}

/// Run the generator with an explicit configuration.
pub fn generate_with_config(config: &GeneratorConfig) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context();
    generate::execute(&ctx, config)
}

/// Encode every file below `source_dir` without rendering or writing anything.
pub fn encode_directory(source_dir: &Path) -> Result<AssetMap, AppError> {
    let ctx = create_context();
    services::encode_directory(ctx.filesystem(), source_dir)
}
