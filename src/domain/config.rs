use std::path::{Path, PathBuf};

use super::AppError;

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "encoded_assets.rs";

/// Name of the static declared in the generated source.
pub const ASSET_MAP_NAME: &str = "ASSETS";

/// Inputs for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub source_dir: PathBuf,
    pub output_file: PathBuf,
}

impl GeneratorConfig {
    /// Build a config, placing the output next to the running executable when unset.
    pub fn new(source_dir: PathBuf, output_file: Option<PathBuf>) -> Result<Self, AppError> {
        let output_file = match output_file {
            Some(path) => path,
            None => default_output_file()?,
        };
        Ok(Self { source_dir, output_file })
    }

    /// Whether the output lands inside the asset directory (and would be embedded next run).
    pub fn output_inside_source(&self) -> bool {
        let output_dir = match self.output_file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        match (output_dir.canonicalize(), self.source_dir.canonicalize()) {
            (Ok(output_dir), Ok(source_dir)) => output_dir.starts_with(source_dir),
            _ => false,
        }
    }
}

/// `<directory of the current executable>/encoded_assets.rs`.
pub fn default_output_file() -> Result<PathBuf, AppError> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        AppError::InternalError(format!("Executable has no parent directory: {}", exe.display()))
    })?;
    Ok(dir.join(DEFAULT_OUTPUT_FILE))
}
