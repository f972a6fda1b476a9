use std::path::PathBuf;

use log::{info, warn};

use crate::app::AppContext;
use crate::domain::{AppError, GeneratorConfig};
use crate::ports::AssetFilesystem;
use crate::services::{encode_directory, render_source};

/// Result of a successful generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub output_file: PathBuf,
    pub asset_count: usize,
    pub encoded_bytes: usize,
}

/// Execute the generate command.
///
/// Walks and encodes the whole asset directory before touching the output file, so a
/// read failure never leaves a partial generated file behind. The output is
/// overwritten unconditionally.
pub fn execute<F>(
    ctx: &AppContext<F>,
    config: &GeneratorConfig,
) -> Result<GenerateOutcome, AppError>
where
    F: AssetFilesystem,
{
    if config.output_inside_source() {
        warn!(
            "output file {} is inside the asset directory and will be embedded on the next run",
            config.output_file.display()
        );
    }

    let assets = encode_directory(ctx.filesystem(), &config.source_dir)?;
    info!("encoded {} assets from {}", assets.len(), config.source_dir.display());

    let source = render_source(&assets)?;
    ctx.filesystem().write_text(&config.output_file, &source)?;
    info!("wrote {} ({} bytes)", config.output_file.display(), source.len());

    Ok(GenerateOutcome {
        output_file: config.output_file.clone(),
        asset_count: assets.len(),
        encoded_bytes: assets.encoded_len(),
    })
}
