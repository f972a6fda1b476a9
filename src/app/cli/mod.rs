//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "assetgen")]
#[command(version)]
#[command(
    about = "Embed a directory of assets into a generated Rust source file",
    long_about = None
)]
struct Cli {
    /// Directory whose files are encoded (walked recursively)
    #[arg(short = 'a', long, visible_alias = "assets_dir", value_name = "DIR")]
    assets_dir: PathBuf,
    /// Generated source file [default: encoded_assets.rs next to the assetgen binary]
    #[arg(short = 'o', long, visible_alias = "output_file", value_name = "FILE")]
    output_file: Option<PathBuf>,
}

pub fn run() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run_generate(cli.assets_dir, cli.output_file) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(assets_dir: PathBuf, output_file: Option<PathBuf>) -> Result<(), AppError> {
    let outcome = crate::app::api::generate(assets_dir, output_file)?;
    println!(
        "✅ Embedded {} asset(s) into {}",
        outcome.asset_count,
        outcome.output_file.display()
    );
    Ok(())
}
