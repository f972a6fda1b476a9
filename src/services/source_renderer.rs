//! Render an [`AssetMap`] as Rust source.

use include_dir::{Dir, include_dir};
use minijinja::syntax::SyntaxConfig;
use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::{ASSET_MAP_NAME, AppError, AssetMap};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const SOURCE_TEMPLATE: &str = "encoded_assets.rs.j2";

/// One map entry, already rendered as Rust literals.
#[derive(Debug, Serialize)]
struct LiteralEntry {
    path: String,
    content: String,
}

/// Render the generated source declaring `map` as a static `HashMap`.
pub fn render_source(map: &AssetMap) -> Result<String, AppError> {
    let mut entries = Vec::with_capacity(map.len());
    for asset in map.iter() {
        let path = asset
            .path
            .to_str()
            .ok_or_else(|| AppError::NonUtf8Path(asset.path.display().to_string()))?;
        entries.push(LiteralEntry {
            path: string_literal(path),
            content: string_literal(&asset.encoded),
        });
    }

    let template = TEMPLATES_DIR
        .get_file(SOURCE_TEMPLATE)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| {
            AppError::InternalError(format!("Missing embedded template: {}", SOURCE_TEMPLATE))
        })?;

    let context = context! {
        tool => env!("CARGO_PKG_NAME"),
        asset_map_name => ASSET_MAP_NAME,
        asset_count => entries.len(),
        entries => entries,
    };

    render_template(template, &context)
}

/// Rust string literal for `value`: raw with the fewest `#`s needed, escaped if it holds a `\r`.
pub fn string_literal(value: &str) -> String {
    // Raw strings reject bare carriage returns.
    if value.contains('\r') {
        return format!("{:?}", value);
    }

    let mut hashes = String::new();
    while value.contains(&format!("\"{}", hashes)) {
        hashes.push('#');
    }
    format!("r{hashes}\"{value}\"{hashes}")
}

fn render_template(content: &str, context: &minijinja::Value) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    let syntax = SyntaxConfig::builder()
        .block_delimiters("[%", "%]")
        .variable_delimiters("[[[", "]]]")
        .comment_delimiters("[#", "#]")
        .build()
        .map_err(|err| AppError::Render(format!("Failed to configure template syntax: {}", err)))?;
    env.set_syntax(syntax);

    env.add_template(SOURCE_TEMPLATE, content).map_err(|err| {
        AppError::Render(format!("Failed to load template {}: {}", SOURCE_TEMPLATE, err))
    })?;
    env.get_template(SOURCE_TEMPLATE)
        .map_err(|err| {
            AppError::Render(format!("Failed to access template {}: {}", SOURCE_TEMPLATE, err))
        })?
        .render(context)
        .map_err(|err| {
            AppError::Render(format!("Failed to render template {}: {}", SOURCE_TEMPLATE, err))
        })
}
