mod asset_walker;
mod source_renderer;

pub use asset_walker::{encode_directory, encode_file};
pub use source_renderer::{render_source, string_literal};
