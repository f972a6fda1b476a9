//! Shared testing utilities for assetgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated asset directory and output location.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    assets_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty `assets/` directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let assets_dir = root.path().join("assets");
        fs::create_dir_all(&assets_dir).expect("Failed to create test assets directory");
        Self { root, assets_dir }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Default output location used by the tests.
    pub fn output_path(&self) -> PathBuf {
        self.root.path().join("encoded_assets.rs")
    }

    /// Write an asset below `assets/`, creating parent directories.
    pub fn write_asset(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.assets_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create asset parent directory");
        }
        fs::write(&path, content).expect("Failed to write asset");
        path
    }

    /// Build a command for invoking the compiled `assetgen` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("assetgen").expect("Failed to locate assetgen binary");
        cmd.current_dir(self.root.path());
        cmd
    }

    /// Build a command with `--assets-dir` and `--output-file` already set.
    pub fn generate_cmd(&self) -> Command {
        let mut cmd = self.cli();
        cmd.arg("--assets-dir").arg(&self.assets_dir).arg("--output-file").arg(self.output_path());
        cmd
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output_path()).expect("Failed to read generated file")
    }

    pub fn assert_output_not_exists(&self) {
        assert!(!self.output_path().exists(), "generated file should not exist");
    }
}

/// Extract `(path, encoded)` pairs from generated source, in file order.
#[allow(dead_code)]
pub fn parse_entries(source: &str) -> Vec<(String, String)> {
    source
        .lines()
        .filter_map(|line| {
            let rest = line.trim().strip_prefix("(Path::new(")?;
            let (path, rest) = take_raw_literal(rest)?;
            let rest = rest.strip_prefix("), ")?;
            let (content, rest) = take_raw_literal(rest)?;
            (rest == "),").then_some((path, content))
        })
        .collect()
}

fn take_raw_literal(input: &str) -> Option<(String, &str)> {
    let rest = input.strip_prefix('r')?;
    let hashes = rest.chars().take_while(|c| *c == '#').count();
    let body = rest[hashes..].strip_prefix('"')?;
    let terminator = format!("\"{}", "#".repeat(hashes));
    let end = body.find(&terminator)?;
    Some((body[..end].to_string(), &body[end + terminator.len()..]))
}
