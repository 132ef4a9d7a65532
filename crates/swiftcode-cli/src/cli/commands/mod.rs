//! CLI command handlers.

pub mod config;
pub mod play;
pub mod tokens;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads a source file, or stdin when `path` is `-`.
fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("read source from stdin")?;
        return Ok(source);
    }

    std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Title shown for a source path.
fn source_label(path: &Path) -> String {
    if path == Path::new("-") {
        return "stdin".to_string();
    }
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
