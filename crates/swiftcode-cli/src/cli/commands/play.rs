//! Interactive player command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use swiftcode_core::config::Config;
use swiftcode_core::demo;
use swiftcode_tui::Snippet;

use super::{read_source, source_label};

pub fn run(config: &Config, files: &[PathBuf], language: Option<&str>) -> Result<()> {
    let snippets = load_snippets(config, files, language)?;
    swiftcode_tui::run_player(config, snippets)
}

fn load_snippets(config: &Config, files: &[PathBuf], language: Option<&str>) -> Result<Vec<Snippet>> {
    if files.is_empty() {
        let language = language.or(config.language.as_deref()).unwrap_or(demo::DEMO_LANGUAGE);
        return Ok(vec![Snippet::new(
            demo::DEMO_LABEL,
            Some(language.to_string()),
            demo::DEMO_SOURCE,
        )]);
    }

    files
        .iter()
        .map(|path| {
            let source = read_source(path)?;
            let language = language
                .or(config.language.as_deref())
                .map(str::to_string)
                .or_else(|| language_for(path).map(str::to_string));
            tracing::debug!(path = %path.display(), chars = source.chars().count(), "loaded snippet");
            Ok(Snippet::new(source_label(path), language, source))
        })
        .collect()
}

/// Display label inferred from a file extension.
fn language_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    let language = match ext.to_ascii_lowercase().as_str() {
        "ts" | "tsx" | "mts" | "cts" => "typescript",
        "js" | "jsx" | "mjs" | "cjs" => "javascript",
        "rs" => "rust",
        "py" => "python",
        "go" => "go",
        "java" => "java",
        "swift" => "swift",
        "c" | "h" => "c",
        "cpp" | "cc" | "hpp" => "c++",
        _ => return None,
    };
    Some(language)
}
