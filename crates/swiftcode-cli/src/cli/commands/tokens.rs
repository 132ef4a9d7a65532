//! Non-interactive token dump.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use swiftcode_core::config::Config;
use swiftcode_core::demo;
use swiftcode_core::highlight::HighlightedLine;
use swiftcode_core::reveal::{RevealFrame, RevealSession};

use super::read_source;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One line per source line: `N: category:"text" ...`
    Text,
    /// A single JSON document
    Json,
}

#[derive(Serialize)]
struct TokensOutput<'a> {
    revealed: usize,
    total: usize,
    progress: f64,
    lines: &'a [HighlightedLine],
}

pub fn run(config: &Config, file: Option<&Path>, reveal: Option<usize>, format: Format) -> Result<()> {
    let source = match file {
        Some(path) => read_source(path)?,
        None => demo::DEMO_SOURCE.to_string(),
    };

    let mut session = RevealSession::new(source);
    session.reveal_to(reveal.unwrap_or(usize::MAX));
    let frame = session.frame(config.frame_options());
    tracing::debug!(
        revealed = session.revealed(),
        total = session.total(),
        lines = frame.lines.len(),
        "tokenized"
    );

    let rendered = match format {
        Format::Text => render_text(&frame),
        Format::Json => render_json(&session, &frame)?,
    };
    print!("{rendered}");
    Ok(())
}

fn render_text(frame: &RevealFrame) -> String {
    frame
        .lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let runs: String = line
                .runs
                .iter()
                .map(|run| format!(" {}:{:?}", run.category.label(), run.text))
                .collect();
            format!("{}:{runs}\n", idx + 1)
        })
        .collect()
}

fn render_json(session: &RevealSession, frame: &RevealFrame) -> Result<String> {
    let output = TokensOutput {
        revealed: session.revealed(),
        total: session.total(),
        progress: frame.progress,
        lines: &frame.lines,
    };
    let mut json = serde_json::to_string_pretty(&output).context("serialize tokens")?;
    json.push('\n');
    Ok(json)
}
