//! Full-screen typewriter player for SwiftCode snippets.

pub mod common;
pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use runtime::TuiRuntime;
pub use state::Snippet;
use swiftcode_core::config::Config;

/// Plays `snippets` in the terminal until the user quits.
///
/// Must be called from within a tokio runtime; the reveal driver is spawned
/// on it.
pub fn run_player(config: &Config, snippets: Vec<Snippet>) -> Result<()> {
    // The player needs a terminal to render into
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The player requires a terminal.\n\
             Use `swiftcode tokens <FILE>` for non-interactive output."
        );
    }

    tracing::info!(snippets = snippets.len(), "starting player");
    let mut runtime = TuiRuntime::new(config, snippets)?;
    runtime.run()
}
