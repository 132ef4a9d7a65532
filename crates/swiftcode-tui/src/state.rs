//! Player state.
//!
//! Mutated only by the reducer in `update.rs`. The reveal session inside is
//! the single writer of the reveal count; the renderer only reads it.

use std::time::Duration;

use swiftcode_core::config::Config;
use swiftcode_core::reveal::{FrameOptions, RevealSession, SessionId};

use crate::theme::Theme;

/// Fastest allowed cadence when speeding up with `+`.
pub const MIN_DELAY_MS: u64 = 1;

/// Delay change per `+`/`-` press.
pub const DELAY_STEP_MS: u64 = 5;

/// One snippet the player can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// File name or other short label for the title.
    pub label: String,
    /// Language label. Display only.
    pub language: Option<String>,
    pub source: String,
}

impl Snippet {
    pub fn new(label: impl Into<String>, language: Option<String>, source: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            language,
            source: source.into(),
        }
    }
}

#[derive(Debug)]
pub struct PlayerState {
    pub snippets: Vec<Snippet>,
    pub current: usize,
    pub session: RevealSession,
    /// Session the running driver ticks for, if any.
    pub driver: Option<SessionId>,
    pub delay_ms: u64,
    pub paused: bool,
    pub frame_options: FrameOptions,
    pub caret: String,
    pub theme: Theme,
    pub should_quit: bool,
}

impl PlayerState {
    /// Creates the state for `snippets`. Returns `None` when empty.
    pub fn new(config: &Config, snippets: Vec<Snippet>) -> Option<Self> {
        let session = RevealSession::new(snippets.first()?.source.clone());
        Some(Self {
            snippets,
            current: 0,
            session,
            driver: None,
            delay_ms: config.delay_ms.clamp(MIN_DELAY_MS, Config::MAX_DELAY_MS),
            paused: false,
            frame_options: config.frame_options(),
            caret: config.caret.clone(),
            theme: Theme::from_config(&config.theme),
            should_quit: false,
        })
    }

    pub fn snippet(&self) -> &Snippet {
        &self.snippets[self.current]
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn is_revealing(&self) -> bool {
        self.driver.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snippets_rejected() {
        assert!(PlayerState::new(&Config::default(), Vec::new()).is_none());
    }

    #[test]
    fn test_state_starts_on_first_snippet() {
        let snippets = vec![
            Snippet::new("a.ts", None, "const a"),
            Snippet::new("b.ts", Some("typescript".to_string()), "const b"),
        ];
        let state = PlayerState::new(&Config::default(), snippets).unwrap();
        assert_eq!(state.snippet().label, "a.ts");
        assert_eq!(state.session.source(), "const a");
        assert_eq!(state.delay_ms, 35);
        assert!(!state.is_revealing());
    }
}
