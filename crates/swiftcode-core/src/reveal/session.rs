//! Reveal state for one snippet.
//!
//! A session owns the full source text and the number of characters shown.
//! Counts are in `char`s. Highlighting is recomputed from the visible
//! prefix on every frame; the session stores no derived state besides the
//! byte offset of the prefix end.

use crate::highlight::{HighlightOptions, HighlightedLine, highlight};

/// Identifies one reveal session. Ticks carry it so stale ones can be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub u64);

#[derive(Debug, Default)]
pub struct SessionSeq {
    next: u64,
}

impl SessionSeq {
    pub fn next_id(&mut self) -> SessionId {
        let id = SessionId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Options applied when building a [`RevealFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOptions {
    pub highlight: HighlightOptions,
    pub show_caret: bool,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            highlight: HighlightOptions::default(),
            show_caret: true,
        }
    }
}

/// What the renderer draws for the current reveal count.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealFrame {
    pub lines: Vec<HighlightedLine>,
    /// Draw a caret after the last run of the last line.
    pub caret: bool,
    /// Fraction revealed, in `[0, 1]`. Cosmetic only.
    pub progress: f64,
}

#[derive(Debug)]
pub struct RevealSession {
    seq: SessionSeq,
    id: SessionId,
    source: String,
    total: usize,
    revealed: usize,
    revealed_bytes: usize,
}

impl RevealSession {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let mut seq = SessionSeq::default();
        let id = seq.next_id();
        Self {
            seq,
            id,
            total: source.chars().count(),
            source,
            revealed: 0,
            revealed_bytes: 0,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of characters in the source.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of characters currently shown.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn remaining(&self) -> usize {
        self.total - self.revealed
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.total
    }

    /// Shows one more character. Returns false once everything is shown.
    pub fn tick(&mut self) -> bool {
        let Some(ch) = self.source[self.revealed_bytes..].chars().next() else {
            return false;
        };
        self.revealed += 1;
        self.revealed_bytes += ch.len_utf8();
        true
    }

    /// Applies a tick only if it belongs to the current session.
    pub fn apply_tick(&mut self, id: SessionId) -> bool {
        if id != self.id {
            tracing::trace!(stale = id.0, current = self.id.0, "dropping stale tick");
            return false;
        }
        self.tick()
    }

    /// Replaces the source. Returns true if the session restarted.
    ///
    /// Identical text keeps the current session and reveal count.
    pub fn set_source(&mut self, source: impl Into<String>) -> bool {
        let source = source.into();
        if source == self.source {
            return false;
        }
        self.total = source.chars().count();
        self.source = source;
        self.restart();
        true
    }

    /// Issues a new id and keeps the reveal count.
    ///
    /// Ticks from drivers spawned under the previous id no longer apply.
    pub fn renew_id(&mut self) -> SessionId {
        self.id = self.seq.next_id();
        self.id
    }

    /// Starts a new session over the same text.
    pub fn restart(&mut self) {
        self.id = self.seq.next_id();
        self.revealed = 0;
        self.revealed_bytes = 0;
    }

    /// Jumps to `count` characters, clamped to the source length.
    pub fn reveal_to(&mut self, count: usize) {
        let count = count.min(self.total);
        self.revealed = count;
        self.revealed_bytes = self
            .source
            .char_indices()
            .nth(count)
            .map_or(self.source.len(), |(idx, _)| idx);
    }

    /// The revealed prefix.
    pub fn visible(&self) -> &str {
        &self.source[..self.revealed_bytes]
    }

    /// Fraction revealed. Zero for an empty source.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.revealed as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    pub fn frame(&self, options: FrameOptions) -> RevealFrame {
        RevealFrame {
            lines: highlight(self.visible(), options.highlight),
            caret: options.show_caret,
            progress: self.progress(),
        }
    }
}
