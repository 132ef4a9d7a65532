//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! ## Cancellation Effects
//!
//! The reducer decides when the reveal driver stops; the runtime executes
//! `CancelReveal` by cancelling the stored handle. `StartReveal` always
//! cancels the previous driver before spawning, so at most one driver runs.

use std::time::Duration;

use swiftcode_core::reveal::SessionId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Spawn a reveal driver delivering `ticks` ticks for `session`.
    StartReveal {
        session: SessionId,
        ticks: usize,
        delay: Duration,
    },

    /// Cancel the running reveal driver, if any.
    CancelReveal,

    /// Persist the reveal delay to config.
    PersistDelay { delay_ms: u64 },
}
