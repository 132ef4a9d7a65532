//! UI event types.
//!
//! All inputs (terminal, reveal driver) are converted to `UiEvent` before
//! being processed by the reducer.
//!
//! ## Inbox Pattern
//!
//! The reveal driver sends `UiEvent::RevealTick` straight into the runtime's
//! inbox. Each tick carries the session id it was spawned for; the reducer
//! drops ticks whose session is no longer current.

use crossterm::event::Event as CrosstermEvent;
use swiftcode_core::reveal::SessionId;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum UiEvent {
    /// Input from the terminal (keys, resize).
    Terminal(CrosstermEvent),
    /// One character tick from the reveal driver.
    RevealTick(SessionId),
}

/// Sender for the runtime's event inbox.
pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;

/// Receiver for the runtime's event inbox.
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;
