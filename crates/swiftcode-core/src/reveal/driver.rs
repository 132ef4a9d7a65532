//! Tick cadence for a reveal session.
//!
//! The driver is a tokio task that sleeps for `delay`, delivers one tick and
//! repeats. The next sleep only starts after the tick callback returns, so
//! ticks never pile up.
//!
//! Cancellation uses `tokio_util::sync::CancellationToken`. The returned
//! [`RevealHandle`] holds a drop guard, so dropping the handle cancels the
//! task on every exit path. A tick that races with cancellation is still
//! filtered by [`RevealSession::apply_tick`](super::RevealSession::apply_tick).

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::debug;

use super::SessionId;

/// Handle to a running driver. Dropping it cancels the driver.
#[derive(Debug)]
pub struct RevealHandle {
    session: SessionId,
    token: CancellationToken,
    task: JoinHandle<()>,
    _guard: DropGuard,
}

impl RevealHandle {
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Stops the driver. No tick is delivered after this returns.
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            debug!(session = self.session.0, "reveal driver cancelled");
        }
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// True once the task has delivered all ticks or stopped.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawns a driver delivering `ticks` ticks for `session`.
///
/// `on_tick` returns false when the receiver is gone; the driver then stops.
/// Must be called from within a tokio runtime.
pub fn spawn<F>(session: SessionId, ticks: usize, delay: Duration, mut on_tick: F) -> RevealHandle
where
    F: FnMut(SessionId) -> bool + Send + 'static,
{
    let token = CancellationToken::new();
    let task_token = token.clone();

    debug!(
        session = session.0,
        ticks,
        delay_ms = delay.as_millis() as u64,
        "reveal driver started"
    );

    let task = tokio::spawn(async move {
        for delivered in 0..ticks {
            tokio::select! {
                biased;
                () = task_token.cancelled() => return,
                () = tokio::time::sleep(delay) => {}
            }
            if task_token.is_cancelled() {
                return;
            }
            if !on_tick(session) {
                debug!(session = session.0, delivered, "tick receiver closed");
                return;
            }
        }
        debug!(session = session.0, "reveal driver finished");
    });

    RevealHandle {
        session,
        _guard: token.clone().drop_guard(),
        token,
        task,
    }
}
