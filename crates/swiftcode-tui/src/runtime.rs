//! Player runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the only place with side effects. The reducer stays pure and
//! produces effects; this module executes them.
//!
//! The reveal driver runs as a tokio task and sends ticks into the inbox.
//! The runtime keeps at most one `RevealHandle`; replacing or dropping it
//! cancels the previous driver.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use swiftcode_core::config::{Config, paths};
use swiftcode_core::reveal::{self, RevealHandle};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::effects::UiEffect;
use crate::events::{UiEvent, UiEventReceiver, UiEventSender};
use crate::state::{PlayerState, Snippet};
use crate::terminal::{self, PlayerTerminal};
use crate::{render, update};

/// Poll duration while the driver is running (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle (paused or fully revealed).
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen player runtime.
///
/// Owns the terminal and state. Terminal state is restored when `run`
/// returns, on error, or on panic.
pub struct TuiRuntime {
    terminal: PlayerTerminal,
    pub state: PlayerState,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    driver: Option<RevealHandle>,
}

impl TuiRuntime {
    /// Creates the runtime. Must be called from within a tokio runtime.
    pub fn new(config: &Config, snippets: Vec<Snippet>) -> Result<Self> {
        let state = PlayerState::new(config, snippets).context("No snippets to play")?;

        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            driver: None,
        })
    }

    /// Runs the main event loop and restores the terminal afterwards.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();

        self.cancel_driver();
        let restored = terminal::restore_terminal();

        result.and(restored)
    }

    fn event_loop(&mut self) -> Result<()> {
        let effects = update::init(&mut self.state);
        self.execute_effects(effects);

        let mut dirty = true;
        while !self.state.should_quit {
            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }

            let events = self.collect_events()?;
            for event in events {
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
                dirty = true;
            }
        }

        Ok(())
    }

    /// Waits for terminal input up to one frame, then drains the inbox.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let timeout = if self.state.is_revealing() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        let mut events = Vec::new();
        if event::poll(timeout).context("Failed to poll terminal events")? {
            events.push(UiEvent::Terminal(
                event::read().context("Failed to read terminal event")?,
            ));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        while let Ok(event) = self.inbox_rx.try_recv() {
            events.push(event);
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::StartReveal {
                session,
                ticks,
                delay,
            } => {
                // Cancel before reschedule, even if the reducer already asked.
                self.cancel_driver();
                let tx = self.inbox_tx.clone();
                self.driver = Some(reveal::spawn(session, ticks, delay, move |id| {
                    tx.send(UiEvent::RevealTick(id)).is_ok()
                }));
            }
            UiEffect::CancelReveal => self.cancel_driver(),
            UiEffect::PersistDelay { delay_ms } => {
                if let Err(e) = Config::save_delay_ms(delay_ms) {
                    warn!(
                        error = %format!("{e:#}"),
                        path = %paths::config_path().display(),
                        "failed to persist delay"
                    );
                } else {
                    debug!(delay_ms, "delay persisted");
                }
            }
        }
    }

    fn cancel_driver(&mut self) {
        if let Some(handle) = self.driver.take() {
            handle.cancel();
        }
    }
}
