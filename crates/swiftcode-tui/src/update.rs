//! Reducer for the player.
//!
//! `update` mutates state and returns effects; it never spawns tasks or
//! touches the terminal. Whenever the cadence changes (pause, replay, new
//! snippet, new speed) the running driver is cancelled before a new one is
//! requested.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use swiftcode_core::config::Config;
use swiftcode_core::reveal::SessionId;
use tracing::debug;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{DELAY_STEP_MS, MIN_DELAY_MS, PlayerState};

/// Effects to run once before the first event.
pub fn init(state: &mut PlayerState) -> Vec<UiEffect> {
    reschedule(state)
}

pub fn update(state: &mut PlayerState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::RevealTick(id) => {
            on_tick(state, id);
            Vec::new()
        }
        UiEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            handle_key(state, key)
        }
        UiEvent::Terminal(_) => Vec::new(),
    }
}

fn on_tick(state: &mut PlayerState, id: SessionId) {
    // Ticks already queued when their driver was cancelled must not apply.
    if state.driver != Some(id) {
        return;
    }
    if state.session.apply_tick(id) && state.session.is_complete() {
        debug!(session = id.0, "snippet fully revealed");
        state.driver = None;
    }
}

fn handle_key(state: &mut PlayerState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => quit(state),
        KeyCode::Char('q') | KeyCode::Esc => quit(state),
        KeyCode::Char(' ') => {
            state.paused = !state.paused;
            reschedule(state)
        }
        KeyCode::Char('r') => {
            state.session.restart();
            reschedule(state)
        }
        KeyCode::Char('s') | KeyCode::End => {
            state.session.reveal_to(state.session.total());
            reschedule(state)
        }
        KeyCode::Char('n') | KeyCode::Right => {
            let next = (state.current + 1) % state.snippets.len();
            select_snippet(state, next)
        }
        KeyCode::Char('p') | KeyCode::Left => {
            let len = state.snippets.len();
            select_snippet(state, (state.current + len - 1) % len)
        }
        KeyCode::Char('+' | '=') => {
            set_delay(state, state.delay_ms.saturating_sub(DELAY_STEP_MS).max(MIN_DELAY_MS))
        }
        KeyCode::Char('-') => set_delay(
            state,
            state.delay_ms.saturating_add(DELAY_STEP_MS).min(Config::MAX_DELAY_MS),
        ),
        _ => Vec::new(),
    }
}

fn quit(state: &mut PlayerState) -> Vec<UiEffect> {
    state.should_quit = true;
    let mut effects = cancel_driver(state);
    effects.push(UiEffect::Quit);
    effects
}

fn select_snippet(state: &mut PlayerState, index: usize) -> Vec<UiEffect> {
    if index == state.current {
        return Vec::new();
    }
    state.current = index;
    let source = state.snippets[index].source.clone();
    if state.session.set_source(source) {
        reschedule(state)
    } else {
        Vec::new()
    }
}

fn set_delay(state: &mut PlayerState, delay_ms: u64) -> Vec<UiEffect> {
    if delay_ms == state.delay_ms {
        return Vec::new();
    }
    state.delay_ms = delay_ms;
    let mut effects = if state.is_revealing() {
        reschedule(state)
    } else {
        Vec::new()
    };
    effects.push(UiEffect::PersistDelay { delay_ms });
    effects
}

/// Cancels the running driver, if any.
///
/// The session gets a new id so ticks the old driver already queued are
/// dropped by `apply_tick`.
fn cancel_driver(state: &mut PlayerState) -> Vec<UiEffect> {
    if state.driver.take().is_none() {
        return Vec::new();
    }
    state.session.renew_id();
    vec![UiEffect::CancelReveal]
}

/// Cancels the current driver and starts a new one if there is work left.
fn reschedule(state: &mut PlayerState) -> Vec<UiEffect> {
    let mut effects = cancel_driver(state);
    if !state.paused && !state.session.is_complete() {
        let session = state.session.id();
        state.driver = Some(session);
        effects.push(UiEffect::StartReveal {
            session,
            ticks: state.session.remaining(),
            delay: state.delay(),
        });
    }
    effects
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyEventState;

    use super::*;
    use crate::state::Snippet;

    fn state_with(sources: &[&str]) -> PlayerState {
        let snippets = sources
            .iter()
            .enumerate()
            .map(|(i, s)| Snippet::new(format!("s{i}"), None, *s))
            .collect();
        PlayerState::new(&Config::default(), snippets).unwrap()
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn tick_all(state: &mut PlayerState) {
        while let Some(id) = state.driver {
            update(state, UiEvent::RevealTick(id));
        }
    }

    #[test]
    fn test_init_starts_driver() {
        let mut state = state_with(&["abc"]);
        let effects = init(&mut state);
        assert_eq!(
            effects,
            vec![UiEffect::StartReveal {
                session: state.session.id(),
                ticks: 3,
                delay: Duration::from_millis(35),
            }]
        );
        assert_eq!(state.driver, Some(state.session.id()));
    }

    #[test]
    fn test_init_with_empty_source_starts_nothing() {
        let mut state = state_with(&[""]);
        assert!(init(&mut state).is_empty());
        assert!(!state.is_revealing());
    }

    #[test]
    fn test_ticks_reveal_and_finish_driver() {
        let mut state = state_with(&["ab"]);
        init(&mut state);
        tick_all(&mut state);
        assert!(state.session.is_complete());
        assert_eq!(state.driver, None);
    }

    #[test]
    fn test_stale_tick_ignored() {
        let mut state = state_with(&["abc"]);
        init(&mut state);
        let old = state.session.id();
        update(&mut state, key(KeyCode::Char('r')));
        update(&mut state, UiEvent::RevealTick(old));
        assert_eq!(state.session.revealed(), 0);
    }

    #[test]
    fn test_pause_cancels_and_resume_restarts_with_remaining() {
        let mut state = state_with(&["abcd"]);
        init(&mut state);
        let id = state.session.id();
        update(&mut state, UiEvent::RevealTick(id));

        let effects = update(&mut state, key(KeyCode::Char(' ')));
        assert_eq!(effects, vec![UiEffect::CancelReveal]);
        assert!(state.paused);
        assert!(!state.is_revealing());

        let effects = update(&mut state, key(KeyCode::Char(' ')));
        let resumed = state.session.id();
        assert_ne!(resumed, id);
        assert_eq!(
            effects,
            vec![UiEffect::StartReveal {
                session: resumed,
                ticks: 3,
                delay: Duration::from_millis(35),
            }]
        );
    }

    #[test]
    fn test_ticks_queued_before_pause_are_dropped() {
        let mut state = state_with(&["abcdef"]);
        init(&mut state);
        let id = state.session.id();

        assert_eq!(
            update(&mut state, key(KeyCode::Char(' '))),
            vec![UiEffect::CancelReveal]
        );
        update(&mut state, UiEvent::RevealTick(id));
        update(&mut state, UiEvent::RevealTick(id));
        assert_eq!(state.session.revealed(), 0);

        // Still dropped once the new driver is running.
        update(&mut state, key(KeyCode::Char(' ')));
        update(&mut state, UiEvent::RevealTick(id));
        assert_eq!(state.session.revealed(), 0);

        let resumed = state.driver.unwrap();
        update(&mut state, UiEvent::RevealTick(resumed));
        assert_eq!(state.session.revealed(), 1);
    }

    #[test]
    fn test_speed_change_drops_ticks_from_old_driver() {
        let mut state = state_with(&["abcdef"]);
        init(&mut state);
        let old = state.session.id();
        update(&mut state, UiEvent::RevealTick(old));

        update(&mut state, key(KeyCode::Char('-')));
        let new = state.driver.unwrap();
        assert_ne!(new, old);

        update(&mut state, UiEvent::RevealTick(old));
        assert_eq!(state.session.revealed(), 1);
        update(&mut state, UiEvent::RevealTick(new));
        assert_eq!(state.session.revealed(), 2);
    }

    #[test]
    fn test_next_snippet_cancels_then_restarts() {
        let mut state = state_with(&["abc", "xy"]);
        init(&mut state);
        let effects = update(&mut state, key(KeyCode::Char('n')));

        assert_eq!(state.current, 1);
        assert_eq!(state.session.source(), "xy");
        assert_eq!(state.session.revealed(), 0);
        assert_eq!(effects[0], UiEffect::CancelReveal);
        assert!(matches!(
            effects[1],
            UiEffect::StartReveal { ticks: 2, .. }
        ));
    }

    #[test]
    fn test_previous_snippet_wraps() {
        let mut state = state_with(&["a", "b", "c"]);
        init(&mut state);
        update(&mut state, key(KeyCode::Char('p')));
        assert_eq!(state.current, 2);
    }

    #[test]
    fn test_identical_snippet_keeps_session() {
        let mut state = state_with(&["same", "same"]);
        init(&mut state);
        let id = state.session.id();
        update(&mut state, UiEvent::RevealTick(id));

        let effects = update(&mut state, key(KeyCode::Char('n')));
        assert!(effects.is_empty());
        assert_eq!(state.session.revealed(), 1);
        assert_eq!(state.driver, Some(id));
    }

    #[test]
    fn test_single_snippet_next_is_noop() {
        let mut state = state_with(&["abc"]);
        init(&mut state);
        assert!(update(&mut state, key(KeyCode::Char('n'))).is_empty());
    }

    #[test]
    fn test_skip_reveals_everything() {
        let mut state = state_with(&["abc"]);
        init(&mut state);
        let effects = update(&mut state, key(KeyCode::Char('s')));
        assert_eq!(effects, vec![UiEffect::CancelReveal]);
        assert!(state.session.is_complete());
    }

    #[test]
    fn test_speed_change_reschedules_and_persists() {
        let mut state = state_with(&["abc"]);
        init(&mut state);
        let effects = update(&mut state, key(KeyCode::Char('-')));
        assert_eq!(state.delay_ms, 40);
        assert_eq!(effects[0], UiEffect::CancelReveal);
        assert!(matches!(
            effects[1],
            UiEffect::StartReveal { delay, .. } if delay == Duration::from_millis(40)
        ));
        assert_eq!(effects[2], UiEffect::PersistDelay { delay_ms: 40 });
    }

    #[test]
    fn test_speed_change_when_idle_only_persists() {
        let mut state = state_with(&["a"]);
        init(&mut state);
        tick_all(&mut state);
        let effects = update(&mut state, key(KeyCode::Char('+')));
        assert_eq!(effects, vec![UiEffect::PersistDelay { delay_ms: 30 }]);
    }

    #[test]
    fn test_speed_floor() {
        let mut state = state_with(&["a"]);
        state.delay_ms = MIN_DELAY_MS;
        assert!(update(&mut state, key(KeyCode::Char('+'))).is_empty());
    }

    #[test]
    fn test_quit_cancels_driver() {
        let mut state = state_with(&["abc"]);
        init(&mut state);
        let effects = update(&mut state, key(KeyCode::Char('q')));
        assert_eq!(effects, vec![UiEffect::CancelReveal, UiEffect::Quit]);
        assert!(state.should_quit);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut state = state_with(&["abc"]);
        init(&mut state);
        let event = UiEvent::Terminal(Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }));
        assert!(update(&mut state, event).is_empty());
        assert!(!state.should_quit);
    }
}
