//! Pure view/render functions for the player.
//!
//! Functions here take `&PlayerState`, draw to a ratatui Frame, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, LineGauge, Paragraph};
use swiftcode_core::reveal::RevealFrame;

use crate::common::text::{expand_tabs, truncate_with_ellipsis};
use crate::state::PlayerState;
use crate::theme::Theme;

/// Height of the progress gauge.
const PROGRESS_HEIGHT: u16 = 1;

/// Height of the key hint line.
const HINTS_HEIGHT: u16 = 1;

const HINTS: &str = "space pause · r replay · s skip · n/p snippet · +/- speed · q quit";

/// Renders the whole player to the frame.
pub fn render(state: &PlayerState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(PROGRESS_HEIGHT),
            Constraint::Length(HINTS_HEIGHT),
        ])
        .split(frame.area());

    let reveal = state.session.frame(state.frame_options);

    render_code(state, &reveal, frame, chunks[0]);
    render_progress(state, &reveal, frame, chunks[1]);
    render_hints(state, frame, chunks[2]);
}

fn render_code(state: &PlayerState, reveal: &RevealFrame, frame: &mut Frame, area: Rect) {
    let title = title(state, area.width.saturating_sub(4) as usize);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));

    let height = area.height.saturating_sub(2) as usize;
    let lines = code_lines(reveal, &state.theme, &state.caret);

    // Follow the caret: keep the last revealed line on screen.
    let skip = lines.len().saturating_sub(height);
    let visible: Vec<Line<'static>> = lines.into_iter().skip(skip).collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

fn render_progress(state: &PlayerState, reveal: &RevealFrame, frame: &mut Frame, area: Rect) {
    let label = format!(
        "{}/{} · {}ms",
        state.session.revealed(),
        state.session.total(),
        state.delay_ms
    );
    let gauge = LineGauge::default()
        .ratio(reveal.progress.clamp(0.0, 1.0))
        .label(label)
        .filled_style(Style::default().fg(Color::Cyan))
        .unfilled_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(gauge, area);
}

fn render_hints(state: &PlayerState, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    if state.paused {
        spans.push(Span::styled(
            "PAUSED ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    } else if state.session.is_complete() {
        spans.push(Span::styled("DONE ", Style::default().fg(Color::Green)));
    }
    let used: usize = spans.iter().map(Span::width).sum();
    let room = (area.width as usize).saturating_sub(used);
    spans.push(Span::styled(
        truncate_with_ellipsis(HINTS, room),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Title text: snippet label, language, and position when several snippets.
fn title(state: &PlayerState, max_width: usize) -> String {
    let snippet = state.snippet();
    let mut title = snippet.label.clone();
    if let Some(language) = &snippet.language {
        title.push_str(" · ");
        title.push_str(language);
    }
    if state.snippets.len() > 1 {
        title.push_str(&format!(" ({}/{})", state.current + 1, state.snippets.len()));
    }
    format!(" {} ", truncate_with_ellipsis(&title, max_width))
}

/// Converts highlighted lines into styled ratatui lines, with the caret
/// appended after the last run of the last line.
pub fn code_lines(reveal: &RevealFrame, theme: &Theme, caret: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = reveal
        .lines
        .iter()
        .map(|line| {
            Line::from(
                line.runs
                    .iter()
                    .map(|run| {
                        Span::styled(
                            expand_tabs(&run.text).into_owned(),
                            theme.style(run.category),
                        )
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    if reveal.caret
        && let Some(last) = lines.last_mut()
    {
        last.spans.push(Span::styled(caret.to_string(), theme.caret));
    }

    lines
}
