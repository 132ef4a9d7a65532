//! Category styles.
//!
//! Translates highlight categories into ratatui styles. Colors come from the
//! `[theme]` config section; names that fail to parse fall back to the
//! built-in color with a warning in the log.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use swiftcode_core::config::ThemeConfig;
use swiftcode_core::highlight::Category;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub keyword: Style,
    pub string: Style,
    pub comment: Style,
    pub plain: Style,
    pub caret: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            keyword: Style::default()
                .fg(parse_color("keyword", &config.keyword, Color::Magenta))
                .add_modifier(Modifier::BOLD),
            string: Style::default().fg(parse_color("string", &config.string, Color::Green)),
            comment: Style::default()
                .fg(parse_color("comment", &config.comment, Color::DarkGray))
                .add_modifier(Modifier::ITALIC),
            plain: Style::default().fg(parse_color("plain", &config.plain, Color::White)),
            caret: Style::default()
                .fg(parse_color("caret", &config.caret, Color::Yellow))
                .add_modifier(Modifier::SLOW_BLINK),
        }
    }

    pub fn style(&self, category: Category) -> Style {
        match category {
            Category::Keyword => self.keyword,
            Category::StringLiteral => self.string,
            Category::Comment => self.comment,
            Category::PlainText => self.plain,
        }
    }
}

fn parse_color(key: &str, name: &str, fallback: Color) -> Color {
    Color::from_str(name.trim()).unwrap_or_else(|_| {
        warn!(key, name, "unknown theme color, using default");
        fallback
    })
}
