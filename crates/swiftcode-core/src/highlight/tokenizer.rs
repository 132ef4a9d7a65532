//! Single-pass line tokenizer.
//!
//! Classifies every character of one line into a [`Run`]. The scan knows
//! about line comments (`//`), string literals delimited by `"`, `'` or a
//! backtick, and a fixed keyword set. Anything else is plain text.
//!
//! Runs always partition the line: joining their text gives the line back.

use serde::Serialize;

/// Words highlighted as keywords. Matching is exact, never by prefix.
pub const KEYWORDS: &[&str] = &[
    "import",
    "from",
    "const",
    "await",
    "function",
    "return",
    "if",
    "else",
    "for",
    "while",
    "class",
    "interface",
    "type",
    "export",
    "default",
];

/// Syntax category attached to a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Keyword,
    StringLiteral,
    Comment,
    PlainText,
}

impl Category {
    /// Short name used by the text output of `swiftcode tokens`.
    pub fn label(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::StringLiteral => "string",
            Category::Comment => "comment",
            Category::PlainText => "plain",
        }
    }
}

/// A non-empty slice of one line sharing a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub text: String,
    pub category: Category,
}

impl Run {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// True for whitespace-only runs (spaces, tabs, `\r`).
    pub fn is_blank(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

/// Scan state at a line boundary.
///
/// Line comments end with their line, so only an open string can be carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Clean,
    InString(char),
}

/// Tokenizes one line starting from a clean state.
pub fn tokenize(line: &str) -> Vec<Run> {
    tokenize_from(line, ScanState::Clean).0
}

/// Tokenizes one line starting from `state`.
///
/// Returns the runs and the state at the end of the line. An unterminated
/// string is flushed as a string literal; it is not an error.
pub fn tokenize_from(line: &str, state: ScanState) -> (Vec<Run>, ScanState) {
    let mut runs = Vec::new();
    let mut current = String::new();
    let mut delimiter = match state {
        ScanState::Clean => None,
        ScanState::InString(open) => Some(open),
    };
    let mut prev: Option<char> = None;
    let mut chars = line.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if let Some(open) = delimiter {
            current.push(ch);
            // Single look-behind: `\\"` still counts as escaped.
            if ch == open && prev != Some('\\') {
                flush(&mut runs, &mut current, Category::StringLiteral);
                delimiter = None;
            }
        } else if ch == '/' && chars.peek().is_some_and(|&(_, next)| next == '/') {
            flush(&mut runs, &mut current, Category::PlainText);
            current.push_str(&line[idx..]);
            flush(&mut runs, &mut current, Category::Comment);
            return (runs, ScanState::Clean);
        } else if is_string_delimiter(ch) {
            flush(&mut runs, &mut current, Category::PlainText);
            current.push(ch);
            delimiter = Some(ch);
        } else if is_word_char(ch) {
            current.push(ch);
        } else {
            flush_word(&mut runs, &mut current);
            runs.push(Run::new(ch, Category::PlainText));
        }
        prev = Some(ch);
    }

    match delimiter {
        Some(open) => {
            flush(&mut runs, &mut current, Category::StringLiteral);
            (runs, ScanState::InString(open))
        }
        None => {
            flush_word(&mut runs, &mut current);
            (runs, ScanState::Clean)
        }
    }
}

/// Returns true if `word` is one of [`KEYWORDS`].
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn is_string_delimiter(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '`')
}

fn flush(runs: &mut Vec<Run>, current: &mut String, category: Category) {
    if current.is_empty() {
        return;
    }
    runs.push(Run::new(std::mem::take(current), category));
}

fn flush_word(runs: &mut Vec<Run>, current: &mut String) {
    let category = if is_keyword(current) {
        Category::Keyword
    } else {
        Category::PlainText
    };
    flush(runs, current, category);
}
