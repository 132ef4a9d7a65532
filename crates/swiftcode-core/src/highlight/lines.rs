//! Splits revealed text into lines and highlights each one.

use serde::Serialize;

use super::tokenizer::{Run, ScanState, tokenize_from};

/// Options for [`highlight`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightOptions {
    /// Carry an unterminated string into the next line.
    ///
    /// Off by default: each line is scanned from a clean state, so multi-line
    /// template literals are highlighted line by line.
    pub carry_line_state: bool,
}

/// One highlighted line. Holds zero runs when the line is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HighlightedLine {
    pub runs: Vec<Run>,
}

impl HighlightedLine {
    /// Concatenated run text.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// Splits on `\n` without trimming. An empty input gives one empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Highlights `text` line by line.
pub fn highlight(text: &str, options: HighlightOptions) -> Vec<HighlightedLine> {
    let mut state = ScanState::Clean;
    split_lines(text)
        .into_iter()
        .map(|line| {
            let start = if options.carry_line_state {
                state
            } else {
                ScanState::Clean
            };
            let (runs, end) = tokenize_from(line, start);
            state = end;
            HighlightedLine { runs }
        })
        .collect()
}

/// Rebuilds the source text from highlighted lines.
pub fn join_lines(lines: &[HighlightedLine]) -> String {
    lines
        .iter()
        .map(HighlightedLine::text)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::Category;

    #[test]
    fn test_split_empty_gives_one_line() {
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_split_keeps_empty_segments() {
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_split_does_not_trim() {
        assert_eq!(split_lines("  a \r\n b"), vec!["  a \r", " b"]);
    }

    #[test]
    fn test_highlight_empty_lines_have_no_runs() {
        let lines = highlight("a\n\nb", HighlightOptions::default());
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_empty());
    }

    #[test]
    fn test_highlight_resets_state_per_line() {
        let lines = highlight("const t = `a\nb` + c", HighlightOptions::default());
        assert_eq!(lines[0].runs.last().unwrap().text, "`a");
        // The closing backtick opens a fresh string on the second line.
        assert_eq!(lines[1].runs[0].text, "b");
        assert_eq!(lines[1].runs[0].category, Category::PlainText);
        assert_eq!(lines[1].runs[1].text, "` + c");
        assert_eq!(lines[1].runs[1].category, Category::StringLiteral);
    }

    #[test]
    fn test_highlight_carries_open_string_when_enabled() {
        let options = HighlightOptions {
            carry_line_state: true,
        };
        let lines = highlight("const t = `a\nb` + c", options);
        assert_eq!(lines[1].runs[0].text, "b`");
        assert_eq!(lines[1].runs[0].category, Category::StringLiteral);
        assert_eq!(lines[1].runs.last().unwrap().text, "c");
    }

    #[test]
    fn test_comment_never_carries() {
        let options = HighlightOptions {
            carry_line_state: true,
        };
        let lines = highlight("// note\nconst x", options);
        assert_eq!(lines[1].runs[0].category, Category::Keyword);
    }

    #[test]
    fn test_join_reproduces_every_prefix() {
        let source = "import x from 'y';\n\nconst s = \"a//b\"; // c\n  return `t`\n";
        let chars: Vec<(usize, char)> = source.char_indices().collect();
        for options in [
            HighlightOptions::default(),
            HighlightOptions {
                carry_line_state: true,
            },
        ] {
            for count in 0..=chars.len() {
                let end = chars.get(count).map_or(source.len(), |&(idx, _)| idx);
                let prefix = &source[..end];
                let lines = highlight(prefix, options);
                assert_eq!(join_lines(&lines), prefix);
                assert!(
                    lines
                        .iter()
                        .flat_map(|line| &line.runs)
                        .all(|run| !run.text.is_empty())
                );
            }
        }
    }
}
