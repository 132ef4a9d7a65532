//! Built-in snippet played when no file is given.

/// Label shown in the player title.
pub const DEMO_LABEL: &str = "quickstart.ts";

/// Language label of the demo snippet.
pub const DEMO_LANGUAGE: &str = "typescript";

/// Demo source text.
pub const DEMO_SOURCE: &str = include_str!("../assets/demo.ts");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{Category, HighlightOptions, highlight, join_lines};

    #[test]
    fn test_demo_highlights_every_category() {
        let lines = highlight(DEMO_SOURCE, HighlightOptions::default());
        assert_eq!(join_lines(&lines), DEMO_SOURCE);

        let categories: Vec<Category> = lines
            .iter()
            .flat_map(|line| line.runs.iter().map(|run| run.category))
            .collect();
        for category in [
            Category::Keyword,
            Category::StringLiteral,
            Category::Comment,
            Category::PlainText,
        ] {
            assert!(categories.contains(&category), "missing {category:?}");
        }
    }
}
