//! Syntax highlighting for code snippets.
//!
//! `tokenizer` classifies one line; `lines` splits text and highlights
//! every line.

mod lines;
mod tokenizer;

pub use lines::{HighlightOptions, HighlightedLine, highlight, join_lines, split_lines};
pub use tokenizer::{Category, KEYWORDS, Run, ScanState, is_keyword, tokenize, tokenize_from};
