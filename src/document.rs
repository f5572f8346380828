//! Document loading and paragraph splitting
//!
//! Paragraphs are runs of non-blank lines. Their text is what every offset in
//! the report is measured against, so splitting happens exactly once per scan
//! and the resulting `Vec` is shared read-only by all passes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One paragraph of the document and the 1-based line it starts on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    pub line_number: usize,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, line_number: usize) -> Self {
        Self {
            text: text.into(),
            line_number,
        }
    }
}

/// Read a UTF-8 document from disk
pub fn load_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Split text into paragraphs separated by blank lines.
///
/// Lines inside a paragraph are trimmed and joined with a single space, and
/// typographic quotes are replaced with their ASCII forms. Separator paragraphs
/// made only of dashes (`----`) are dropped.
pub fn split_into_paragraphs(text: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut start_line = 0usize;

    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush(&mut current, start_line, &mut paragraphs);
            continue;
        }
        if current.is_empty() {
            start_line = i + 1;
        }
        current.push(trimmed);
    }
    flush(&mut current, start_line, &mut paragraphs);

    paragraphs
}

fn flush(lines: &mut Vec<&str>, line_number: usize, out: &mut Vec<Paragraph>) {
    if lines.is_empty() {
        return;
    }
    let text = standardize_punctuation(&lines.join(" "));
    lines.clear();
    if is_separator(&text) {
        return;
    }
    out.push(Paragraph::new(text, line_number));
}

fn is_separator(text: &str) -> bool {
    text.chars().all(|c| c == '-')
}

fn standardize_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}
