//! Contextual classifier for numeric tokens
//!
//! Each integer token is labelled by looking at its immediate neighbours:
//!
//! ```text
//! 10 percent | 10 %         -> percent   "10"
//! article 50                -> article   "50"
//! 15 august 2020            -> date      "15 august 2020"
//! august 2020               -> date      "august 2020"
//! anything else             -> stat      "2020"
//! ```
//!
//! Checks run in that order. A neighbour that does not exist (first or last
//! token of the paragraph) simply fails its check.

use super::{char_offset, Occurrence};
use crate::category::Category;
use crate::document::Paragraph;
use crate::vocabulary::{is_day_number, is_month_name};
use memchr::memmem;

/// A numeric token and what it was classified as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    /// Lowercased value: the number, or the date window around it
    pub value: String,
    /// Index of the numeric token in the token list
    pub token_index: usize,
}

/// Try to read a token as a non-negative integer.
///
/// Only plain ASCII digits qualify; signs, separators and trailing
/// punctuation (`2020.`) do not. There is no upper bound: the number is
/// only ever reported as text.
pub fn parse_number(token: &str) -> Option<&str> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(token)
}

/// Classify every numeric token in an already tokenized paragraph
pub fn classify_tokens(tokens: &[&str]) -> Vec<Classification> {
    let lower: Vec<String> = tokens.iter().map(|t| t.to_ascii_lowercase()).collect();
    let at = |i: Option<usize>| i.and_then(|i| lower.get(i)).map(String::as_str);

    let mut out = Vec::new();
    for (i, token) in lower.iter().enumerate() {
        if parse_number(token).is_none() {
            continue;
        }

        let next = at(i.checked_add(1));
        let prev = at(i.checked_sub(1));
        let before_prev = at(i.checked_sub(2));

        let is_percent = matches!(next, Some("percent") | Some("%"));

        let (category, value) = if is_percent {
            (Category::Percent, token.clone())
        } else if prev == Some("article") {
            (Category::Article, token.clone())
        } else {
            match (before_prev, prev) {
                (Some(day), Some(month)) if is_day_number(day) && is_month_name(month) => {
                    (Category::Date, format!("{day} {month} {token}"))
                }
                (_, Some(month)) if is_month_name(month) => {
                    (Category::Date, format!("{month} {token}"))
                }
                _ => (Category::Stat, token.clone()),
            }
        };

        out.push(Classification {
            category,
            value,
            token_index: i,
        });
    }
    out
}

/// Classify the numeric tokens of one paragraph.
///
/// Each classification is located by the first occurrence of its value in the
/// paragraph (falling back to the bare number when the value's spacing differs
/// from the text), so repeated values highlight the same span.
pub fn classify(paragraph: &Paragraph) -> Vec<Occurrence<'_>> {
    let tokens: Vec<&str> = paragraph.text.split_whitespace().collect();
    let lower = paragraph.text.to_ascii_lowercase();

    classify_tokens(&tokens)
        .into_iter()
        .map(|c| {
            let number = tokens[c.token_index].to_ascii_lowercase();
            let (start, end) = locate(&lower, &c.value)
                .or_else(|| locate(&lower, &number))
                .unwrap_or((0, 0));
            Occurrence {
                category: c.category,
                value: c.value,
                paragraph,
                start_offset: char_offset(&lower, start),
                end_offset: char_offset(&lower, end),
            }
        })
        .collect()
}

fn locate(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    memmem::find(haystack.as_bytes(), needle.as_bytes()).map(|s| (s, s + needle.len()))
}
