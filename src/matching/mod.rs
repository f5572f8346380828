//! Locating category terms inside paragraphs
//!
//! Two matchers feed the passes:
//! - `term_matcher` finds fixed vocabulary terms (places, speaker references)
//! - `classifier` finds numeric tokens and decides what kind of statistic each is
//!
//! Both return `Occurrence`s whose offsets are character positions into the
//! paragraph's own text, ready to be used as highlight spans.

pub mod classifier;
pub mod term_matcher;

pub use classifier::{classify, classify_tokens, parse_number, Classification};
pub use term_matcher::{find_term, match_terms, MatchMode};

use crate::category::Category;
use crate::document::Paragraph;

/// One located instance of a category's term or value within a paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence<'a> {
    pub category: Category,
    /// Lowercased term (vocabulary categories) or classified value (statistics)
    pub value: String,
    pub paragraph: &'a Paragraph,
    pub start_offset: usize,
    pub end_offset: usize,
}

/// Convert a byte offset into `text` to a character offset
pub(crate) fn char_offset(text: &str, byte_offset: usize) -> usize {
    text.get(..byte_offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(byte_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_offset_counts_multibyte() {
        let text = "Dáil and belfast";
        let byte = text.find("belfast").unwrap();
        assert_eq!(byte, 10);
        assert_eq!(char_offset(text, byte), 9);
        assert_eq!(char_offset("abc", 2), 2);
    }
}
