//! Vocabulary term matcher
//!
//! Case-insensitive by ASCII lowercasing, which never changes byte length, so
//! positions found in the lowercased copy are valid for the original text.

use super::{char_offset, Occurrence};
use crate::category::CategoryVocabulary;
use crate::document::Paragraph;
use memchr::memmem;

/// How a term must sit in the paragraph to count as a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Bounded by a space (or the paragraph edge) on both sides.
    /// Punctuation is not a boundary: "Belfast," is not matched.
    WholeWord,
    /// Any literal occurrence of the text
    Phrase,
}

/// Byte ranges of every non-overlapping occurrence of `term` in `haystack`.
///
/// Both arguments must already be lowercased.
pub fn find_term(haystack: &str, term: &str, mode: MatchMode) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return Vec::new();
    }
    let bytes = haystack.as_bytes();
    memmem::find_iter(bytes, term.as_bytes())
        .map(|start| (start, start + term.len()))
        .filter(|&(start, end)| match mode {
            MatchMode::Phrase => true,
            MatchMode::WholeWord => {
                (start == 0 || bytes[start - 1] == b' ') && (end == bytes.len() || bytes[end] == b' ')
            }
        })
        .collect()
}

/// All occurrences of the vocabulary's terms in one paragraph.
///
/// Ordered by term (vocabulary order), then by position.
pub fn match_terms<'a>(paragraph: &'a Paragraph, vocabulary: &CategoryVocabulary) -> Vec<Occurrence<'a>> {
    let lower = paragraph.text.to_ascii_lowercase();
    let mode = vocabulary.category.match_mode();

    let mut occurrences = Vec::new();
    for term in &vocabulary.terms {
        for (start, end) in find_term(&lower, term, mode) {
            occurrences.push(Occurrence {
                category: vocabulary.category,
                value: term.clone(),
                paragraph,
                start_offset: char_offset(&lower, start),
                end_offset: char_offset(&lower, end),
            });
        }
    }
    occurrences
}
