//! Category passes
//!
//! Each pass scans the whole paragraph list independently and owns its own
//! tallies, so a document can be scanned by any subset of passes, in any
//! order or in parallel, with the same per-pass output.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        PassEngine                           │
//! │  - Registers passes                                         │
//! │  - Runs them in parallel (rayon)                            │
//! │  - Merges issues in registration order                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┴───────────────┐
//!              ▼                               ▼
//! ┌──────────────────────────┐   ┌──────────────────────────────┐
//! │ VocabularyPass (x4)      │   │ StatisticsPass               │
//! │ city, town, country,     │   │ article, percent, date, stat │
//! │ speaker-mentioned        │   │ + most-mentioned summaries   │
//! └──────────────────────────┘   └──────────────────────────────┘
//! ```

mod aggregate;
mod base;
mod engine;
mod statistics_pass;
mod vocabulary_pass;

pub use aggregate::{display_value, emit_most_mentioned, emit_totals, title_case};
pub use base::{Pass, PassResult, ProgressCallback, ScanSummary};
pub use engine::{PassEngine, PassEngineBuilder};
pub use statistics_pass::StatisticsPass;
pub use vocabulary_pass::VocabularyPass;

use crate::category::Category;
use crate::config::ScanConfig;
use crate::document::split_into_paragraphs;
use crate::models::{Issue, Report};
use std::sync::Arc;
use tracing::warn;

/// Build the enabled passes in report order:
/// city, town, country, speaker-mentioned, then statistics.
pub fn default_passes(config: &ScanConfig) -> Vec<Arc<dyn Pass>> {
    let mut passes: Vec<Arc<dyn Pass>> = Category::VOCABULARY
        .into_iter()
        .filter(|c| config.is_enabled(*c))
        .map(|c| Arc::new(VocabularyPass::new(config.vocabulary(c))) as Arc<dyn Pass>)
        .collect();

    let statistics: Vec<_> = Category::STATISTICS
        .into_iter()
        .filter(|c| config.is_enabled(*c))
        .map(|c| config.vocabulary(c))
        .collect();
    if !statistics.is_empty() {
        passes.push(Arc::new(StatisticsPass::new(statistics)));
    }

    passes
}

/// Run one pass over a whole document and return its issues.
///
/// A failing pass yields no issues rather than an error.
pub fn process(document_text: &str, pass: &dyn Pass) -> Vec<Issue> {
    let paragraphs = split_into_paragraphs(document_text);
    let mut report = Report::new(pass.name());
    match pass.scan(&paragraphs, &mut report) {
        Ok(()) => report.issues,
        Err(e) => {
            warn!("Pass {} failed: {}", pass.name(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_passes_order() {
        let passes = default_passes(&ScanConfig::default());
        let names: Vec<&str> = passes.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec![
                "city-finder",
                "town-finder",
                "country-finder",
                "speaker-finder",
                "statistics-finder"
            ]
        );
    }

    #[test]
    fn test_restricted_config_builds_fewer_passes() {
        let mut config = ScanConfig::default();
        config.restrict_to(&[Category::Town, Category::Date]);
        let passes = default_passes(&config);

        let names: Vec<&str> = passes.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["town-finder", "statistics-finder"]);
        assert_eq!(passes[1].categories(), vec![Category::Date]);
    }

    #[test]
    fn test_process_single_pass() {
        let pass = VocabularyPass::builtin(Category::City);
        let issues = process("In belfast today.\n\nAnd Derry tomorrow", &pass);
        let tags: Vec<&str> = issues.iter().map(|i| i.tag.as_str()).collect();
        assert_eq!(
            tags,
            vec!["city-cropped-up", "city-cropped-up", "city-totals", "city-totals"]
        );
        assert_eq!(issues[1].line_number, Some(3));
    }

    #[test]
    fn test_process_empty_document() {
        for pass in default_passes(&ScanConfig::default()) {
            assert!(process("", pass.as_ref()).is_empty());
        }
    }
}
