//! Fixed-vocabulary pass (cities, towns, countries, speaker references)
//!
//! One struct serves all four categories; the category and its terms come
//! from the `CategoryVocabulary` it is built with.

use crate::category::{Category, CategoryVocabulary};
use crate::document::Paragraph;
use crate::matching::match_terms;
use crate::models::{AnnotatedContent, Report};
use crate::passes::aggregate::{emit_totals, title_case};
use crate::passes::base::Pass;
use crate::tally::RunningTally;
use anyhow::Result;
use tracing::debug;

pub struct VocabularyPass {
    vocabulary: CategoryVocabulary,
}

impl VocabularyPass {
    pub fn new(vocabulary: CategoryVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn builtin(category: Category) -> Self {
        Self::new(CategoryVocabulary::builtin(category))
    }

    pub fn vocabulary(&self) -> &CategoryVocabulary {
        &self.vocabulary
    }
}

impl Pass for VocabularyPass {
    fn name(&self) -> &'static str {
        match self.vocabulary.category {
            Category::City => "city-finder",
            Category::Town => "town-finder",
            Category::Country => "country-finder",
            Category::SpeakerMentioned => "speaker-finder",
            _ => "term-finder",
        }
    }

    fn description(&self) -> &'static str {
        match self.vocabulary.category {
            Category::City => "Finds mentions of cities",
            Category::Town => "Finds mentions of towns",
            Category::Country => "Finds mentions of countries",
            Category::SpeakerMentioned => "Finds references to the Speaker",
            _ => "Finds vocabulary terms",
        }
    }

    fn categories(&self) -> Vec<Category> {
        vec![self.vocabulary.category]
    }

    fn scan(&self, paragraphs: &[Paragraph], report: &mut Report) -> Result<()> {
        let category = self.vocabulary.category;
        let tag = category.occurrence_tag();
        let mut tally = RunningTally::seeded(&self.vocabulary.terms);

        for paragraph in paragraphs {
            for occurrence in match_terms(paragraph, &self.vocabulary) {
                tally.record(&occurrence.value);

                let severity = self.vocabulary.severity_for(&occurrence.value);
                let mut content = AnnotatedContent::new(paragraph.text.as_str());
                content.add(
                    format!("Occurrence of {}", title_case(&occurrence.value)),
                    occurrence.start_offset,
                    occurrence.end_offset,
                    severity,
                    vec![category.tag().to_string()],
                );

                report.add_issue(
                    severity,
                    tag.as_str(),
                    format!("Found {}", occurrence.value),
                    Some(paragraph.line_number),
                    Some(occurrence.start_offset),
                    Some(content),
                );
            }
        }

        debug!(
            "{}: {} occurrences across {} paragraphs",
            self.name(),
            tally.total(),
            paragraphs.len()
        );
        emit_totals(report, category, &tally);
        Ok(())
    }
}
