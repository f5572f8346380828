//! Statistics pass: articles, percentages, dates and bare numbers
//!
//! Runs the contextual classifier once per paragraph and keeps one tally per
//! statistic category. After the last paragraph it emits totals for each
//! category followed by each category's most-mentioned value.

use crate::category::{Category, CategoryVocabulary};
use crate::document::Paragraph;
use crate::matching::classify;
use crate::models::{AnnotatedContent, Report};
use crate::passes::aggregate::{display_value, emit_most_mentioned, emit_totals};
use crate::passes::base::Pass;
use crate::tally::RunningTally;
use anyhow::Result;
use indexmap::IndexMap;
use tracing::debug;

pub struct StatisticsPass {
    /// Enabled statistic categories in reporting order
    categories: Vec<CategoryVocabulary>,
}

impl StatisticsPass {
    /// Categories that are not statistic categories are ignored
    pub fn new(categories: impl IntoIterator<Item = CategoryVocabulary>) -> Self {
        let mut categories: Vec<CategoryVocabulary> = categories
            .into_iter()
            .filter(|v| v.category.is_statistic())
            .collect();
        categories.sort_by_key(|v| v.category);
        categories.dedup_by_key(|v| v.category);
        Self { categories }
    }

    pub fn builtin() -> Self {
        Self::new(Category::STATISTICS.map(CategoryVocabulary::builtin))
    }

    fn vocabulary(&self, category: Category) -> Option<&CategoryVocabulary> {
        self.categories.iter().find(|v| v.category == category)
    }
}

fn occurrence_message(category: Category, value: &str) -> String {
    match category {
        Category::Percent => format!("Found {}", display_value(category, value)),
        _ => format!("Found {} {}", category.label(), value),
    }
}

impl Pass for StatisticsPass {
    fn name(&self) -> &'static str {
        "statistics-finder"
    }

    fn description(&self) -> &'static str {
        "Classifies numbers as articles, percentages, dates or statistics"
    }

    fn categories(&self) -> Vec<Category> {
        self.categories.iter().map(|v| v.category).collect()
    }

    fn scan(&self, paragraphs: &[Paragraph], report: &mut Report) -> Result<()> {
        let mut tallies: IndexMap<Category, RunningTally> = self
            .categories
            .iter()
            .map(|v| (v.category, RunningTally::new()))
            .collect();

        for paragraph in paragraphs {
            for occurrence in classify(paragraph) {
                let Some(vocabulary) = self.vocabulary(occurrence.category) else {
                    continue;
                };
                let Some(tally) = tallies.get_mut(&occurrence.category) else {
                    continue;
                };
                tally.record(&occurrence.value);

                let category = occurrence.category;
                let severity = vocabulary.severity_for(&occurrence.value);
                let mut content = AnnotatedContent::new(paragraph.text.as_str());
                content.add(
                    format!(
                        "{} {}",
                        category.label(),
                        display_value(category, &occurrence.value)
                    ),
                    occurrence.start_offset,
                    occurrence.end_offset,
                    severity,
                    vec![category.tag().to_string()],
                );

                report.add_issue(
                    severity,
                    category.occurrence_tag(),
                    occurrence_message(category, &occurrence.value),
                    Some(paragraph.line_number),
                    Some(occurrence.start_offset),
                    Some(content),
                );
            }
        }

        for (category, tally) in &tallies {
            debug!("{}: {} {} values", self.name(), tally.total(), category);
            emit_totals(report, *category, tally);
        }
        for (category, tally) in &tallies {
            emit_most_mentioned(report, *category, tally);
        }
        Ok(())
    }
}
