//! Categories and the vocabulary each one matches

use crate::error::ConfigError;
use crate::matching::MatchMode;
use crate::models::Severity;
use crate::vocabulary;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// The fixed set of things a scan looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    City,
    Town,
    Country,
    SpeakerMentioned,
    Article,
    Percent,
    Date,
    Stat,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::City,
        Category::Town,
        Category::Country,
        Category::SpeakerMentioned,
        Category::Article,
        Category::Percent,
        Category::Date,
        Category::Stat,
    ];

    /// Categories matched against a term list
    pub const VOCABULARY: [Category; 4] = [
        Category::City,
        Category::Town,
        Category::Country,
        Category::SpeakerMentioned,
    ];

    /// Categories produced by the contextual classifier
    pub const STATISTICS: [Category; 4] = [
        Category::Article,
        Category::Percent,
        Category::Date,
        Category::Stat,
    ];

    /// Tag prefix used in issue tags (`{tag}-totals` etc.)
    pub fn tag(&self) -> &'static str {
        match self {
            Category::City => "city",
            Category::Town => "town",
            Category::Country => "country",
            Category::SpeakerMentioned => "speaker-mentioned",
            Category::Article => "article",
            Category::Percent => "percent",
            Category::Date => "date",
            Category::Stat => "stat",
        }
    }

    /// Human-readable noun for messages
    pub fn label(&self) -> &'static str {
        match self {
            Category::City => "city",
            Category::Town => "town",
            Category::Country => "country",
            Category::SpeakerMentioned => "speaker reference",
            Category::Article => "article",
            Category::Percent => "percentage",
            Category::Date => "date",
            Category::Stat => "statistic",
        }
    }

    pub fn is_statistic(&self) -> bool {
        Self::STATISTICS.contains(self)
    }

    /// Single-word place names need word boundaries; phrases do not
    pub fn match_mode(&self) -> MatchMode {
        match self {
            Category::City | Category::Town => MatchMode::WholeWord,
            _ => MatchMode::Phrase,
        }
    }

    pub fn occurrence_tag(&self) -> String {
        format!("{}-cropped-up", self.tag())
    }

    pub fn totals_tag(&self) -> String {
        format!("{}-totals", self.tag())
    }

    pub fn most_mentioned_tag(&self) -> String {
        format!("{}-most-mentioned", self.tag())
    }

    /// Compiled-in term list (empty for statistic categories)
    pub fn builtin_terms(&self) -> &'static [&'static str] {
        match self {
            Category::City => vocabulary::CITIES,
            Category::Town => vocabulary::TOWNS,
            Category::Country => vocabulary::COUNTRIES,
            Category::SpeakerMentioned => vocabulary::SPEAKER_REFERENCES,
            _ => &[],
        }
    }

    pub fn builtin_warning_exceptions(&self) -> &'static [&'static str] {
        match self {
            Category::City => vocabulary::CITY_WARNING_EXCEPTIONS,
            _ => &[],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Category::ALL
            .into_iter()
            .find(|c| c.tag() == wanted)
            .ok_or_else(|| ConfigError::UnknownCategory(s.to_string()))
    }
}

/// A category together with its effective terms and warning exceptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryVocabulary {
    pub category: Category,
    pub terms: Vec<String>,
    pub warning_exceptions: HashSet<String>,
}

impl CategoryVocabulary {
    /// Terms and exceptions are ASCII-lowercased, the same folding the matcher
    /// applies to paragraphs; empty and duplicate terms are dropped.
    pub fn new(
        category: Category,
        terms: impl IntoIterator<Item = impl AsRef<str>>,
        warning_exceptions: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        let mut seen = HashSet::new();
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_ascii_lowercase())
            .filter(|t| !t.is_empty() && seen.insert(t.clone()))
            .collect();
        let warning_exceptions = warning_exceptions
            .into_iter()
            .map(|t| t.as_ref().trim().to_ascii_lowercase())
            .collect();
        Self {
            category,
            terms,
            warning_exceptions,
        }
    }

    pub fn builtin(category: Category) -> Self {
        Self::new(
            category,
            category.builtin_terms(),
            category.builtin_warning_exceptions(),
        )
    }

    /// Severity for an occurrence of `term`
    pub fn severity_for(&self, term: &str) -> Severity {
        if self.warning_exceptions.contains(term) {
            Severity::Warning
        } else {
            Severity::Info
        }
    }
}
