//! Core data models for mention-scan
//!
//! These models are handed from the passes to the reporters:
//! - `Issue` is one report entry (severity, tag, message, location, highlights)
//! - `AnnotatedContent` is a paragraph plus the spans to highlight in it
//! - `Report` collects issues in emission order

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Severity levels for issues
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(ConfigError::InvalidSeverity(s.to_string())),
        }
    }
}

/// A highlighted span inside an annotated paragraph.
///
/// Offsets are character positions (not bytes) relative to the paragraph text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub note: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub severity: Severity,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A paragraph's text paired with the spans to highlight in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedContent {
    pub text: String,
    #[serde(default)]
    pub spans: Vec<HighlightSpan>,
}

impl AnnotatedContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Add a highlight. Out-of-range spans are clamped to the text length.
    pub fn add(
        &mut self,
        note: impl Into<String>,
        start_offset: usize,
        end_offset: usize,
        severity: Severity,
        tags: Vec<String>,
    ) -> &mut Self {
        let len = self.text.chars().count();
        let end = end_offset.min(len);
        self.spans.push(HighlightSpan {
            note: note.into(),
            start_offset: start_offset.min(end),
            end_offset: end,
            severity,
            tags,
        });
        self
    }

    /// Split the text into consecutive segments, each either plain or covered
    /// by one span. Spans overlapping an earlier span are dropped.
    pub fn segments(&self) -> Vec<(String, Option<&HighlightSpan>)> {
        let chars: Vec<char> = self.text.chars().collect();
        let mut spans: Vec<&HighlightSpan> = self.spans.iter().collect();
        spans.sort_by_key(|s| (s.start_offset, s.end_offset));

        let mut segments = Vec::new();
        let mut cursor = 0usize;
        for span in spans {
            if span.start_offset < cursor || span.start_offset == span.end_offset {
                continue;
            }
            if span.start_offset > cursor {
                segments.push((chars[cursor..span.start_offset].iter().collect(), None));
            }
            segments.push((
                chars[span.start_offset..span.end_offset].iter().collect(),
                Some(span),
            ));
            cursor = span.end_offset;
        }
        if cursor < chars.len() {
            segments.push((chars[cursor..].iter().collect(), None));
        }
        segments
    }
}

/// One entry of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub tag: String,
    pub message: String,
    #[serde(default)]
    pub line_number: Option<usize>,
    #[serde(default)]
    pub character_number: Option<usize>,
    #[serde(default)]
    pub content: Option<AnnotatedContent>,
}

/// Summary of issues by severity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuesSummary {
    pub error: usize,
    pub warning: usize,
    pub info: usize,
    pub total: usize,
}

impl IssuesSummary {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut summary = Self::default();
        for issue in issues {
            match issue.severity {
                Severity::Error => summary.error += 1,
                Severity::Warning => summary.warning += 1,
                Severity::Info => summary.info += 1,
            }
            summary.total += 1;
        }
        summary
    }
}

/// Issues collected from one or more passes, in emission order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Code of the processor that produced the report (e.g. "mention-scan:1")
    pub processor: String,
    pub issues: Vec<Issue>,
}

impl Report {
    pub fn new(processor: impl Into<String>) -> Self {
        Self {
            processor: processor.into(),
            issues: Vec::new(),
        }
    }

    /// Append an issue. Mirrors the emitter interface the passes write to.
    pub fn add_issue(
        &mut self,
        severity: Severity,
        tag: impl Into<String>,
        message: impl Into<String>,
        line_number: Option<usize>,
        character_number: Option<usize>,
        content: Option<AnnotatedContent>,
    ) {
        self.issues.push(Issue {
            severity,
            tag: tag.into(),
            message: message.into(),
            line_number,
            character_number,
            content,
        });
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    pub fn summary(&self) -> IssuesSummary {
        IssuesSummary::from_issues(&self.issues)
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues carrying exactly this tag
    pub fn tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Issue> + 'a {
        self.issues.iter().filter(move |i| i.tag == tag)
    }

    /// Drop issues below `min`. Relative order of the rest is kept.
    pub fn retain_min_severity(&mut self, min: Severity) {
        self.issues.retain(|i| i.severity >= min);
    }
}

/// Merge reports in the given order into one report under `processor`
pub fn combine_reports(processor: impl Into<String>, reports: impl IntoIterator<Item = Report>) -> Report {
    let mut combined = Report::new(processor);
    for report in reports {
        combined.extend(report.issues);
    }
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering_and_parsing() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
        assert_eq!("WARN".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);
        assert!("critical".parse::<Severity>().is_err());
    }

    #[test]
    fn test_summary_counts() {
        let mut report = Report::new("test");
        report.add_issue(Severity::Info, "a", "one", None, None, None);
        report.add_issue(Severity::Warning, "a", "two", Some(3), Some(0), None);
        report.add_issue(Severity::Info, "b", "three", None, None, None);

        let summary = report.summary();
        assert_eq!(summary.info, 2);
        assert_eq!(summary.warning, 1);
        assert_eq!(summary.error, 0);
        assert_eq!(summary.total, 3);
        assert_eq!(report.tagged("a").count(), 2);
    }

    #[test]
    fn test_retain_min_severity_keeps_order() {
        let mut report = Report::new("test");
        report.add_issue(Severity::Warning, "x", "first", None, None, None);
        report.add_issue(Severity::Info, "x", "dropped", None, None, None);
        report.add_issue(Severity::Error, "x", "second", None, None, None);
        report.retain_min_severity(Severity::Warning);

        let messages: Vec<&str> = report.issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_segments_split_on_spans() {
        let mut content = AnnotatedContent::new("we met in belfast today");
        content.add("Occurrence of Belfast", 10, 17, Severity::Warning, vec!["city".into()]);

        let segments = content.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].0, "we met in ");
        assert_eq!(segments[1].0, "belfast");
        assert!(segments[1].1.is_some());
        assert_eq!(segments[2].0, " today");
    }

    #[test]
    fn test_segments_skip_overlapping_and_clamp() {
        let mut content = AnnotatedContent::new("abcdef");
        content.add("first", 1, 4, Severity::Info, vec![]);
        content.add("overlap", 2, 5, Severity::Info, vec![]);
        content.add("clamped", 5, 99, Severity::Info, vec![]);

        let texts: Vec<String> = content.segments().into_iter().map(|(t, _)| t).collect();
        assert_eq!(texts, vec!["a", "bcd", "e", "f"]);
    }

    #[test]
    fn test_combine_reports_preserves_order() {
        let mut a = Report::new("a");
        a.add_issue(Severity::Info, "city-totals", "a1", None, None, None);
        let mut b = Report::new("b");
        b.add_issue(Severity::Info, "town-totals", "b1", None, None, None);

        let combined = combine_reports("all", vec![a, b]);
        assert_eq!(combined.processor, "all");
        assert_eq!(combined.issues[0].message, "a1");
        assert_eq!(combined.issues[1].message, "b1");
    }
}
