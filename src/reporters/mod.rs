//! Output reporters for scan results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors and inline highlights
//! - `json` - Machine-readable JSON
//! - `html` - Standalone HTML page with highlighted paragraphs

mod html;
mod json;
mod text;

use crate::error::ConfigError;
use crate::models::Report;
use anyhow::Result;
use std::str::FromStr;

pub use json::render_compact as render_json_compact;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

/// Render a report in the specified format
pub fn report(report: &Report, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(report, fmt)
}

/// Render a report using an OutputFormat enum
pub fn report_with_format(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Html => html::render(report),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Html => "html",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Create a small Report for testing
    pub(crate) fn test_report() -> Report {
        use crate::models::{AnnotatedContent, Severity};

        let mut report = Report::new("mention-scan:1");
        let mut content = AnnotatedContent::new("We met in Belfast & <Derry>");
        content.add("Occurrence of Belfast", 10, 17, Severity::Warning, vec!["city".into()]);
        report.add_issue(
            Severity::Warning,
            "city-cropped-up",
            "Found belfast",
            Some(4),
            Some(10),
            Some(content),
        );
        report.add_issue(
            Severity::Info,
            "city-totals",
            "Found 1 occurrences of Belfast",
            None,
            None,
            None,
        );
        report.add_issue(
            Severity::Warning,
            "stat-most-mentioned",
            "Most mentioned statistic: 12 (3 occurrences)",
            None,
            None,
            None,
        );
        report
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("html").unwrap(), OutputFormat::Html);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_report_dispatch() {
        let rendered = report(&test_report(), "json").expect("render");
        assert!(rendered.trim_start().starts_with('{'));
        assert!(report(&test_report(), "yaml").is_err());
        assert_eq!(file_extension(OutputFormat::Html), "html");
    }
}
