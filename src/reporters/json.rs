//! JSON reporter
//!
//! Outputs the report, plus a severity summary, as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::{Issue, IssuesSummary, Report};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    processor: &'a str,
    summary: IssuesSummary,
    issues: &'a [Issue],
}

impl<'a> From<&'a Report> for JsonReport<'a> {
    fn from(report: &'a Report) -> Self {
        Self {
            processor: &report.processor,
            summary: report.summary(),
            issues: &report.issues,
        }
    }
}

/// Render report as JSON
pub fn render(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::from(report))?)
}

/// Render report as compact JSON (single line)
pub fn render_compact(report: &Report) -> Result<String> {
    Ok(serde_json::to_string(&JsonReport::from(report))?)
}
