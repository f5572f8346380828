//! Text (terminal) reporter with colors and inline highlights

use crate::models::{AnnotatedContent, Issue, Report, Severity};
use anyhow::Result;

/// Severity colors
fn severity_color(severity: &Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31m",   // Red
        Severity::Warning => "\x1b[33m", // Yellow
        Severity::Info => "\x1b[90m",    // Gray
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Severity tag
fn severity_tag(severity: &Severity) -> &'static str {
    match severity {
        Severity::Error => "[E]",
        Severity::Warning => "[W]",
        Severity::Info => "[I]",
    }
}

/// Render report as formatted terminal output
pub fn render(report: &Report) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Mention Scan{RESET}  {DIM}{}{RESET}\n", report.processor));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));

    let summary = report.summary();
    out.push_str(&format!("{BOLD}ISSUES{RESET} ({} total)\n", summary.total));

    let mut summary_parts = Vec::new();
    if summary.error > 0 {
        summary_parts.push(format!("\x1b[31m{} error{RESET}", summary.error));
    }
    if summary.warning > 0 {
        summary_parts.push(format!("\x1b[33m{} warning{RESET}", summary.warning));
    }
    if summary.info > 0 {
        summary_parts.push(format!("\x1b[90m{} info{RESET}", summary.info));
    }
    if !summary_parts.is_empty() {
        out.push_str(&format!("  {}\n", summary_parts.join(" | ")));
    }
    out.push('\n');

    if report.is_empty() {
        out.push_str(&format!("  {DIM}Nothing found.{RESET}\n\n"));
        return Ok(out);
    }

    for issue in &report.issues {
        out.push_str(&render_issue(issue));
    }
    out.push('\n');

    Ok(out)
}

fn render_issue(issue: &Issue) -> String {
    let sev_c = severity_color(&issue.severity);
    let mut line = format!(
        "  {sev_c}{}{RESET}  {:<28} {}",
        severity_tag(&issue.severity),
        issue.tag,
        issue.message
    );
    if let Some(location) = format_location(issue) {
        line.push_str(&format!("  {DIM}{}{RESET}", location));
    }
    line.push('\n');

    if let Some(content) = &issue.content {
        line.push_str(&format!("      {}\n", highlight(content)));
    }
    line
}

fn format_location(issue: &Issue) -> Option<String> {
    match (issue.line_number, issue.character_number) {
        (Some(l), Some(c)) => Some(format!("line {}, char {}", l, c)),
        (Some(l), None) => Some(format!("line {}", l)),
        _ => None,
    }
}

/// Paragraph text with highlighted spans wrapped in brackets
fn highlight(content: &AnnotatedContent) -> String {
    content
        .segments()
        .into_iter()
        .map(|(text, span)| match span {
            Some(span) => format!(
                "{BOLD}{}[{}]{RESET}",
                severity_color(&span.severity),
                text
            ),
            None => text,
        })
        .collect()
}
