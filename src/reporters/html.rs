//! HTML reporter with embedded styles
//!
//! Generates a standalone HTML page that can be viewed in any browser.
//! Includes:
//! - Severity counts
//! - Issues in emission order, each with its paragraph
//! - Highlighted spans as `<mark>` elements with the span note as tooltip

use crate::models::{AnnotatedContent, Issue, Report, Severity};
use anyhow::Result;
use chrono::Local;

/// Render report as standalone HTML
pub fn render(report: &Report) -> Result<String> {
    let mut html = String::new();

    html.push_str(&render_head(report));
    html.push_str("<body>\n<div class=\"container\">\n");
    html.push_str(&render_header(report));

    html.push_str("<div class=\"content\">\n");
    html.push_str(&render_summary(report));
    html.push_str(&render_issues(report));
    html.push_str("</div>\n"); // content

    html.push_str(&render_footer());
    html.push_str("</div>\n</body>\n</html>");

    Ok(html)
}

fn render_head(report: &Report) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Mention Scan - {}</title>
    <style>
{CSS}
    </style>
</head>
"#,
        html_escape(&report.processor)
    )
}

fn render_header(report: &Report) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        r#"<div class="header">
    <h1>Mention Scan Report</h1>
    <p class="timestamp">{} &middot; Generated {}</p>
</div>
"#,
        html_escape(&report.processor),
        timestamp
    )
}

fn render_summary(report: &Report) -> String {
    let summary = report.summary();
    format!(
        r#"<div class="section">
    <h2 class="section-title">Summary</h2>
    <div class="summary-grid">
        <div class="summary-card total"><div class="count">{}</div><div class="label">Total</div></div>
        <div class="summary-card error"><div class="count">{}</div><div class="label">Error</div></div>
        <div class="summary-card warning"><div class="count">{}</div><div class="label">Warning</div></div>
        <div class="summary-card info"><div class="count">{}</div><div class="label">Info</div></div>
    </div>
</div>
"#,
        summary.total, summary.error, summary.warning, summary.info
    )
}

fn render_issues(report: &Report) -> String {
    let mut html = String::from(
        "<div class=\"section\">\n    <h2 class=\"section-title\">Issues</h2>\n",
    );

    if report.is_empty() {
        html.push_str("    <p class=\"empty\">Nothing found.</p>\n");
    } else {
        html.push_str("    <div class=\"issues\">\n");
        for issue in &report.issues {
            html.push_str(&render_issue(issue));
        }
        html.push_str("    </div>\n");
    }

    html.push_str("</div>\n");
    html
}

fn render_issue(issue: &Issue) -> String {
    let location = match (issue.line_number, issue.character_number) {
        (Some(l), Some(c)) => format!("<span class=\"location\">line {}, char {}</span>", l, c),
        (Some(l), None) => format!("<span class=\"location\">line {}</span>", l),
        _ => String::new(),
    };
    let content = issue
        .content
        .as_ref()
        .map(|c| format!("\n            <p class=\"paragraph\">{}</p>", render_content(c)))
        .unwrap_or_default();

    format!(
        r#"        <div class="issue {}">
            <div class="issue-header"><span class="severity-badge {}">{}</span><code class="tag">{}</code>{}</div>
            <div class="message">{}</div>{}
        </div>
"#,
        severity_class(issue.severity),
        severity_class(issue.severity),
        issue.severity,
        html_escape(&issue.tag),
        location,
        html_escape(&issue.message),
        content
    )
}

/// Paragraph text with each span wrapped in a `<mark>`
fn render_content(content: &AnnotatedContent) -> String {
    content
        .segments()
        .into_iter()
        .map(|(text, span)| match span {
            Some(span) => format!(
                "<mark class=\"{}\" title=\"{}\" data-tags=\"{}\">{}</mark>",
                severity_class(span.severity),
                html_escape(&span.note),
                html_escape(&span.tags.join(" ")),
                html_escape(&text)
            ),
            None => html_escape(&text),
        })
        .collect()
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    }
}

fn render_footer() -> String {
    r#"<div class="footer">
    <p>Generated by mention-scan</p>
</div>
"#
    .to_string()
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// Embedded CSS
const CSS: &str = r#"
:root {
    --error-color: #dc2626;
    --warning-color: #d97706;
    --info-color: #6b7280;
    --background-color: #f8fafc;
    --card-background: #ffffff;
    --text-color: #1e293b;
    --muted-color: #64748b;
    --border-color: #e2e8f0;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: Georgia, 'Times New Roman', serif;
    background: var(--background-color);
    color: var(--text-color);
    line-height: 1.6;
}

.container { max-width: 1000px; margin: 0 auto; padding: 2rem 1rem; }

.header { text-align: center; margin-bottom: 2rem; }
.header h1 { font-size: 2rem; }
.timestamp { color: var(--muted-color); font-size: 0.9rem; }

.section {
    background: var(--card-background);
    border: 1px solid var(--border-color);
    border-radius: 8px;
    padding: 1.5rem;
    margin-bottom: 1.5rem;
}
.section-title { font-size: 1.25rem; margin-bottom: 1rem; }

.summary-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
.summary-card { text-align: center; padding: 1rem; border-radius: 6px; background: var(--background-color); }
.summary-card .count { font-size: 1.75rem; font-weight: bold; }
.summary-card.error .count { color: var(--error-color); }
.summary-card.warning .count { color: var(--warning-color); }
.summary-card.info .count { color: var(--info-color); }

.issue { border-left: 4px solid var(--border-color); padding: 0.75rem 1rem; margin-bottom: 0.75rem; }
.issue.error { border-left-color: var(--error-color); }
.issue.warning { border-left-color: var(--warning-color); }
.issue.info { border-left-color: var(--info-color); }
.issue-header { display: flex; gap: 0.75rem; align-items: baseline; }
.severity-badge { font-size: 0.75rem; text-transform: uppercase; font-weight: bold; }
.severity-badge.error { color: var(--error-color); }
.severity-badge.warning { color: var(--warning-color); }
.severity-badge.info { color: var(--info-color); }
.location { color: var(--muted-color); font-size: 0.85rem; margin-left: auto; }
.paragraph { margin-top: 0.5rem; color: var(--muted-color); }

mark { padding: 0 2px; border-radius: 3px; color: var(--text-color); cursor: help; }
mark.error { background: #fecaca; }
mark.warning { background: #fde68a; }
mark.info { background: #e2e8f0; }

.empty { color: var(--muted-color); font-style: italic; }
.footer { text-align: center; color: var(--muted-color); font-size: 0.85rem; margin-top: 2rem; }

@media (max-width: 640px) {
    .summary-grid { grid-template-columns: repeat(2, 1fr); }
}
"#;
