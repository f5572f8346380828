//! End-of-document summaries: totals and most-mentioned issues

use crate::category::Category;
use crate::models::{Report, Severity};
use crate::tally::RunningTally;

/// Title-case like a prose heading: a letter is upper-cased when it follows a
/// non-letter, lower-cased otherwise ("15 august 2020" -> "15 August 2020").
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Display form of a value, with the `%` suffix for percentages
pub fn display_value(category: Category, value: &str) -> String {
    match category {
        Category::Percent => format!("{}%", title_case(value)),
        _ => title_case(value),
    }
}

/// One INFO `{category}-totals` issue per term seen at least once
pub fn emit_totals(report: &mut Report, category: Category, tally: &RunningTally) {
    let tag = category.totals_tag();
    for (term, count) in tally.nonzero() {
        report.add_issue(
            Severity::Info,
            tag.as_str(),
            format!("Found {} occurrences of {}", count, title_case(term)),
            None,
            None,
            None,
        );
    }
}

/// One WARNING `{category}-most-mentioned` issue naming the top value, if any
pub fn emit_most_mentioned(report: &mut Report, category: Category, tally: &RunningTally) {
    let Some((value, count)) = tally.most_mentioned() else {
        return;
    };
    report.add_issue(
        Severity::Warning,
        category.most_mentioned_tag(),
        format!(
            "Most mentioned {}: {} ({} occurrences)",
            category.label(),
            display_value(category, value),
            count
        ),
        None,
        None,
        None,
    );
}
