//! Library-level scan tests
//!
//! Runs whole documents through `scan_document` and the individual passes to
//! verify the report contract:
//! - per-occurrence issues agree with the totals
//! - pass order does not change any pass's output
//! - contextual number classification
//! - most-mentioned tie breaking

use mention_scan::category::{Category, CategoryVocabulary};
use mention_scan::config::ScanConfig;
use mention_scan::models::{Issue, Report, Severity};
use mention_scan::passes::{default_passes, process, PassEngine, StatisticsPass, VocabularyPass};
use mention_scan::{document, scan_document};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    document::load_text(&path).expect("fixture readable")
}

fn scan_sample() -> Report {
    scan_document(&fixture("hansard-sample.txt"), &ScanConfig::default()).expect("scan")
}

fn messages<'a>(report: &'a Report, tag: &'a str) -> Vec<&'a str> {
    report.tagged(tag).map(|i| i.message.as_str()).collect()
}

/// Count from a "Found N occurrences of X" totals message
fn totals_count(issue: &Issue) -> usize {
    issue
        .message
        .strip_prefix("Found ")
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|n| n.parse().ok())
        .expect("totals message carries a count")
}

#[test]
fn test_sample_vocabulary_issues() {
    let report = scan_sample();

    assert_eq!(
        messages(&report, "city-cropped-up"),
        vec!["Found belfast", "Found derry", "Found newry", "Found belfast"]
    );
    assert_eq!(
        messages(&report, "city-totals"),
        vec![
            "Found 2 occurrences of Belfast",
            "Found 1 occurrences of Derry",
            "Found 1 occurrences of Newry"
        ]
    );
    assert_eq!(
        messages(&report, "town-cropped-up"),
        vec!["Found bangor", "Found omagh"]
    );
    assert_eq!(
        messages(&report, "country-cropped-up"),
        vec!["Found france", "Found germany"]
    );
    assert_eq!(
        messages(&report, "speaker-mentioned-totals"),
        vec![
            "Found 1 occurrences of Mr Speaker",
            "Found 1 occurrences of Madam Speaker"
        ]
    );
}

#[test]
fn test_sample_locations_and_severity() {
    let report = scan_sample();
    let belfast: Vec<&Issue> = report.tagged("city-cropped-up").collect();

    assert_eq!(belfast[0].line_number, Some(1));
    assert_eq!(belfast[0].severity, Severity::Warning);
    assert_eq!(belfast[3].line_number, Some(10));

    let derry = belfast[1];
    assert_eq!(derry.severity, Severity::Info);
    let content = derry.content.as_ref().expect("occurrence carries its paragraph");
    let span = &content.spans[0];
    let highlighted: String = content
        .text
        .chars()
        .skip(span.start_offset)
        .take(span.end_offset - span.start_offset)
        .collect();
    assert_eq!(highlighted, "Derry");
    assert_eq!(derry.character_number, Some(span.start_offset));
    assert_eq!(span.tags, vec!["city".to_string()]);
}

#[test]
fn test_sample_statistics() {
    let report = scan_sample();

    assert_eq!(
        messages(&report, "percent-cropped-up"),
        vec!["Found 12%", "Found 12%", "Found 7%"]
    );
    assert_eq!(
        messages(&report, "date-cropped-up"),
        vec!["Found date 15 august 2020", "Found date june 2021"]
    );
    assert_eq!(messages(&report, "article-cropped-up"), vec!["Found article 50"]);
    assert_eq!(
        messages(&report, "stat-cropped-up"),
        vec![
            "Found statistic 15",
            "Found statistic 3",
            "Found statistic 400",
            "Found statistic 400"
        ]
    );

    assert_eq!(
        messages(&report, "percent-most-mentioned"),
        vec!["Most mentioned percentage: 12% (2 occurrences)"]
    );
    assert_eq!(
        messages(&report, "stat-most-mentioned"),
        vec!["Most mentioned statistic: 400 (2 occurrences)"]
    );
    // Both dates occur once: the first one seen wins
    assert_eq!(
        messages(&report, "date-most-mentioned"),
        vec!["Most mentioned date: 15 August 2020 (1 occurrences)"]
    );
    for issue in report.issues.iter().filter(|i| i.tag.ends_with("-most-mentioned")) {
        assert_eq!(issue.severity, Severity::Warning);
    }
}

#[test]
fn test_cropped_up_matches_totals() {
    let report = scan_sample();

    for category in Category::ALL {
        let occurrences = report.tagged(&category.occurrence_tag()).count();
        let totals: usize = report
            .tagged(&category.totals_tag())
            .map(totals_count)
            .sum();
        assert_eq!(occurrences, totals, "category {}", category);
    }

    // Per term, for a vocabulary category
    let mut per_term: HashMap<String, usize> = HashMap::new();
    for issue in report.tagged("city-cropped-up") {
        let term = issue.message.trim_start_matches("Found ").to_string();
        *per_term.entry(term).or_default() += 1;
    }
    for issue in report.tagged("city-totals") {
        let term = issue
            .message
            .rsplit(" of ")
            .next()
            .expect("term")
            .to_lowercase();
        assert_eq!(per_term.get(&term).copied(), Some(totals_count(issue)));
    }
}

#[test]
fn test_pass_order_does_not_change_output() {
    let text = fixture("hansard-sample.txt");
    let paragraphs = document::split_into_paragraphs(&text);

    let passes = default_passes(&ScanConfig::default());
    let mut reversed = passes.clone();
    reversed.reverse();

    let mut forward_engine = PassEngine::new(2);
    forward_engine.register_all(passes);
    let mut reverse_engine = PassEngine::new(2);
    reverse_engine.register_all(reversed);

    let forward = forward_engine.run(&paragraphs, "test").expect("run");
    let backward = reverse_engine.run(&paragraphs, "test").expect("run");

    assert_eq!(forward.issues.len(), backward.issues.len());
    for category in Category::ALL {
        let tag = category.totals_tag();
        let a: Vec<&Issue> = forward.tagged(&tag).collect();
        let b: Vec<&Issue> = backward.tagged(&tag).collect();
        assert_eq!(a, b, "totals for {}", category);
    }
}

#[test]
fn test_whole_word_boundaries() {
    let pass = VocabularyPass::new(CategoryVocabulary::builtin(Category::City));

    let issues = process("belfast is nice", &pass);
    assert_eq!(issues.iter().filter(|i| i.tag == "city-cropped-up").count(), 1);

    assert!(process("belfastor", &pass).is_empty());
}

#[test]
fn test_contextual_classification() {
    let pass = StatisticsPass::builtin();

    let issues = process("the treaty was signed 15 august 2020 in brussels", &pass);
    let dates: Vec<&str> = issues
        .iter()
        .filter(|i| i.tag == "date-cropped-up")
        .map(|i| i.message.as_str())
        .collect();
    assert_eq!(dates, vec!["Found date 15 august 2020"]);

    let issues = process("unemployment grew by 10 percent", &pass);
    assert!(issues.iter().any(|i| i.tag == "percent-cropped-up" && i.message == "Found 10%"));
    assert!(issues.iter().any(|i| i.tag == "percent-totals" && i.message == "Found 1 occurrences of 10"));

    let issues = process("see article 50 of the treaty", &pass);
    assert!(issues.iter().any(|i| i.tag == "article-cropped-up" && i.message == "Found article 50"));
}

#[test]
fn test_most_mentioned_tie_first_wins() {
    let pass = StatisticsPass::builtin();
    let issues = process("we counted 7 and 9\n\nthen 9 and 7 again", &pass);
    let top: Vec<&str> = issues
        .iter()
        .filter(|i| i.tag == "stat-most-mentioned")
        .map(|i| i.message.as_str())
        .collect();
    assert_eq!(top, vec!["Most mentioned statistic: 7 (2 occurrences)"]);
}

#[test]
fn test_empty_document() {
    let report = scan_document("", &ScanConfig::default()).expect("scan");
    assert!(report.is_empty());

    let report = scan_document("\n\n----\n\n", &ScanConfig::default()).expect("scan");
    assert!(report.is_empty());
}

#[test]
fn test_custom_vocabulary_and_exceptions() {
    let config = ScanConfig::from_toml_str(
        r#"
[categories.town]
terms = ["Bangor", "Holywood"]
warning_exceptions = ["bangor"]

[categories.city]
enabled = false
"#,
        std::path::Path::new("mention-scan.toml"),
    )
    .expect("valid config");

    let report = scan_document("Bangor and Holywood and Belfast", &config).expect("scan");
    let towns: Vec<&Issue> = report.tagged("town-cropped-up").collect();
    assert_eq!(towns.len(), 2);
    assert_eq!(towns[0].severity, Severity::Warning);
    assert_eq!(towns[1].severity, Severity::Info);
    assert_eq!(report.tagged("city-cropped-up").count(), 0);
}

#[test]
fn test_engine_with_single_pass_arc() {
    let mut engine = PassEngine::new(1);
    engine.register(Arc::new(VocabularyPass::new(CategoryVocabulary::builtin(
        Category::Country,
    ))));
    let paragraphs = document::split_into_paragraphs("Trade with France and Northern Ireland");
    let report = engine.run(&paragraphs, "test").expect("run");
    assert_eq!(report.tagged("country-cropped-up").count(), 2);
}
