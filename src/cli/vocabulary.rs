//! Vocabulary command - print the effective term lists
//!
//! Uses `mention-scan.toml` from the current directory when present.

use anyhow::Result;
use console::style;
use mention_scan::category::Category;
use mention_scan::config::load_scan_config;
use std::path::Path;

/// Run the vocabulary command
pub fn run(category: Option<&str>) -> Result<()> {
    let config = load_scan_config(Path::new("."));
    let categories = match category {
        Some(c) => vec![c.parse::<Category>()?],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        let vocabulary = config.vocabulary(category);
        let status = if config.is_enabled(category) {
            String::new()
        } else {
            format!(" {}", style("disabled").dim())
        };
        println!(
            "{} ({}){}",
            style(category.tag()).bold(),
            category.label(),
            status
        );

        if category.is_statistic() {
            println!("  {}", style("values are read from the transcript").dim());
            for value in &vocabulary.warning_exceptions {
                println!("  {:<24} {}", value, style("warning").yellow());
            }
        }
        for term in &vocabulary.terms {
            let marker = if vocabulary.warning_exceptions.contains(term) {
                style("warning").yellow().to_string()
            } else {
                String::new()
            };
            println!("  {:<24} {}", term, marker);
        }
        println!();
    }

    Ok(())
}
