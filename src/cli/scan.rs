//! Scan command - run every enabled pass over one transcript

use anyhow::{Context, Result};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use mention_scan::category::Category;
use mention_scan::config::{load_config_file, load_scan_config, ScanConfig};
use mention_scan::document::{load_text, split_into_paragraphs};
use mention_scan::models::Severity;
use mention_scan::passes::{default_passes, PassEngineBuilder};
use mention_scan::reporters::{self, OutputFormat};
use mention_scan::PROCESSOR_CODE;
use std::path::Path;
use tracing::{debug, warn};

/// Run the scan command
///
/// Command-line flags win over `[defaults]` in the config file, which win
/// over the built-in defaults.
pub fn run(
    file: &Path,
    format: Option<String>,
    output: Option<&Path>,
    only: &[String],
    min_severity: Option<String>,
    workers: Option<usize>,
    config_path: Option<&Path>,
) -> Result<()> {
    let text = load_text(file)?;
    let mut config = resolve_config(file, config_path)?;

    if !only.is_empty() {
        let categories = only
            .iter()
            .map(|c| c.parse::<Category>())
            .collect::<Result<Vec<_>, _>>()?;
        config.restrict_to(&categories);
    }

    let format: OutputFormat = format
        .or_else(|| config.defaults.format.clone())
        .unwrap_or_else(|| "text".to_string())
        .parse()?;
    let min_severity: Severity = min_severity
        .or_else(|| config.defaults.min_severity.clone())
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or_default();
    let workers = workers.or(config.defaults.workers).unwrap_or(0);

    let paragraphs = split_into_paragraphs(&text);
    debug!(
        "{}: {} paragraphs, categories {:?}",
        file.display(),
        paragraphs.len(),
        config.enabled_categories()
    );

    let passes = default_passes(&config);
    if passes.is_empty() {
        warn!("Every category is disabled, nothing to scan");
    }

    let progress = create_progress_bar(passes.len() as u64)?;
    let mut builder = PassEngineBuilder::new().workers(workers).passes(passes);
    if let Some(bar) = &progress {
        let bar = bar.clone();
        builder = builder.on_progress(Box::new(move |name: &str, done: usize, _total: usize| {
            bar.set_message(name.to_string());
            bar.set_position(done as u64);
        }));
    }
    let engine = builder.build();

    let mut report = engine.run(&paragraphs, PROCESSOR_CODE)?;
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    report.retain_min_severity(min_severity);
    let rendered = reporters::report_with_format(&report, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            eprintln!(
                "{} {} report written to {}",
                style("✓").green(),
                format,
                style(path.display()).cyan()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// An explicit `--config` must load; the implicit one next to the
/// transcript falls back to defaults.
fn resolve_config(file: &Path, config_path: Option<&Path>) -> Result<ScanConfig> {
    if let Some(path) = config_path {
        return Ok(load_config_file(path)?);
    }
    let dir = file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok(load_scan_config(dir))
}

/// Progress bar on stderr, only when stderr is a terminal
fn create_progress_bar(len: u64) -> Result<Option<ProgressBar>> {
    if len == 0 || !Term::stderr().is_term() {
        return Ok(None);
    }
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
        .progress_chars("█▓▒░  ");
    let bar = ProgressBar::new(len);
    bar.set_style(style);
    Ok(Some(bar))
}
