//! CLI command definitions and handlers

mod init;
mod scan;
mod vocabulary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > 64 {
        Err("workers cannot exceed 64".to_string())
    } else {
        Ok(n)
    }
}

/// mention-scan - find places, speakers and statistics in debate transcripts
#[derive(Parser, Debug)]
#[command(name = "mention-scan")]
#[command(
    version,
    about = "Find mentions of places, speaker references, dates and statistics in debate transcripts",
    long_about = "mention-scan splits a plain-text transcript into paragraphs and reports every \
mention of a city, town, country or speaker reference, and every number it can classify as \
an article number, percentage, date or statistic. Each category ends with totals, and the \
statistic categories also report their most mentioned value.",
    after_help = "\
Examples:
  mention-scan scan debate.txt                        Scan with every category enabled
  mention-scan scan debate.txt --format json          JSON output for scripting
  mention-scan scan debate.txt --only city --only percent
  mention-scan scan debate.txt --format html -o report.html
  mention-scan init                                   Write mention-scan.toml here
  mention-scan vocabulary --category town             List the built-in town names"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a transcript and report every mention found
    #[command(after_help = "\
Categories: city, town, country, speaker-mentioned, article, percent, date, stat")]
    Scan {
        /// Plain-text transcript to scan
        file: PathBuf,

        /// Output format: text, json, html (default: from config, else text)
        #[arg(long, short = 'f', value_parser = ["text", "json", "html"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Only scan these categories (repeatable)
        #[arg(long, value_name = "CATEGORY")]
        only: Vec<String>,

        /// Minimum severity to report (info, warning, error)
        #[arg(long, value_parser = ["info", "warning", "error"])]
        min_severity: Option<String>,

        /// Number of parallel workers (1-64, default: one per core)
        #[arg(long, value_parser = parse_workers)]
        workers: Option<usize>,

        /// Config file (default: mention-scan.toml next to the transcript)
        #[arg(long, env = "MENTION_SCAN_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Write an example mention-scan.toml
    Init {
        /// Directory to write into
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print the built-in vocabulary
    Vocabulary {
        /// Only print this category
        #[arg(long)]
        category: Option<String>,
    },
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Scan {
            file,
            format,
            output,
            only,
            min_severity,
            workers,
            config,
        } => scan::run(
            &file,
            format,
            output.as_deref(),
            &only,
            min_severity,
            workers,
            config.as_deref(),
        ),

        Commands::Init { path } => init::run(&path),

        Commands::Vocabulary { category } => vocabulary::run(category.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workers() {
        assert_eq!(parse_workers("4"), Ok(4));
        assert!(parse_workers("0").is_err());
        assert!(parse_workers("65").is_err());
        assert!(parse_workers("many").is_err());
    }

    #[test]
    fn test_cli_parses_scan() {
        let cli = Cli::try_parse_from([
            "mention-scan",
            "scan",
            "debate.txt",
            "--only",
            "city",
            "--only",
            "percent",
            "-f",
            "json",
        ])
        .expect("parse");
        match cli.command {
            Commands::Scan { file, only, format, .. } => {
                assert_eq!(file, PathBuf::from("debate.txt"));
                assert_eq!(only, vec!["city", "percent"]);
                assert_eq!(format.as_deref(), Some("json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["mention-scan", "scan", "x.txt", "-f", "sarif"]).is_err());
    }
}
