//! mention-scan - transcript term finder
//!
//! Scans plain-text debate transcripts for mentions of places, speaker
//! references and numbers, reports each occurrence with its paragraph
//! highlighted, and summarises totals and the most mentioned value of each
//! statistic category.
//!
//! ```no_run
//! use mention_scan::{config::ScanConfig, scan_document};
//!
//! let report = scan_document("Mr Speaker, unemployment in Newry is 12 percent.", &ScanConfig::default())?;
//! for issue in &report.issues {
//!     println!("{} {}", issue.tag, issue.message);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod category;
pub mod config;
pub mod document;
pub mod error;
pub mod matching;
pub mod models;
pub mod passes;
pub mod reporters;
pub mod tally;
pub mod vocabulary;

use crate::config::ScanConfig;
use crate::document::split_into_paragraphs;
use crate::models::Report;
use crate::passes::{default_passes, PassEngine};
use anyhow::Result;

/// Processor code stamped on every report
pub const PROCESSOR_CODE: &str = "mention-scan:1";

/// Scan a whole document with every pass enabled in `config`
pub fn scan_document(text: &str, config: &ScanConfig) -> Result<Report> {
    let paragraphs = split_into_paragraphs(text);
    let mut engine = PassEngine::new(config.defaults.workers.unwrap_or(0));
    engine.register_all(default_passes(config));
    engine.run(&paragraphs, PROCESSOR_CODE)
}
