//! Base pass trait and types
//!
//! This module defines the core abstractions for scanning a document:
//! - `Pass` trait that every category pass implements
//! - `PassResult` for capturing one pass's execution
//! - `ScanSummary` for aggregate statistics over a run

use crate::category::Category;
use crate::document::Paragraph;
use crate::models::{Issue, Report, Severity};
use anyhow::Result;
use std::collections::HashMap;

/// Result from running a single pass
#[derive(Debug, Clone)]
pub struct PassResult {
    /// Name of the pass that produced these results
    pub pass_name: String,
    /// Issues emitted by the pass, in emission order
    pub issues: Vec<Issue>,
    /// Execution time in milliseconds
    pub duration_ms: u64,
    /// Whether the pass completed successfully
    pub success: bool,
    /// Error message if the pass failed
    pub error: Option<String>,
}

impl PassResult {
    /// Create a successful result
    pub fn success(pass_name: String, issues: Vec<Issue>, duration_ms: u64) -> Self {
        Self {
            pass_name,
            issues,
            duration_ms,
            success: true,
            error: None,
        }
    }

    /// Create a failed result
    pub fn failure(pass_name: String, error: String, duration_ms: u64) -> Self {
        Self {
            pass_name,
            issues: Vec::new(),
            duration_ms,
            success: false,
            error: Some(error),
        }
    }
}

/// One independent scan over the document.
///
/// A pass owns its tallies for the duration of `scan` and shares nothing
/// mutable with other passes, so the engine may run passes concurrently.
///
/// # Example Implementation
///
/// ```ignore
/// pub struct ShoutPass;
///
/// impl Pass for ShoutPass {
///     fn name(&self) -> &'static str {
///         "shout-finder"
///     }
///
///     fn description(&self) -> &'static str {
///         "Finds paragraphs written in capitals"
///     }
///
///     fn categories(&self) -> Vec<Category> {
///         vec![]
///     }
///
///     fn scan(&self, paragraphs: &[Paragraph], report: &mut Report) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait Pass: Send + Sync {
    /// Unique identifier for this pass (e.g. "city-finder")
    fn name(&self) -> &'static str;

    /// Human-readable description of what this pass finds
    fn description(&self) -> &'static str;

    /// Categories whose issues this pass emits
    fn categories(&self) -> Vec<Category>;

    /// Scan every paragraph, writing issues to `report`.
    ///
    /// Per-occurrence issues come first in paragraph order, then totals,
    /// then any most-mentioned summaries.
    fn scan(&self, paragraphs: &[Paragraph], report: &mut Report) -> Result<()>;
}

/// Progress callback for pass execution: (pass name, completed, total)
pub type ProgressCallback = Box<dyn Fn(&str, usize, usize) + Send + Sync>;

/// Summary statistics from running all passes
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// Total number of passes run
    pub passes_run: usize,
    /// Number of passes that succeeded
    pub passes_succeeded: usize,
    /// Number of passes that failed
    pub passes_failed: usize,
    /// Total issues across all passes
    pub total_issues: usize,
    /// Issues by severity
    pub by_severity: HashMap<Severity, usize>,
    /// Total execution time in milliseconds
    pub total_duration_ms: u64,
}

impl ScanSummary {
    /// Update summary with a pass result
    pub fn add_result(&mut self, result: &PassResult) {
        self.passes_run += 1;
        self.total_duration_ms += result.duration_ms;

        if result.success {
            self.passes_succeeded += 1;
            self.total_issues += result.issues.len();

            for issue in &result.issues {
                *self.by_severity.entry(issue.severity).or_insert(0) += 1;
            }
        } else {
            self.passes_failed += 1;
        }
    }
}
