//! Pass execution engine with parallel support
//!
//! The PassEngine orchestrates the execution of all registered passes:
//! - Runs passes in parallel using rayon (they share no mutable state)
//! - Isolates failures and panics to the pass that caused them
//! - Merges issues in registration order, regardless of completion order
//! - Reports progress through callbacks
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      PassEngine                         │
//! ├─────────────────────────────────────────────────────────┤
//! │  1. Register passes                                     │
//! │  2. Run all passes on a rayon pool                      │
//! │  3. Collect results in registration order               │
//! │  4. Merge issues into one report                        │
//! └─────────────────────────────────────────────────────────┘
//! ```

use crate::document::Paragraph;
use crate::models::{Report, Severity};
use crate::passes::base::{Pass, PassResult, ProgressCallback, ScanSummary};
use anyhow::Result;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Upper bound for auto-detected worker threads
const MAX_AUTO_WORKERS: usize = 16;

/// Orchestrates a scan across all registered passes
pub struct PassEngine {
    /// Registered passes, in report order
    passes: Vec<Arc<dyn Pass>>,
    /// Number of worker threads for parallel execution
    workers: usize,
    /// Progress callback for reporting execution status
    progress_callback: Option<ProgressCallback>,
}

impl PassEngine {
    /// Create a new pass engine
    ///
    /// # Arguments
    /// * `workers` - Number of worker threads (0 = auto-detect)
    pub fn new(workers: usize) -> Self {
        let actual_workers = if workers == 0 {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
                .min(MAX_AUTO_WORKERS)
        } else {
            workers
        };

        Self {
            passes: Vec::new(),
            workers: actual_workers,
            progress_callback: None,
        }
    }

    /// Set a progress callback
    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Register a pass. Its issues are merged after those of earlier passes.
    pub fn register(&mut self, pass: Arc<dyn Pass>) {
        debug!("Registering pass: {}", pass.name());
        self.passes.push(pass);
    }

    /// Register multiple passes at once
    pub fn register_all(&mut self, passes: impl IntoIterator<Item = Arc<dyn Pass>>) {
        for pass in passes {
            self.register(pass);
        }
    }

    /// Get the number of registered passes
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Get names of all registered passes
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run all passes and merge their issues into one report
    pub fn run(&self, paragraphs: &[Paragraph], processor: &str) -> Result<Report> {
        let (results, summary) = self.run_detailed(paragraphs)?;

        let mut report = Report::new(processor);
        for result in results {
            if result.success {
                report.extend(result.issues);
            } else if let Some(err) = &result.error {
                warn!("Pass {} failed: {}", result.pass_name, err);
            }
        }

        info!(
            "Scan complete: {} issues ({} warnings) from {}/{} passes in {}ms",
            report.issues.len(),
            summary.by_severity.get(&Severity::Warning).copied().unwrap_or(0),
            summary.passes_succeeded,
            summary.passes_run,
            summary.total_duration_ms
        );

        Ok(report)
    }

    /// Run all passes and return individual results in registration order
    pub fn run_detailed(&self, paragraphs: &[Paragraph]) -> Result<(Vec<PassResult>, ScanSummary)> {
        let start = Instant::now();
        info!(
            "Starting scan of {} paragraphs with {} passes on {} workers",
            paragraphs.len(),
            self.passes.len(),
            self.workers
        );

        let completed = Arc::new(AtomicUsize::new(0));
        let total = self.passes.len();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()?;

        // Indexed parallel collect keeps registration order
        let results: Vec<PassResult> = pool.install(|| {
            self.passes
                .par_iter()
                .map(|pass| {
                    let result = self.run_single_pass(pass, paragraphs);

                    let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                    if let Some(ref callback) = self.progress_callback {
                        callback(pass.name(), done, total);
                    }

                    result
                })
                .collect()
        });

        let mut summary = ScanSummary::default();
        for result in &results {
            summary.add_result(result);
        }
        summary.total_duration_ms = start.elapsed().as_millis() as u64;

        Ok((results, summary))
    }

    /// Run a single pass with error handling and timing
    fn run_single_pass(&self, pass: &Arc<dyn Pass>, paragraphs: &[Paragraph]) -> PassResult {
        let name = pass.name().to_string();
        let start = Instant::now();

        debug!("Running pass: {}", name);

        let scan_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut report = Report::new(name.as_str());
            pass.scan(paragraphs, &mut report).map(|_| report)
        }));

        let duration = start.elapsed().as_millis() as u64;
        match scan_result {
            Ok(Ok(report)) => {
                debug!(
                    "Pass {} emitted {} issues in {}ms",
                    name,
                    report.issues.len(),
                    duration
                );
                PassResult::success(name, report.issues, duration)
            }
            Ok(Err(e)) => {
                warn!("Pass {} failed: {}", name, e);
                PassResult::failure(name, e.to_string(), duration)
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                error!("Pass {} panicked: {}", name, panic_msg);
                PassResult::failure(name, format!("Panic: {}", panic_msg), duration)
            }
        }
    }
}

impl Default for PassEngine {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Builder for PassEngine with fluent API
pub struct PassEngineBuilder {
    workers: usize,
    passes: Vec<Arc<dyn Pass>>,
    progress_callback: Option<ProgressCallback>,
}

impl PassEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            workers: 0,
            passes: Vec::new(),
            progress_callback: None,
        }
    }

    /// Set number of worker threads
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Add a pass
    pub fn pass(mut self, pass: Arc<dyn Pass>) -> Self {
        self.passes.push(pass);
        self
    }

    /// Add multiple passes
    pub fn passes(mut self, passes: impl IntoIterator<Item = Arc<dyn Pass>>) -> Self {
        self.passes.extend(passes);
        self
    }

    /// Set progress callback
    pub fn on_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Build the engine
    pub fn build(self) -> PassEngine {
        let mut engine = PassEngine::new(self.workers);

        if let Some(callback) = self.progress_callback {
            engine = engine.with_progress_callback(callback);
        }

        engine.register_all(self.passes);
        engine
    }
}

impl Default for PassEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
