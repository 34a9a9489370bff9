// src/core/scanner/mod.rs

// Each stage of the per-target pipeline lives in its own module; this file
// wires them together and fans the pipeline out over all targets.
pub mod aggregator;
pub mod fetcher;
pub mod payload_prober;
pub mod progress;
pub mod static_analyzer;

use crate::core::config::ScanConfig;
use crate::core::knowledge_base::PAYLOADS;
use crate::core::models::{Evidence, ScanReport, Target, TargetResult};
use self::aggregator::aggregate;
use self::fetcher::{FetchError, Fetcher};
use self::progress::{ProgressTracker, ScanProgress};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{error, info, warn};

/// Runs the detection pipeline over a list of targets.
pub struct Scanner {
    fetcher: Fetcher,
    config: ScanConfig,
    progress: Option<UnboundedSender<ScanProgress>>,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Result<Self, FetchError> {
        let fetcher = Fetcher::new(&config)?;
        Ok(Self { fetcher, config, progress: None })
    }

    /// Sends a [`ScanProgress`] on `updates` every time a target completes.
    pub fn with_progress(mut self, updates: UnboundedSender<ScanProgress>) -> Self {
        self.progress = Some(updates);
        self
    }

    /// Scans every target concurrently and returns once all of them are done.
    ///
    /// One task is spawned per target; at most `config.concurrency` of them do
    /// network work at the same time. Task `i` owns slot `i` of the report, so
    /// the report is index-aligned with `targets` whatever order the tasks
    /// finish in. A task that panics still fills its slot with a diagnostic.
    ///
    /// # Arguments
    /// * `targets` - URLs to scan, in the order results should be reported.
    ///
    /// # Returns
    /// A `ScanReport` with exactly one result per target.
    pub async fn scan(&self, targets: &[Target]) -> ScanReport {
        let total = targets.len();
        info!(total, concurrency = self.config.worker_limit(), "Starting scan.");

        let tracker = ProgressTracker::new(total, self.progress.clone());
        let limiter = Arc::new(Semaphore::new(self.config.worker_limit()));

        let handles: Vec<_> = targets
            .iter()
            .cloned()
            .map(|target| {
                let fetcher = self.fetcher.clone();
                let tracker = tracker.clone();
                let limiter = Arc::clone(&limiter);
                tokio::spawn(async move {
                    // Held until the pipeline finishes.
                    let _permit = limiter.acquire_owned().await;
                    let result = scan_target(&fetcher, &target).await;
                    tracker.complete_one();
                    result
                })
            })
            .collect();

        // Join barrier: wait on every handle, in input order.
        let mut results = Vec::with_capacity(total);
        for (handle, target) in handles.into_iter().zip(targets) {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    error!(target = %target, error = %e, "Scan task did not complete.");
                    tracker.complete_one();
                    TargetResult::failed(target, format!("Error: scan task failed: {e}"))
                }
            };
            results.push(result);
        }

        let report = ScanReport { results };
        info!(
            total,
            vulnerable = report.vulnerable_count(),
            errored = report.errored_count(),
            "Scan finished."
        );
        report
    }
}

/// The full pipeline for one target: fetch and analyze the page while the
/// payload probes run, then merge everything into one result.
pub async fn scan_target(fetcher: &Fetcher, target: &str) -> TargetResult {
    info!(target, "Scanning target.");

    let (analysis, probes) = tokio::join!(
        analyze_page(fetcher, target),
        payload_prober::probe(fetcher, target, PAYLOADS)
    );

    let (analysis, diagnostic) = match analysis {
        Ok(evidence) => (evidence, None),
        Err(e) => {
            let cause = e.with_causes();
            warn!(target, error = %cause, "Page fetch failed, static analysis skipped.");
            (Vec::new(), Some(format!("Error: {cause}")))
        }
    };

    let mut result = aggregate(target, analysis, probes);
    result.errors.extend(diagnostic);
    info!(
        target,
        vulnerable = result.vulnerable,
        findings = result.evidence_count(),
        "Target scanned."
    );
    result
}

async fn analyze_page(fetcher: &Fetcher, target: &str) -> Result<Vec<Evidence>, FetchError> {
    let body = fetcher.fetch(target).await?;
    Ok(static_analyzer::analyze(&body))
}
