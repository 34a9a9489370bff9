// src/core/scanner/progress.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc::UnboundedSender;

/// Snapshot of how far a scan has come.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanProgress {
    pub completed: usize,
    pub total: usize,
}

impl ScanProgress {
    /// Fraction in `0.0..=1.0`. An empty scan counts as complete.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.completed.min(self.total) as f64) / (self.total as f64)
    }

    pub fn is_done(&self) -> bool {
        self.completed >= self.total
    }
}

/// Completion counter shared by all pipeline tasks of one scan.
///
/// Each completed target bumps the counter exactly once. Updates may reach
/// the listener out of order, so consumers should keep the maximum.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    completed: Arc<AtomicUsize>,
    total: usize,
    updates: Option<UnboundedSender<ScanProgress>>,
}

impl ProgressTracker {
    pub fn new(total: usize, updates: Option<UnboundedSender<ScanProgress>>) -> Self {
        Self {
            completed: Arc::new(AtomicUsize::new(0)),
            total,
            updates,
        }
    }

    /// Records one finished target and notifies the listener, if any.
    pub fn complete_one(&self) -> ScanProgress {
        let completed = self.completed.fetch_add(1, Ordering::SeqCst) + 1;
        let progress = ScanProgress { completed, total: self.total };
        if let Some(updates) = &self.updates {
            // A listener that went away must not disturb the scan.
            let _ = updates.send(progress);
        }
        progress
    }

    #[cfg(test)]
    fn snapshot(&self) -> ScanProgress {
        ScanProgress {
            completed: self.completed.load(Ordering::SeqCst),
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn ratio_handles_empty_and_partial_scans() {
        assert_eq!(ScanProgress { completed: 0, total: 0 }.ratio(), 1.0);
        assert_eq!(ScanProgress { completed: 1, total: 4 }.ratio(), 0.25);
        assert!(ScanProgress { completed: 4, total: 4 }.is_done());
    }

    #[test]
    fn every_completion_is_reported() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let tracker = ProgressTracker::new(3, Some(tx));
        for _ in 0..3 {
            tracker.complete_one();
        }
        assert_eq!(tracker.snapshot(), ScanProgress { completed: 3, total: 3 });

        let mut seen = Vec::new();
        while let Ok(update) = rx.try_recv() {
            seen.push(update.completed);
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn dropped_listener_is_ignored() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let tracker = ProgressTracker::new(1, Some(tx));
        assert_eq!(tracker.complete_one().completed, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_completions_are_not_lost() {
        let tracker = ProgressTracker::new(100, None);
        let handles: Vec<_> = (0..100)
            .map(|_| {
                let tracker = tracker.clone();
                tokio::spawn(async move {
                    tracker.complete_one();
                })
            })
            .collect();
        for handle in handles {
            handle.await.expect("task completes");
        }
        assert_eq!(tracker.snapshot().completed, 100);
    }
}
