// src/core/config.rs

use std::time::Duration;

/// Maximum number of targets scanned at the same time unless overridden.
pub const DEFAULT_CONCURRENCY: usize = 50;

/// File the vulnerable subset is exported to when PoC or proof output is requested.
pub const DEFAULT_OUTPUT_FILE: &str = "dom_clobbering_results.json";

/// Settings for one scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Upper bound on targets in flight. Zero is treated as one.
    pub concurrency: usize,
    /// User-Agent sent with every request.
    pub user_agent: String,
    /// Per-request timeout. `None` keeps reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            user_agent: format!("domclob/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }
}

impl ScanConfig {
    pub fn worker_limit(&self) -> usize {
        self.concurrency.max(1)
    }
}

/// Which optional sections of a finding are shown and exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub show_proof: bool,
    pub show_poc: bool,
}

impl OutputOptions {
    /// The results file is only written when at least one optional section is requested.
    pub fn should_export(&self) -> bool {
        self.show_proof || self.show_poc
    }
}
