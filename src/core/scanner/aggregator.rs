// src/core/scanner/aggregator.rs

use crate::core::models::{Evidence, TargetResult};

/// Merges both evidence lists into one verdict.
///
/// Static findings come first, then probe findings in catalog order. The
/// result is vulnerable exactly when there is at least one piece of evidence.
pub fn aggregate(target: &str, analysis: Vec<Evidence>, probes: Vec<Evidence>) -> TargetResult {
    let mut result = TargetResult {
        url: target.to_string(),
        ..Default::default()
    };

    for evidence in analysis.into_iter().chain(probes) {
        result.details.push(evidence.description);
        result.proof.push(evidence.proof);
        result.poc.push(evidence.poc);
    }

    result.vulnerable = !result.details.is_empty();
    result
}
