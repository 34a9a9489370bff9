// src/core/models.rs

use serde::{Deserialize, Serialize};

// --- Input ---

/// A URL to scan, kept exactly as the operator supplied it.
pub type Target = String;

// --- Detection ---

/// One detection event recorded while scanning a single target.
///
/// Evidence is produced by the static analyzer (risky sink found in a script
/// block) or by the payload prober (payload reflected unescaped). The three
/// fields end up in the parallel `details`/`proof`/`poc` lists of a
/// [`TargetResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// Short human-readable description of what was found.
    pub description: String,
    /// The matched text that supports the finding.
    pub proof: String,
    /// A reproduction recipe for the finding.
    pub poc: String,
}

// --- Per-target output ---

/// The verdict for one target.
///
/// `details`, `proof` and `poc` are index-aligned: entry `n` of each list comes
/// from the same [`Evidence`]. `vulnerable` is true exactly when at least one
/// piece of evidence was recorded. Transport problems that stopped a phase
/// early are kept apart in `errors` and never flip the verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetResult {
    pub url: String,
    pub vulnerable: bool,
    pub details: Vec<String>,
    pub proof: Vec<String>,
    pub poc: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl TargetResult {
    /// A non-vulnerable result carrying a single diagnostic.
    pub fn failed(url: &str, error: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            errors: vec![error.into()],
            ..Default::default()
        }
    }

    pub fn evidence_count(&self) -> usize {
        self.details.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

// --- Report ---

/// All results of one scan, index-aligned with the targets it was given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub results: Vec<TargetResult>,
}

impl ScanReport {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results whose verdict is vulnerable, in input order.
    pub fn vulnerable(&self) -> impl Iterator<Item = &TargetResult> {
        self.results.iter().filter(|result| result.vulnerable)
    }

    pub fn vulnerable_count(&self) -> usize {
        self.vulnerable().count()
    }

    pub fn errored_count(&self) -> usize {
        self.results.iter().filter(|result| result.has_errors()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_result_is_not_vulnerable() {
        let result = TargetResult::failed("http://example.test", "Error: connection refused");
        assert!(!result.vulnerable);
        assert_eq!(result.evidence_count(), 0);
        assert_eq!(result.errors, vec!["Error: connection refused".to_string()]);
    }

    #[test]
    fn report_counts_vulnerable_and_errored_results() {
        let report = ScanReport {
            results: vec![
                TargetResult {
                    url: "a".into(),
                    vulnerable: true,
                    details: vec!["d".into()],
                    proof: vec!["p".into()],
                    poc: vec!["c".into()],
                    errors: Vec::new(),
                },
                TargetResult::failed("b", "Error: boom"),
                TargetResult { url: "c".into(), ..Default::default() },
            ],
        };

        assert_eq!(report.len(), 3);
        assert_eq!(report.vulnerable_count(), 1);
        assert_eq!(report.errored_count(), 1);
        assert_eq!(report.vulnerable().next().map(|r| r.url.as_str()), Some("a"));
    }

    #[test]
    fn errors_are_omitted_from_json_when_empty() {
        let result = TargetResult { url: "a".into(), ..Default::default() };
        let json = serde_json::to_value(&result).expect("serializable");
        assert!(json.get("errors").is_none());
        assert_eq!(json["vulnerable"], false);
    }
}
