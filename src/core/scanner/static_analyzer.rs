// src/core/scanner/static_analyzer.rs

use crate::core::knowledge_base::{RISKY_SINK_PATTERN, SCRIPT_SINK_FINDING};
use crate::core::models::Evidence;
use crate::core::poc;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

static SCRIPT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script").expect("'script' is a valid selector"));

/// Scans every `<script>` element of an HTML document for risky DOM sinks.
///
/// This is a syntactic filter over the raw script text. It flags code that
/// merely reads these properties and misses sinks reached through aliases.
///
/// At most one piece of evidence is emitted per script element, however many
/// sinks it contains; the proof names the first one.
///
/// # Arguments
/// * `html` - The raw page body.
///
/// # Returns
/// Evidence in document order. Calling it twice on the same input yields the same output.
pub fn analyze(html: &str) -> Vec<Evidence> {
    let document = Html::parse_document(html);
    let evidence: Vec<Evidence> = document
        .select(&SCRIPT_SELECTOR)
        .filter_map(|script| inspect_script(&script.text().collect::<String>()))
        .collect();
    debug!(findings = evidence.len(), "Static analysis finished.");
    evidence
}

/// Checks a single script body. Returns evidence for the first risky sink found.
pub fn inspect_script(script: &str) -> Option<Evidence> {
    let matched = RISKY_SINK_PATTERN.find(script)?;
    debug!(sink = matched.as_str(), "Risky sink found in script.");
    Some(Evidence {
        description: SCRIPT_SINK_FINDING.to_string(),
        proof: poc::sink_proof(matched.as_str()),
        poc: poc::sink_poc(script),
    })
}
