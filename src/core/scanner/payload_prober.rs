// src/core/scanner/payload_prober.rs

use crate::core::knowledge_base::{PAYLOAD_REFLECTION_FINDING, PROBE_PARAMETER, Payload};
use crate::core::models::Evidence;
use crate::core::poc;
use crate::core::scanner::fetcher::Fetcher;
use futures::future::join_all;
use tracing::{debug, info};

/// Percent-encodes the angle brackets of a payload. Everything else is left as is.
pub fn encode_payload(payload: &str) -> String {
    payload.replace('<', "%3C").replace('>', "%3E")
}

/// Builds the probing URL for one payload.
///
/// The parameter is joined with `&` when the target already has a query
/// string and is placed before any fragment.
pub fn probe_url(target: &str, payload: &str) -> String {
    let (base, fragment) = match target.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (target, None),
    };
    let separator = if base.contains('?') { '&' } else { '?' };
    let mut url = format!("{base}{separator}{PROBE_PARAMETER}={}", encode_payload(payload));
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    url
}

/// True when the raw payload appears verbatim in the response body.
pub fn is_reflected(body: &str, payload: &str) -> bool {
    body.contains(payload)
}

/// Sends every payload of `catalog` to `target` and records the ones echoed back unescaped.
///
/// Requests run concurrently but the evidence keeps catalog order. A payload
/// whose request or body read fails is skipped.
///
/// # Arguments
/// * `fetcher` - Shared HTTP client.
/// * `target` - The URL to probe.
/// * `catalog` - Payloads to try.
pub async fn probe(fetcher: &Fetcher, target: &str, catalog: &[Payload]) -> Vec<Evidence> {
    let attempts = catalog.iter().map(|payload| probe_payload(fetcher, target, payload));
    let evidence: Vec<Evidence> = join_all(attempts).await.into_iter().flatten().collect();
    debug!(target, reflected = evidence.len(), tried = catalog.len(), "Payload probing finished.");
    evidence
}

async fn probe_payload(fetcher: &Fetcher, target: &str, payload: &Payload) -> Option<Evidence> {
    let url = probe_url(target, payload.literal);
    let body = match fetcher.fetch(&url).await {
        Ok(body) => body,
        Err(e) => {
            debug!(url = %url, error = %e.with_causes(), "Probe request failed, skipping payload.");
            return None;
        }
    };

    if !is_reflected(&body, payload.literal) {
        return None;
    }

    info!(target, payload = payload.literal, "Payload reflected unescaped.");
    Some(Evidence {
        description: PAYLOAD_REFLECTION_FINDING.to_string(),
        proof: poc::reflection_proof(payload.literal),
        poc: poc::reflection_poc(&url),
    })
}
