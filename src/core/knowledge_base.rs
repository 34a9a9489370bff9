//! Static, read-only detection data for the scanner.
//!
//! The payload catalog and the list of risky DOM sinks live here so that the
//! detection code never carries scattered literals. Both tables are ordered and
//! never mutated after start-up.

use once_cell::sync::Lazy;
use regex::Regex;

/// Query parameter the payloads are reflected through.
pub const PROBE_PARAMETER: &str = "test";

/// Description attached to evidence from the static analyzer.
pub const SCRIPT_SINK_FINDING: &str = "Potential DOM clobbering vector found in script";

/// Description attached to evidence from the payload prober.
pub const PAYLOAD_REFLECTION_FINDING: &str = "Potential DOM clobbering with payload";

/// A markup fragment that can clobber DOM globals when reflected unescaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payload {
    /// The literal HTML sent to the target.
    pub literal: &'static str,
}

/// The fixed payload catalog, probed in this order.
pub static PAYLOADS: &[Payload] = &[
    Payload {
        literal: r#"<a id="x"><a id="x"><a id="x">"#,
    },
    Payload {
        literal: r#"<form id="x"><form id="x"><form id="x">"#,
    },
    Payload {
        literal: r#"<a id="x"><a id="x" name="y">"#,
    },
    Payload {
        literal: r#"<img id="x"><img id="x"><img id="x">"#,
    },
    Payload {
        literal: r#"<a id="innerHTML"><a id="innerHTML" name="y">"#,
    },
    Payload {
        literal: r#"<a id="defaultMessage"><a id="defaultMessage" name="innerHTML" href="javascript:alert(1)">"#,
    },
    Payload {
        literal: r#"<a id="__proto__"><a id="__proto__" name="vulnerable" href="true">"#,
    },
];

/// Script fragments that write markup or text straight into the DOM.
pub static RISKY_SINKS: &[&str] = &[
    ".innerHTML",
    ".outerHTML",
    ".textContent",
    ".innerText",
    "document.write",
];

/// One alternation over [`RISKY_SINKS`], matched against script text.
pub static RISKY_SINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = RISKY_SINKS
        .iter()
        .map(|sink| regex::escape(sink))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("({alternation})")).expect("risky sink pattern is a valid regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keeps_its_order() {
        assert_eq!(PAYLOADS.len(), 7);
        assert_eq!(PAYLOADS[0].literal, r#"<a id="x"><a id="x"><a id="x">"#);
        assert_eq!(PAYLOADS[3].literal, r#"<img id="x"><img id="x"><img id="x">"#);
        assert!(PAYLOADS[6].literal.contains("__proto__"));
    }

    #[test]
    fn every_payload_is_markup() {
        for payload in PAYLOADS {
            assert!(payload.literal.starts_with('<'), "{}", payload.literal);
            assert!(payload.literal.ends_with('>'), "{}", payload.literal);
        }
    }

    #[test]
    fn payloads_are_distinct() {
        for (i, payload) in PAYLOADS.iter().enumerate() {
            assert!(!PAYLOADS[i + 1..].contains(payload), "{}", payload.literal);
        }
    }

    #[test]
    fn pattern_matches_each_sink() {
        for sink in RISKY_SINKS {
            let script = format!("el{sink} = value;");
            let found = RISKY_SINK_PATTERN.find(&script).map(|m| m.as_str());
            assert_eq!(found, Some(*sink));
        }
    }

    #[test]
    fn pattern_treats_dots_literally() {
        assert!(!RISKY_SINK_PATTERN.is_match("documentXwrite('x')"));
        assert!(!RISKY_SINK_PATTERN.is_match("var innerHTML = 1;"));
    }
}
