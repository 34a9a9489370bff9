// src/core/poc.rs

//! Pure formatting of proof and PoC strings. Nothing here decides whether a
//! finding exists; the analyzers call in once they have one.

/// Proof line for a risky sink matched inside a script block.
pub fn sink_proof(matched: &str) -> String {
    format!("Vulnerable pattern: {matched}")
}

/// Console snippet demonstrating the sink, with the original script kept as a comment.
pub fn sink_poc(script: &str) -> String {
    let demo = format!(
        r#"
// Original script content (for reference):
/*
{script}
*/

// Modified script to demonstrate vulnerability:
var div = document.createElement('div');
document.body.appendChild(div);
div.innerHTML = '<img src=x onerror=alert("DOM Clobbering vulnerability")>';
// Optionally, you can replace the above line with the vulnerable part of the original script
"#
    );
    format!("In browser console, execute the following script:\n\n{demo}")
}

/// Proof line for a payload echoed back unescaped.
pub fn reflection_proof(payload: &str) -> String {
    format!("Payload reflection: {payload}")
}

/// Command that replays the probing request.
pub fn reflection_poc(probe_url: &str) -> String {
    format!("curl '{probe_url}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_poc_embeds_script_in_comment() {
        let poc = sink_poc("el.innerHTML = location.hash;");
        assert!(poc.starts_with("In browser console, execute the following script:"));
        assert!(poc.contains("/*\nel.innerHTML = location.hash;\n*/"));
        assert!(poc.contains("document.createElement('div')"));
        assert!(poc.contains("onerror=alert"));
    }

    #[test]
    fn reflection_strings() {
        assert_eq!(reflection_proof("<a>"), "Payload reflection: <a>");
        assert_eq!(
            reflection_poc("http://t.test/?test=%3Ca%3E"),
            "curl 'http://t.test/?test=%3Ca%3E'"
        );
        assert_eq!(sink_proof(".innerHTML"), "Vulnerable pattern: .innerHTML");
    }
}
