// src/ui/widgets/findings.rs

use crate::core::config::OutputOptions;
use crate::core::models::{ScanReport, TargetResult};
use crossterm::style::{Color, Stylize, style};
use std::fmt::Display;
use std::io::{self, Write};

const RULE_WIDTH: usize = 80;

/// Colors `text` when `enabled`, otherwise returns it untouched.
fn paint(text: impl Display, color: Color, enabled: bool) -> String {
    if enabled {
        style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}

/// Prints every vulnerable result of the report.
///
/// Proof and PoC sections are only printed when requested. Non-vulnerable
/// targets are not listed.
///
/// # Arguments
/// * `color` - Emit ANSI colors. Pass `false` when the output is not a terminal.
///
/// # Returns
/// The number of results printed.
pub fn render_findings<W: Write>(
    out: &mut W,
    report: &ScanReport,
    options: OutputOptions,
    color: bool,
) -> io::Result<usize> {
    let mut printed = 0;
    for result in report.vulnerable() {
        render_finding(out, result, options, color)?;
        printed += 1;
    }
    Ok(printed)
}

fn render_finding<W: Write>(
    out: &mut W,
    result: &TargetResult,
    options: OutputOptions,
    color: bool,
) -> io::Result<()> {
    writeln!(out, "URL: {}", paint(&result.url, Color::Cyan, color))?;
    writeln!(out, "Vulnerable: {}", paint("Yes", Color::Magenta, color))?;
    writeln!(out, "Details:\n{}", paint(result.details.join("\n"), Color::Green, color))?;

    if options.show_proof {
        writeln!(out, "Proof:\n{}", paint(result.proof.join("\n"), Color::Blue, color))?;
    }
    if options.show_poc {
        writeln!(out, "PoC:\n{}", paint(result.poc.join("\n"), Color::Yellow, color))?;
    }

    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

/// One closing line with the totals of the scan.
pub fn render_summary<W: Write>(out: &mut W, report: &ScanReport, color: bool) -> io::Result<()> {
    let vulnerable = report.vulnerable_count();
    let errored = report.errored_count();
    let vulnerable_text = match (vulnerable > 0, color) {
        (true, true) => vulnerable.to_string().red().bold().to_string(),
        (false, true) => paint(vulnerable, Color::Green, true),
        (_, false) => vulnerable.to_string(),
    };
    writeln!(
        out,
        "Scanned {} targets: {} vulnerable, {} with errors",
        report.len(),
        vulnerable_text,
        errored
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ScanReport {
        ScanReport {
            results: vec![
                TargetResult { url: "http://clean.test".into(), ..Default::default() },
                TargetResult {
                    url: "http://vuln.test".into(),
                    vulnerable: true,
                    details: vec!["Potential DOM clobbering with payload".into()],
                    proof: vec!["Payload reflection: <a id=\"x\">".into()],
                    poc: vec!["curl 'http://vuln.test?test=%3Ca%3E'".into()],
                    errors: Vec::new(),
                },
                TargetResult::failed("http://down.test", "Error: connection refused"),
            ],
        }
    }

    fn render(options: OutputOptions) -> (usize, String) {
        render_with(options, false)
    }

    fn render_with(options: OutputOptions, color: bool) -> (usize, String) {
        let mut buffer = Vec::new();
        let printed =
            render_findings(&mut buffer, &sample_report(), options, color).expect("write to vec");
        (printed, String::from_utf8(buffer).expect("utf-8 output"))
    }

    #[test]
    fn lists_only_vulnerable_results() {
        let (printed, output) = render(OutputOptions::default());
        assert_eq!(printed, 1);
        assert!(output.contains("http://vuln.test"));
        assert!(!output.contains("http://clean.test"));
        assert!(!output.contains("http://down.test"));
        assert!(output.contains(&"-".repeat(RULE_WIDTH)));
    }

    #[test]
    fn optional_sections_follow_options() {
        let (_, plain) = render(OutputOptions::default());
        assert!(!plain.contains("Proof:"));
        assert!(!plain.contains("PoC:"));

        let (_, full) = render(OutputOptions { show_proof: true, show_poc: true });
        assert!(full.contains("Proof:"));
        assert!(full.contains("Payload reflection"));
        assert!(full.contains("PoC:"));
        assert!(full.contains("curl 'http://vuln.test?test=%3Ca%3E'"));
    }

    #[test]
    fn summary_counts() {
        let mut buffer = Vec::new();
        render_summary(&mut buffer, &sample_report(), false).expect("write to vec");
        let output = String::from_utf8(buffer).expect("utf-8 output");
        assert_eq!(output, "Scanned 3 targets: 1 vulnerable, 1 with errors\n");
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let options = OutputOptions { show_proof: true, show_poc: true };
        let (_, plain) = render_with(options, false);
        assert!(!plain.contains('\u{1b}'));
        assert!(plain.starts_with("URL: http://vuln.test\nVulnerable: Yes\n"));

        let (_, colored) = render_with(options, true);
        assert!(colored.contains('\u{1b}'));

        let mut summary = Vec::new();
        render_summary(&mut summary, &sample_report(), true).expect("write to vec");
        assert!(summary.contains(&0x1b));
    }
}
