// src/export.rs

use crate::core::config::OutputOptions;
use crate::core::models::{ScanReport, TargetResult};
use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// One vulnerable target as written to the results file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    pub url: String,
    /// All details joined with newlines.
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poc: Option<Vec<String>>,
}

impl ExportRecord {
    fn from_result(result: &TargetResult, options: OutputOptions) -> Self {
        Self {
            url: result.url.clone(),
            details: result.details.join("\n"),
            proof: options.show_proof.then(|| result.proof.clone()),
            poc: options.show_poc.then(|| result.poc.clone()),
        }
    }
}

/// Records for the vulnerable subset of the report, in input order.
pub fn build_records(report: &ScanReport, options: OutputOptions) -> Vec<ExportRecord> {
    report
        .vulnerable()
        .map(|result| ExportRecord::from_result(result, options))
        .collect()
}

/// Writes the records as an indented JSON array.
pub fn save_to_file(records: &[ExportRecord], path: &Path) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("Failed to create results file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .wrap_err_with(|| format!("Failed to write results to {}", path.display()))?;
    writeln!(writer)?;
    writer.flush()?;
    info!(path = %path.display(), records = records.len(), "Results saved.");
    Ok(())
}
