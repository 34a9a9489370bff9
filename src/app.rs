// src/app.rs

use crate::core::config::{DEFAULT_CONCURRENCY, DEFAULT_OUTPUT_FILE, OutputOptions, ScanConfig};
use crate::core::models::{ScanReport, Target};
use crate::core::scanner::Scanner;
use crate::export;
use crate::ui::{self, ProgressView};
use clap::Parser;
use color_eyre::eyre::{bail, Result, WrapErr};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Scan for DOM Clobbering vulnerabilities
#[derive(Parser, Debug, Clone)]
#[command(name = "domclob", version, about = "Scan for DOM Clobbering vulnerabilities")]
pub struct Cli {
    /// Single URL to test
    #[arg(short, long)]
    pub url: Option<String>,

    /// File containing URLs to test, one per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output PoC details
    #[arg(long)]
    pub poc: bool,

    /// Output proof of vulnerable code
    #[arg(long)]
    pub proof: bool,

    /// Where to save results when --poc or --proof is set
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Maximum number of targets scanned at once
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Do not draw the progress gauge
    #[arg(long)]
    pub no_progress: bool,

    /// Write the log here instead of the data directory
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn scan_config(&self) -> ScanConfig {
        let defaults = ScanConfig::default();
        ScanConfig {
            concurrency: self.concurrency,
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            timeout: self.timeout.map(Duration::from_secs),
        }
    }

    pub fn output_options(&self) -> OutputOptions {
        OutputOptions { show_proof: self.proof, show_poc: self.poc }
    }

    /// Resolves the targets to scan. `--url` takes precedence over `--file`.
    pub fn targets(&self) -> Result<Vec<Target>> {
        if let Some(url) = &self.url {
            return Ok(vec![url.clone()]);
        }
        if let Some(path) = &self.file {
            return read_targets_file(path);
        }
        bail!("Please provide either a URL or a file containing URLs")
    }
}

/// Reads one target per line, trimming whitespace and skipping blank lines.
pub fn read_targets<R: Read>(reader: R) -> io::Result<Vec<Target>> {
    let mut targets = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            targets.push(trimmed.to_string());
        }
    }
    Ok(targets)
}

pub fn read_targets_file(path: &Path) -> Result<Vec<Target>> {
    let file = File::open(path)
        .wrap_err_with(|| format!("Failed to open URL file {}", path.display()))?;
    read_targets(file).wrap_err_with(|| format!("Failed to read URL file {}", path.display()))
}

/// Runs the whole tool: load targets, scan, print findings, export.
pub async fn run(cli: Cli) -> Result<()> {
    let targets = cli.targets()?;
    let options = cli.output_options();
    info!(targets = targets.len(), "Loaded targets.");

    let show_progress = !cli.no_progress && io::stdout().is_terminal();
    let report = scan_with_progress(cli.scan_config(), targets, show_progress).await?;

    let mut stdout = io::stdout().lock();
    let color = stdout.is_terminal();
    ui::render_findings(&mut stdout, &report, options, color)?;
    ui::render_summary(&mut stdout, &report, color)?;

    if options.should_export() {
        let records = export::build_records(&report, options);
        export::save_to_file(&records, &cli.output)?;
        writeln!(stdout, "Results saved to {}", cli.output.display())?;
    }
    Ok(())
}

/// Runs the scan on its own task while the current task draws progress.
pub async fn scan_with_progress(
    config: ScanConfig,
    targets: Vec<Target>,
    show_progress: bool,
) -> Result<ScanReport> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let scanner = Scanner::new(config)
        .wrap_err("Failed to set up the scanner")?
        .with_progress(tx);

    let total = targets.len();
    // The channel closes once the scanner, and with it the sender, is dropped.
    let scan = tokio::spawn(async move { scanner.scan(&targets).await });

    let mut view = if show_progress {
        match ProgressView::inline(total) {
            Ok(view) => Some(view),
            Err(e) => {
                warn!(error = %e, "Progress gauge unavailable.");
                None
            }
        }
    } else {
        None
    };

    while let Some(progress) = rx.recv().await {
        if let Some(active) = view.as_mut() {
            if let Err(e) = active.update(progress) {
                warn!(error = %e, "Progress gauge failed, hiding it.");
                view = None;
            }
        }
    }

    let report = scan.await.wrap_err("Scan task failed")?;
    if let Some(view) = view {
        view.finish()?;
        println!();
    }
    Ok(report)
}
