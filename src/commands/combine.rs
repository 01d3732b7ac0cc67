//! Combine command implementation.
//!
//! The combine command:
//! 1. Collects report paths (arguments, then the report list file)
//! 2. Scans and merges every report in order
//! 3. Writes the combined report

use super::models::{CombineArgs, OutputFormat};
use crate::aggregator::{summarize_tables, Aggregator};
use crate::output::{write_combined_csv, write_tables_json, TableExport};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Load report paths from a list file
///
/// **Public** - the batch runner writes one report path per line
///
/// Surrounding whitespace is trimmed and blank lines are skipped.
pub fn load_report_list(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read report list {}", path.display()))?;

    let reports: Vec<PathBuf> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect();

    debug!("Loaded {} report paths from {}", reports.len(), path.display());
    Ok(reports)
}

/// Validate combine arguments
///
/// **Public** - can be called before execute_combine for early validation
pub fn validate_args(args: &CombineArgs) -> Result<()> {
    if args.reports.is_empty() && args.report_list.is_none() {
        anyhow::bail!("No reports given: pass report files or --list <FILE>");
    }

    if args.label.trim().is_empty() {
        anyhow::bail!("Identifier label cannot be empty");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    Ok(())
}

/// Execute the combine command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable report list
/// * A report that cannot be opened or is malformed (nothing is written then)
/// * Output write errors
pub fn execute_combine(args: CombineArgs) -> Result<()> {
    let start_time = Instant::now();

    let mut reports = args.reports.clone();
    if let Some(list) = &args.report_list {
        reports.extend(load_report_list(list)?);
    }

    if reports.is_empty() {
        anyhow::bail!("No reports to combine");
    }

    info!("Combining {} reports", reports.len());

    let mut aggregator = Aggregator::with_label(args.label.clone());
    for (i, report) in reports.iter().enumerate() {
        debug!("Report {}/{}: {}", i + 1, reports.len(), report.display());
        aggregator
            .add_report(report)
            .with_context(|| format!("Failed to combine report {}", report.display()))?;
    }

    let summary = summarize_tables(aggregator.tables());
    info!("Combined: {}", summary.summary());

    match args.format {
        OutputFormat::Csv => {
            write_combined_csv(aggregator.tables(), &args.output)
                .context("Failed to write combined CSV")?;
        }
        OutputFormat::Json => {
            let export = TableExport::new(aggregator.reports().to_vec(), aggregator.tables());
            write_tables_json(&export, &args.output).context("Failed to write JSON export")?;
        }
    }

    info!("✓ Combined report written to: {}", args.output.display());

    let elapsed = start_time.elapsed();
    info!("Combine completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}
