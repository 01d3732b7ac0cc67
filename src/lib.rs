//! perfctr-report
//!
//! Splits LIKWID `likwid-perfctr` CSV reports into their counter tables,
//! tags every row with the report it came from, and merges same-titled
//! tables across many reports into one combined report.
//!
//! This crate provides the core implementation for the
//! `perfctr-report` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! perfctr-report combine --list output_files.txt -o combined.csv
//! perfctr-report inspect out/ijk.csv --rows
//! ```
//!
//! As a library:
//!
//! ```no_run
//! use perfctr_report::aggregator::aggregate_reports;
//! use perfctr_report::output::write_combined_csv;
//!
//! let tables = aggregate_reports(&["out/ijk.csv", "out/ikj.csv"])?;
//! write_combined_csv(&tables, "combined.csv")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
