//! Aggregation of many reports into one table set.
//!
//! This module turns an ordered list of report files into:
//! - One consolidated table per unique (group, name) title
//! - Rows concatenated in report order, then file order
//! - Summary figures for logging

pub mod merge;
pub mod metrics;

// Re-export main types and functions
pub use merge::{aggregate_reports, report_identifier, Aggregator};
pub use metrics::{summarize_tables, TableSummary};
