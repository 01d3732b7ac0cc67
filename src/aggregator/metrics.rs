//! Summary figures over a combined table set.
//!
//! These describe the shape of the aggregation (how many tables and rows,
//! how many ragged rows). Counter values themselves are never interpreted.

use crate::parser::TableSet;
use log::{debug, warn};

/// Shape of a table set
///
/// **Public** - returned from summarize_tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSummary {
    /// Number of distinct titles
    pub table_count: usize,

    /// Data rows across all tables
    pub row_count: usize,

    /// Rows whose width differs from their table's header
    pub ragged_row_count: usize,

    /// Widest header across all tables
    pub max_columns: usize,
}

impl TableSummary {
    /// One-line description for logs
    pub fn summary(&self) -> String {
        format!(
            "{} tables, {} rows ({} ragged), up to {} columns",
            self.table_count, self.row_count, self.ragged_row_count, self.max_columns
        )
    }
}

/// Compute summary figures for a table set
///
/// **Public** - used by the CLI after aggregation
pub fn summarize_tables(tables: &TableSet) -> TableSummary {
    let mut summary = TableSummary {
        table_count: tables.len(),
        ..Default::default()
    };

    for table in tables {
        let ragged = table.ragged_rows();
        if ragged > 0 {
            // Tolerated: spreadsheet viewers cope with uneven rows
            warn!(
                "Table '{}' has {} row(s) not matching its {} header columns",
                table.key,
                ragged,
                table.headers.len()
            );
        }

        summary.row_count += table.rows.len();
        summary.ragged_row_count += ragged;
        summary.max_columns = summary.max_columns.max(table.headers.len());
    }

    debug!("Table summary: {}", summary.summary());
    summary
}
