//! Inspect command implementation.
//!
//! Scans a single report and prints the tables it contains.

use super::models::InspectArgs;
use crate::aggregator::report_identifier;
use crate::parser::{scan_reader, Identifier, Table, TableSet};
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::BufReader;

/// Execute the inspect command
///
/// **Public** - main entry point called from main.rs
pub fn execute_inspect(args: InspectArgs) -> Result<()> {
    let identifier = Identifier::new(report_identifier(&args.report));
    info!("Inspecting report {} as '{}'", args.report.display(), identifier.value);

    let file = File::open(&args.report)
        .with_context(|| format!("Failed to open report {}", args.report.display()))?;
    let tables = scan_reader(BufReader::new(file), identifier)
        .with_context(|| format!("Failed to parse report {}", args.report.display()))?;

    print!("{}", render_tables(&tables, args.show_rows));
    Ok(())
}

/// Render a table set for the terminal
///
/// **Public** - overview lines, or full tables with `show_rows`
pub fn render_tables(tables: &TableSet, show_rows: bool) -> String {
    if tables.is_empty() {
        return "No tables found\n".to_string();
    }

    let mut out = String::new();
    for table in tables {
        if show_rows {
            out.push_str(&render_table(table));
            out.push('\n');
        } else {
            out.push_str(&format!("{}\n", table));
        }
    }
    out
}

/// Uppercase title, then header and rows joined with commas
///
/// **Private** - internal helper for render_tables
fn render_table(table: &Table) -> String {
    let mut out = format!("{}\n", table.title().to_uppercase());
    out.push_str(&table.headers.join(","));
    out.push('\n');
    for row in &table.rows {
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}
