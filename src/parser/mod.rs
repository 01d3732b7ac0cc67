//! Report parsing and table model.
//!
//! This module handles:
//! - Splitting a perfctr CSV report into named tables
//! - Dropping STRUCT (hardware description) sections
//! - Tagging every header and row with the report identifier

pub mod scanner;
pub mod schema;

// Re-export main types
pub use scanner::{scan_reader, scan_records, Scanner};
pub use schema::{Identifier, Record, Table, TableSet, TableTitle};
