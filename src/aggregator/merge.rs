//! Merge per-report table sets into one combined set.
//!
//! Every report contributes its rows tagged with an identifier derived from
//! its own file name, so `reports/ijk_bco_64.csv` contributes rows starting
//! with `ijk_bco_64`.

use crate::parser::{scan_reader, Identifier, TableSet};
use crate::utils::config::{DEFAULT_IDENTIFIER_LABEL, REPORT_EXTENSION};
use crate::utils::error::{ReportError, ScanError};
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Derive a report's identifier value from its path
///
/// **Public** - base file name with a trailing ".csv" removed
pub fn report_identifier(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    match file_name.strip_suffix(REPORT_EXTENSION) {
        Some(stem) => stem.to_string(),
        None => file_name,
    }
}

/// Sequential report aggregator
///
/// Owns the combined [`TableSet`] while reports are folded into it. A report
/// that fails leaves the set exactly as it was before that report.
#[derive(Debug)]
pub struct Aggregator {
    label: String,
    tables: TableSet,
    reports: Vec<String>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator {
    /// Aggregator tagging rows under the "Executable" column
    pub fn new() -> Self {
        Self::with_label(DEFAULT_IDENTIFIER_LABEL)
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tables: TableSet::new(),
            reports: Vec::new(),
        }
    }

    /// Scan one report file and merge its tables
    ///
    /// **Public** - main entry point per report
    ///
    /// # Errors
    /// * `ReportError::Unavailable` - the file cannot be opened or read
    /// * `ReportError::Malformed` - the report has broken table markers or invalid CSV
    pub fn add_report(&mut self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        let identifier = report_identifier(path);

        debug!("Opening report {} as '{}'", path.display(), identifier);
        let file = File::open(path).map_err(|source| ReportError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;

        // The file handle is dropped when this call returns, success or not
        self.add_reader(identifier, path, BufReader::new(file))
    }

    /// Scan a report from any reader and merge its tables
    ///
    /// `source` only names the report in errors.
    pub fn add_reader<R: Read>(
        &mut self,
        identifier: impl Into<String>,
        source: impl AsRef<Path>,
        reader: R,
    ) -> Result<(), ReportError> {
        let identifier = Identifier::new(identifier).with_label(self.label.clone());
        let value = identifier.value.clone();

        let report_tables = scan_reader(reader, identifier).map_err(|err| {
            let path = source.as_ref().to_path_buf();
            match err {
                ScanError::Read(io) => ReportError::Unavailable { path, source: io },
                other => ReportError::Malformed {
                    path,
                    source: other,
                },
            }
        })?;

        info!(
            "Merged report '{}': {} tables, {} rows",
            value,
            report_tables.len(),
            report_tables.total_rows()
        );

        self.tables.merge(report_tables);
        self.reports.push(value);
        Ok(())
    }

    /// Combined tables so far
    pub fn tables(&self) -> &TableSet {
        &self.tables
    }

    /// Identifiers of the reports merged so far, in merge order
    pub fn reports(&self) -> &[String] {
        &self.reports
    }

    pub fn report_count(&self) -> usize {
        self.reports.len()
    }

    pub fn into_tables(self) -> TableSet {
        self.tables
    }
}

/// Aggregate a list of report files, stopping at the first failure
///
/// **Public** - convenience wrapper over [`Aggregator`]
///
/// # Arguments
/// * `paths` - report files, in the order their rows should appear
///
/// # Returns
/// Combined table set keyed by title
pub fn aggregate_reports<P: AsRef<Path>>(paths: &[P]) -> Result<TableSet, ReportError> {
    let mut aggregator = Aggregator::new();
    for path in paths {
        aggregator.add_report(path)?;
    }
    Ok(aggregator.into_tables())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TableTitle;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_identifier_strips_csv() {
        assert_eq!(report_identifier("out/ijk_bco_64.csv"), "ijk_bco_64");
        assert_eq!(report_identifier("kji.csv"), "kji");
    }

    #[test]
    fn test_report_identifier_keeps_other_names() {
        assert_eq!(report_identifier("out/run.txt"), "run.txt");
        assert_eq!(report_identifier("a.csv.bak"), "a.csv.bak");
    }

    #[test]
    fn test_add_reader_merges_in_order() {
        let mut aggregator = Aggregator::new();
        aggregator
            .add_reader("a", "a.csv", "TABLE,Data,L2\nh\n1\n".as_bytes())
            .unwrap();
        aggregator
            .add_reader("b", "b.csv", "TABLE,Data,L2\nother\n2\n".as_bytes())
            .unwrap();

        let table = aggregator.tables().get(&TableTitle::new("L2", "Data")).unwrap();
        assert_eq!(table.headers, vec!["Executable", "h"]);
        assert_eq!(table.rows, vec![vec!["a", "1"], vec!["b", "2"]]);
        assert_eq!(aggregator.reports(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_failed_report_leaves_tables_untouched() {
        let mut aggregator = Aggregator::new();
        aggregator
            .add_reader("a", "a.csv", "TABLE,Data,L2\nh\n1\n".as_bytes())
            .unwrap();

        let err = aggregator
            .add_reader("b", "b.csv", "TABLE,Data,L2\nh\n2\nTABLE,X,L2\n".as_bytes())
            .unwrap_err();

        assert!(matches!(err, ReportError::Malformed { .. }));
        assert_eq!(err.path(), Path::new("b.csv"));
        assert_eq!(aggregator.tables().total_rows(), 1);
        assert_eq!(aggregator.report_count(), 1);
    }

    #[test]
    fn test_custom_label() {
        let mut aggregator = Aggregator::with_label("Binary");
        aggregator
            .add_reader("a", "a.csv", "TABLE,Data,L2\nh\n1\n".as_bytes())
            .unwrap();
        let table = aggregator.tables().iter().next().unwrap();
        assert_eq!(table.headers[0], "Binary");
    }
}
