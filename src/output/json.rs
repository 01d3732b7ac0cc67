//! JSON export of the combined table set.
//!
//! The export is versioned and contains no timestamps, so the same reports
//! always produce the same document.

use super::{file_size, prepare_output_path};
use crate::parser::{Table, TableSet};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Top-level JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableExport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Identifiers of the merged reports, in merge order
    pub sources: Vec<String>,

    /// Tables in first-seen order
    pub tables: Vec<Table>,
}

impl TableExport {
    pub fn new(sources: Vec<String>, tables: &TableSet) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            sources,
            tables: tables.iter().cloned().collect(),
        }
    }

    /// Rebuild the table set, keeping the exported order
    pub fn into_table_set(self) -> TableSet {
        self.tables.into_iter().collect()
    }
}

/// Serialize an export to a pretty JSON string
pub fn tables_to_json(export: &TableExport) -> Result<String, OutputError> {
    serde_json::to_string_pretty(export).map_err(OutputError::SerializationFailed)
}

/// Write an export to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, directory, or uncreatable parent
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn write_tables_json(
    export: &TableExport,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON export to: {}", output_path.display());
    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    serde_json::to_writer_pretty(BufWriter::new(file), export)
        .map_err(OutputError::SerializationFailed)?;

    info!(
        "JSON export written successfully ({} bytes)",
        file_size(output_path)
    );
    Ok(())
}

/// Read a JSON export back
///
/// **Public** - useful for validation and testing
pub fn read_tables_json(input_path: impl AsRef<Path>) -> Result<TableExport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading JSON export from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let export: TableExport = serde_json::from_reader(BufReader::new(file))
        .map_err(OutputError::SerializationFailed)?;

    debug!(
        "Export loaded: version {}, {} tables",
        export.version,
        export.tables.len()
    );
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{scan_records, Identifier, Record};
    use tempfile::NamedTempFile;

    fn sample_tables() -> TableSet {
        let records: Vec<Record> = "TABLE,Region Info,L3\nRegion Info,HWThread 0\nRuntime,0.5"
            .lines()
            .map(|line| line.split(',').map(str::to_owned).collect())
            .collect();
        scan_records(records, Identifier::new("ijk")).unwrap()
    }

    #[test]
    fn test_table_fields_are_flattened() {
        let export = TableExport::new(vec!["ijk".to_string()], &sample_tables());
        let value: serde_json::Value =
            serde_json::from_str(&tables_to_json(&export).unwrap()).unwrap();

        assert_eq!(value["version"], SCHEMA_VERSION);
        assert_eq!(value["tables"][0]["group"], "L3");
        assert_eq!(value["tables"][0]["name"], "Region Info");
        assert_eq!(value["tables"][0]["rows"][0][0], "ijk");
    }

    #[test]
    fn test_write_and_read_export() {
        let tables = sample_tables();
        let export = TableExport::new(vec!["ijk".to_string()], &tables);
        let temp_file = NamedTempFile::new().unwrap();

        write_tables_json(&export, temp_file.path()).unwrap();
        let loaded = read_tables_json(temp_file.path()).unwrap();

        assert_eq!(loaded, export);
        assert_eq!(loaded.into_table_set(), tables);
    }
}
