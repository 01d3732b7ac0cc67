//! Report scanner: splits one perfctr CSV stream into its tables.
//!
//! A report interleaves counter tables with hardware description sections:
//!
//! ```text
//! STRUCT,Info,3
//! CPU name:,Intel(R) Core(TM) i7
//! TABLE,Region mmul,Group 1 Raw,5
//! Region Info,HWThread 0
//! RDTSC Runtime [s],0.12
//! call count,1
//! ```
//!
//! `TABLE` rows announce a table (name in field 2, group in field 3) whose
//! header is the following record. `STRUCT` rows open a section whose rows
//! are dropped until the next `TABLE` marker.

use super::schema::{Identifier, Record, Table, TableSet, TableTitle};
use crate::utils::config::{STRUCT_MARKER, TABLE_MARKER};
use crate::utils::error::ScanError;
use log::{debug, trace};
use std::io::Read;

/// Scanner position within the report
#[derive(Debug)]
enum State {
    /// Outside any table; records are discarded
    Idle,
    /// A `TABLE` marker was seen; the next record is the header
    AwaitingHeader { key: TableTitle, marker_record: usize },
    /// Appending records to the active table
    Reading(Table),
}

/// Push-driven state machine turning records into a [`TableSet`]
///
/// **Public** - feed records with [`Scanner::push`], then call [`Scanner::finish`]
#[derive(Debug)]
pub struct Scanner {
    identifier: Identifier,
    state: State,
    tables: TableSet,
    records_seen: usize,
}

impl Scanner {
    pub fn new(identifier: Identifier) -> Self {
        Self {
            identifier,
            state: State::Idle,
            tables: TableSet::new(),
            records_seen: 0,
        }
    }

    /// Process a single record
    ///
    /// # Errors
    /// * `ScanError::IncompleteMarker` - `TABLE` marker without name and group
    pub fn push(&mut self, mut record: Record) -> Result<(), ScanError> {
        self.records_seen += 1;

        if record.is_empty() {
            trace!("Skipping empty record {}", self.records_seen);
            return Ok(());
        }

        // The record after a TABLE marker is the header, whatever it contains
        let state = std::mem::replace(&mut self.state, State::Idle);
        if let State::AwaitingHeader { key, .. } = state {
            record.insert(0, self.identifier.label.clone());
            debug!("Opened table '{}' with {} columns", key, record.len());
            self.state = State::Reading(Table::new(key, record));
            return Ok(());
        }
        self.state = state;

        if record[0] == TABLE_MARKER {
            self.flush();
            if record.len() < 3 {
                return Err(ScanError::IncompleteMarker {
                    record: self.records_seen,
                    fields: record.len(),
                });
            }
            let name = std::mem::take(&mut record[1]);
            let group = std::mem::take(&mut record[2]);
            self.state = State::AwaitingHeader {
                key: TableTitle::new(group, name),
                marker_record: self.records_seen,
            };
        } else if record[0] == STRUCT_MARKER {
            self.flush();
            trace!("Entering STRUCT section at record {}", self.records_seen);
        } else if let State::Reading(table) = &mut self.state {
            record.insert(0, self.identifier.value.clone());
            table.add_row(record);
        }

        Ok(())
    }

    /// Finalize the active table and return every table found
    ///
    /// # Errors
    /// * `ScanError::MissingHeader` - the stream ended right after a `TABLE` marker
    pub fn finish(mut self) -> Result<TableSet, ScanError> {
        if let State::AwaitingHeader { marker_record, .. } = self.state {
            return Err(ScanError::MissingHeader {
                record: marker_record,
            });
        }
        self.flush();

        debug!(
            "Scanned {} records into {} tables",
            self.records_seen,
            self.tables.len()
        );
        Ok(self.tables)
    }

    /// Move the active table (if any) into the result and go idle
    fn flush(&mut self) {
        if let State::Reading(table) = std::mem::replace(&mut self.state, State::Idle) {
            debug!("Closing table '{}' with {} rows", table.key, table.rows.len());
            self.tables.insert_or_extend(table);
        }
    }
}

/// Scan an in-memory record stream
///
/// **Public** - entry point when records are already split into fields
pub fn scan_records<I>(records: I, identifier: Identifier) -> Result<TableSet, ScanError>
where
    I: IntoIterator<Item = Record>,
{
    let mut scanner = Scanner::new(identifier);
    for record in records {
        scanner.push(record)?;
    }
    scanner.finish()
}

/// Scan a CSV byte stream
///
/// **Public** - main entry point for report files
///
/// # Arguments
/// * `reader` - CSV text of one report
/// * `identifier` - label/value pair injected into headers and rows
///
/// # Errors
/// * `ScanError::Read` - the underlying stream failed
/// * `ScanError::Csv` - the stream is not valid CSV (e.g. invalid UTF-8)
/// * `ScanError::MissingHeader` / `ScanError::IncompleteMarker` - broken table markers
pub fn scan_reader<R: Read>(reader: R, identifier: Identifier) -> Result<TableSet, ScanError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut scanner = Scanner::new(identifier);
    for result in csv_reader.records() {
        let record = result?;
        scanner.push(record.iter().map(str::to_owned).collect())?;
    }
    scanner.finish()
}
