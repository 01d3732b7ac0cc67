//! Combined CSV writer.
//!
//! Layout:
//!
//! ```text
//! Combined reports
//!
//!
//! L3,Region Info
//! Executable,Region Info,HWThread 0
//! ijk,RDTSC Runtime [s],0.12
//!
//! ```
//!
//! Each table is written as a `group,name` line, its header, its rows and a
//! blank separator line. Rows are written as they are, ragged or not.

use super::{file_size, prepare_output_path};
use crate::parser::TableSet;
use crate::utils::config::COMBINED_REPORT_TITLE;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize the combined report into any writer
///
/// **Public** - core of the CSV output
pub fn write_combined_csv_to<W: Write>(
    tables: &TableSet,
    mut writer: W,
) -> Result<(), OutputError> {
    write_records(&mut writer, [[COMBINED_REPORT_TITLE]])?;
    writer.write_all(b"\n\n")?;

    for table in tables {
        write_records(&mut writer, [[table.group(), table.name()]])?;
        write_records(&mut writer, std::iter::once(&table.headers).chain(&table.rows))?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Write records through a short-lived csv writer, leaving `writer` usable
///
/// **Private** - blank separator lines are written to `writer` directly,
/// since the csv writer renders an empty record as `""`
fn write_records<W, I, R>(writer: &mut W, records: I) -> Result<(), OutputError>
where
    W: Write,
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);
    for record in records {
        csv_writer.write_record(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render the combined report as a string
///
/// **Public** - useful for tests and previews
pub fn combined_csv_string(tables: &TableSet) -> Result<String, OutputError> {
    let mut buffer = Vec::new();
    write_combined_csv_to(tables, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write the combined report to a file
///
/// **Public** - main entry point for CSV output
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, directory, or uncreatable parent
/// * `OutputError::WriteFailed` / `OutputError::CsvFailed` - I/O error during write
pub fn write_combined_csv(
    tables: &TableSet,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing combined report to: {}", output_path.display());
    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    write_combined_csv_to(tables, BufWriter::new(file))?;

    info!(
        "Combined report written successfully ({} bytes)",
        file_size(output_path)
    );
    Ok(())
}
