//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a single report stream
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("TABLE marker at record {record} is not followed by a header record")]
    MissingHeader { record: usize },

    #[error("TABLE marker at record {record} has {fields} field(s), expected name and group")]
    IncompleteMarker { record: usize, fields: usize },

    #[error("Failed to read report stream: {0}")]
    Read(#[source] std::io::Error),

    #[error("Invalid CSV in report stream: {0}")]
    Csv(#[source] csv::Error),
}

impl From<csv::Error> for ScanError {
    fn from(err: csv::Error) -> Self {
        // I/O failures mean the source went away, everything else is bad content
        if err.is_io_error() {
            ScanError::Read(err.into())
        } else {
            ScanError::Csv(err)
        }
    }
}

/// Errors raised while aggregating a list of reports
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report unavailable: {}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed report {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: ScanError,
    },
}

impl ReportError {
    /// Path of the report that failed
    pub fn path(&self) -> &std::path::Path {
        match self {
            ReportError::Unavailable { path, .. } | ReportError::Malformed { path, .. } => path,
        }
    }
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to write CSV: {0}")]
    CsvFailed(#[from] csv::Error),

    #[error("Output is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
