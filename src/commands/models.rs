use crate::utils::config::{DEFAULT_IDENTIFIER_LABEL, DEFAULT_OUTPUT_PATH};
use clap::ValueEnum;
use std::path::PathBuf;

/// Serialization used for the combined report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One CSV section per table
    #[default]
    Csv,
    /// Versioned JSON document
    Json,
}

/// Arguments for the combine command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CombineArgs {
    /// Report files given directly
    pub reports: Vec<PathBuf>,

    /// Text file listing one report path per line
    pub report_list: Option<PathBuf>,

    /// Output path for the combined report
    pub output: PathBuf,

    /// Output serialization
    pub format: OutputFormat,

    /// Column name injected in front of every header
    pub label: String,
}

impl Default for CombineArgs {
    fn default() -> Self {
        Self {
            reports: Vec::new(),
            report_list: None,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            format: OutputFormat::Csv,
            label: DEFAULT_IDENTIFIER_LABEL.to_string(),
        }
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone)]
pub struct InspectArgs {
    /// Report file to scan
    pub report: PathBuf,

    /// Print every table's header and rows, not just the overview
    pub show_rows: bool,
}
