//! Configuration and constants for the report parser and CLI.

/// First-field literal announcing a counter table.
/// The marker row carries the table name in field 2 and the group in field 3.
pub const TABLE_MARKER: &str = "TABLE";

/// First-field literal opening a hardware description section
pub const STRUCT_MARKER: &str = "STRUCT";

/// Column name injected in front of every table header when none is given
pub const DEFAULT_IDENTIFIER_LABEL: &str = "Executable";

/// Suffix stripped from a report's file name to build its identifier
pub const REPORT_EXTENSION: &str = ".csv";

/// Separator between group and name in a rendered table title
pub const TITLE_SEPARATOR: &str = " - ";

/// First line of the combined CSV report
pub const COMBINED_REPORT_TITLE: &str = "Combined reports";

/// Output path used by `combine` when `--output` is omitted
pub const DEFAULT_OUTPUT_PATH: &str = "combined.csv";

/// Current JSON export schema version
pub const SCHEMA_VERSION: &str = "1.0.0";
