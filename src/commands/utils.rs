use crate::utils::config::SCHEMA_VERSION;

/// Display version information
pub fn display_version() {
    println!("perfctr-report v{}", env!("CARGO_PKG_VERSION"));
    println!("JSON export schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Splits, tags and merges LIKWID perfctr CSV reports.");
}
