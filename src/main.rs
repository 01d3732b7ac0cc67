//! perfctr-report CLI
//!
//! Combines LIKWID perfctr CSV reports into a single report with one
//! section per counter table.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use perfctr_report::commands::{
    display_version, execute_combine, execute_inspect, validate_args, CombineArgs, InspectArgs,
    OutputFormat,
};
use perfctr_report::utils::config::{DEFAULT_IDENTIFIER_LABEL, DEFAULT_OUTPUT_PATH};

/// perfctr-report - merge LIKWID perfctr CSV reports
#[derive(Parser, Debug)]
#[command(name = "perfctr-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge same-titled tables from many reports into one report
    Combine {
        /// Report files, merged in the given order
        reports: Vec<PathBuf>,

        /// File listing one report path per line (merged after REPORTS)
        #[arg(short, long)]
        list: Option<PathBuf>,

        /// Output path for the combined report
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Column name identifying each row's report
        #[arg(long, env = "PERFCTR_REPORT_LABEL", default_value = DEFAULT_IDENTIFIER_LABEL)]
        label: String,
    },

    /// List the tables found in one report
    Inspect {
        /// Report file to scan
        report: PathBuf,

        /// Print headers and rows of every table
        #[arg(long)]
        rows: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Combine {
            reports,
            list,
            output,
            format,
            label,
        } => {
            let args = CombineArgs {
                reports,
                report_list: list,
                output,
                format,
                label,
            };

            validate_args(&args)?;
            execute_combine(args)?;
        }

        Commands::Inspect { report, rows } => {
            execute_inspect(InspectArgs {
                report,
                show_rows: rows,
            })?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
