//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod combine;
pub mod inspect;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use combine::{execute_combine, load_report_list, validate_args};
pub use inspect::execute_inspect;
pub use models::{CombineArgs, InspectArgs, OutputFormat};
pub use utils::display_version;
