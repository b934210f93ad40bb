// Monarch Stats - Core Library
// Exposes all modules for use in the CLI and tests

pub mod config;
pub mod data_quality;
pub mod logging;
pub mod monarch;
pub mod output;
pub mod source;
pub mod stats;

// Re-export commonly used types
pub use config::{usage, Config, Mode, Source, DEFAULT_MONARCHS_URL};
pub use data_quality::{
    BatchSummary, DataQualityEngine, QualityIssue, QualityReport, Severity, ValidationResult,
};
pub use monarch::Monarch;
pub use output::{render_outcome, render_quality};
pub use source::{fetch_text, load_monarchs, parse_monarchs, read_file, LoadOutcome};
pub use stats::{
    longest_reigning_house, longest_reigning_monarch, most_common_first_name, MonarchReport,
    Reign,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Printed instead of the report when there is nothing to aggregate
pub const INVALID_DATA: &str = "Invalid Data";
