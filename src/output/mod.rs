//! Line formatting and report rendering
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `entry` - Per-entry lines, issue markers and root labels
//! - `report` - Column header, per-root footer and grand total
//! - `json` - JSON output

mod config;
mod entry;
mod json;
mod report;

// Re-export public types and functions
pub use config::{DEFAULT_NAME_WIDTH, OutputConfig};
pub use entry::{EntryFormatter, EntryLine, column_tail, truncate_name};
pub use json::print_json;
pub use report::{ReportWriter, pluralize};
