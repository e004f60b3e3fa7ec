//! dirtree - recursive directory listing with metadata and summaries

pub mod entry;
pub mod error;
pub mod identity;
pub mod output;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use entry::{Entry, EntryKind, Permissions};
pub use error::{TraversalIssue, TraverseError};
pub use identity::{IdentityResolver, NumericResolver, SystemResolver};
pub use output::{EntryFormatter, OutputConfig, ReportWriter, print_json};
pub use stats::{GrandTotal, Summary};
pub use tree::{JsonReport, JsonRoot, TreeWalker, WalkResult, WalkerConfig};
